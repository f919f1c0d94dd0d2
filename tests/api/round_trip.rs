use h3syl::LatLng;

// Landmarks, poles, antimeridian and pentagon neighborhoods.
const LANDMARKS: [(f64, f64); 12] = [
    (48.8566, 2.3522),     // Paris
    (40.7589, -73.9851),   // New York
    (35.6762, 139.6503),   // Tokyo
    (-33.8688, 151.2093),  // Sydney
    (55.7558, 37.6173),    // Moscow
    (-22.9068, -43.1729),  // Rio de Janeiro
    (1.3521, 103.8198),    // Singapore
    (0., 0.),              // Gulf of Guinea
    (90., 0.),             // North pole
    (-90., 0.),            // South pole
    (0.3, 179.95),         // Antimeridian
    (64.70000012793489, 10.53619907546772), // Pentagon (base cell 4)
];

#[test]
fn landmark_round_trips() {
    let system = crate::scenario_system();

    for (lat, lon) in LANDMARKS {
        let address = system.encode(lat, lon).expect("address");
        let center = system.decode(&address).expect("center");

        let input = LatLng::new(lat, lon).expect("input coordinate");
        assert!(
            input.distance_m(center) <= 1.0,
            "({lat}, {lon}): {address} decoded {:.3}m away",
            input.distance_m(center)
        );

        let again = system
            .encode(center.lat(), center.lng())
            .expect("address of the center");
        assert_eq!(again, address, "({lat}, {lon})");
    }
}

#[test]
fn global_grid_round_trips() {
    let system = crate::scenario_system();

    let mut count = 0;
    let mut lat = -84.;
    while lat <= 84. {
        let mut lon = -176.;
        while lon <= 176. {
            let address = system.encode(lat, lon).expect("address");
            let center = system.decode(&address).expect("center");
            let again = system
                .encode(center.lat(), center.lng())
                .expect("address of the center");

            assert_eq!(again, address, "({lat}, {lon})");
            let input = LatLng::new(lat, lon).expect("input coordinate");
            assert!(
                input.distance_m(center) <= 1.0,
                "({lat}, {lon}) decoded {:.3}m away",
                input.distance_m(center)
            );

            count += 1;
            lon += 16.;
        }
        lat += 12.;
    }
    assert!(count > 300, "swept {count} coordinates");
}

#[test]
fn every_address_is_full_length() {
    let system = crate::scenario_system();
    let expected = system.config().address_chars();

    for (lat, lon) in LANDMARKS {
        let address = system.encode(lat, lon).expect("address");
        assert_eq!(address.len(), expected, "({lat}, {lon})");
    }
}
