use h3syl::error::{AddressError, PrefixError};

#[test]
fn single_syllable_prefix() {
    let system = crate::scenario_system();
    let estimate = system.estimate("da").expect("estimate");

    assert_eq!(estimate.completeness(), 1);
    assert!(estimate.area_km2() > 0.);
    assert!(estimate.confidence() > 0. && estimate.confidence() <= 1.);
    assert!(estimate.bounds().north() > estimate.bounds().south());
    assert!(estimate.bounds().east() > estimate.bounds().west());
    // A one-syllable region spans on the order of a few base cells.
    assert!(estimate.area_km2() > 1e6, "{}", estimate.area_km2());
}

#[test]
fn refining_shrinks_the_region() {
    let system = crate::scenario_system();

    let coarse = system.estimate("da").expect("estimate");
    let fine = system.estimate("dafe").expect("estimate");

    assert_eq!(fine.completeness(), 2);
    assert!(fine.area_km2() < coarse.area_km2());
    assert!(fine.confidence() > coarse.confidence());

    let center = fine.center();
    assert!(
        coarse.bounds().contains(center.lat(), center.lng()),
        "the refined region stays within the coarse one"
    );
}

#[test]
fn empty_prefix() {
    let system = crate::scenario_system();
    assert_eq!(system.estimate(""), Err(PrefixError::Empty));
}

#[test]
fn unknown_syllable() {
    let system = crate::scenario_system();

    assert!(matches!(
        system.estimate("xx"),
        Err(PrefixError::Address(AddressError::UnknownConsonant {
            found: 'x',
            ..
        }))
    ));
}

#[test]
fn complete_address_is_rejected() {
    let system = crate::scenario_system();
    let address = system.encode(48.8566, 2.3522).expect("address");

    assert_eq!(
        system.estimate(&address),
        Err(PrefixError::Complete { syllables: 8 })
    );

    let long = format!("{address}da");
    assert_eq!(
        system.estimate(&long),
        Err(PrefixError::TooLong {
            syllables: 9,
            max: 8
        })
    );
}

#[test]
fn out_of_range_prefix() {
    let system = crate::scenario_system();

    // The top of the syllable space is unused: "zu" starts beyond it.
    assert!(matches!(
        system.estimate("zu"),
        Err(PrefixError::Address(AddressError::OutOfRange { .. }))
    ));
}

#[test]
fn prefixes_contain_their_location() {
    let system = crate::scenario_system();
    let locations = [
        (48.8566, 2.3522),
        (-33.8688, 151.2093),
        (0.3, 179.95),
        (64.70000012793489, 10.53619907546772),
        (89.5, 45.),
        (-89.5, -120.),
    ];

    for (lat, lon) in locations {
        let address = system.encode(lat, lon).expect("address");

        for syllables in 1..system.config().address_length() {
            let prefix = &address[..2 * usize::from(syllables)];
            let estimate = system.estimate(prefix).expect("estimate");

            assert_eq!(estimate.completeness(), syllables);
            assert!(
                estimate.bounds().contains(lat, lon),
                "({lat}, {lon}) escaped the bounds of {prefix:?}"
            );
        }
    }
}

#[test]
fn confidence_grows_and_area_shrinks() {
    let system = crate::scenario_system();
    let address = system.encode(48.8566, 2.3522).expect("address");

    let mut area = f64::INFINITY;
    let mut confidence = 0.;
    for syllables in 1..system.config().address_length() {
        let prefix = &address[..2 * usize::from(syllables)];
        let estimate = system.estimate(prefix).expect("estimate");

        // Areas shrink with depth; ties only happen when consecutive
        // intervals straddle the same hierarchy boundary and resolve to
        // the same ancestor cell.
        assert!(
            estimate.area_km2() <= area,
            "area grew at {prefix:?}: {} > {area}",
            estimate.area_km2()
        );
        assert!(
            estimate.confidence() > confidence,
            "confidence fell at {prefix:?}: {} <= {confidence}",
            estimate.confidence()
        );
        area = estimate.area_km2();
        confidence = estimate.confidence();
    }
}

#[test]
fn refinements_extend_the_prefix() {
    let system = crate::scenario_system();
    let address = system.encode(35.6762, 139.6503).expect("address");

    for syllables in 1..system.config().address_length() {
        let offset = 2 * usize::from(syllables);
        let prefix = &address[..offset];
        let next = &address[offset..offset + 2];
        let estimate = system.estimate(prefix).expect("estimate");

        assert!(
            estimate
                .refinements()
                .iter()
                .any(|syllable| syllable.to_string() == next),
            "{next:?} missing from the refinements of {prefix:?}"
        );
    }
}
