use h3syl::{error::ConfigError, Alphabet, Config, CELL_SPACE};

#[test]
fn bundled_configs_match_their_derivation() {
    let alphabet = Alphabet::get("ascii").expect("ascii alphabet");

    let bundled = Config::bundled("ascii-dnqqwn").expect("bundled config");
    let derived = Config::from_letters(alphabet, "sptkmnlfrwhvjzdaeiou")
        .expect("derived config");
    assert_eq!(bundled, derived);

    let bundled = Config::bundled("ascii-fqwfmd").expect("bundled config");
    let derived =
        Config::from_letters(alphabet, "abcdefghijklmnopqrstuvwxyz")
            .expect("derived config");
    assert_eq!(bundled, derived);
}

#[test]
fn bundled_records_have_stable_keys() {
    for name in Config::bundled_names() {
        let config = Config::bundled(&name).expect("bundled config");
        let value =
            serde_json::to_value(config.to_record()).expect("record value");

        assert_eq!(value["name"], name.as_str());
        assert_eq!(value["h3_resolution"], 15);
        assert_eq!(
            value["metadata"]["h3_target_space"],
            serde_json::json!(CELL_SPACE)
        );
        assert!(value["metadata"]["coverage_ratio"].as_f64() >= Some(1.));
        assert!(value["consonants"].is_array());
        assert!(value["vowels"].is_array());
    }
}

#[test]
fn identifier_is_stable_across_reorderings() {
    let alphabet = Alphabet::get("ascii").expect("ascii alphabet");

    let sorted = Config::from_letters(alphabet, "adefhijklmnoprstuvwz")
        .expect("config");
    let shuffled = Config::from_letters(alphabet, "zdlrwhvjsptkmnfaeiou")
        .expect("config");

    assert_eq!(sorted.name(), shuffled.name());
    assert_eq!(sorted, shuffled);
}

#[test]
fn infeasible_and_partial_selections_are_rejected() {
    let alphabet = Alphabet::get("ascii").expect("ascii alphabet");

    assert!(matches!(
        Config::from_letters(alphabet, "bcdfg"),
        Err(ConfigError::MissingVowel)
    ));
    assert!(matches!(
        Config::from_letters(alphabet, "aeiou"),
        Err(ConfigError::MissingConsonant)
    ));
    assert!(matches!(
        Config::from_letters(alphabet, "bcae"),
        Err(ConfigError::Infeasible { syllables: 4 })
    ));
}

#[test]
fn systems_only_differ_by_configuration() {
    let minimal = crate::scenario_system();
    let full = h3syl::SyllableSystem::new(
        Config::bundled("ascii-fqwfmd").expect("bundled config"),
    )
    .expect("system");

    let lat = 41.9028;
    let lon = 12.4964;
    let minimal_address = minimal.encode(lat, lon).expect("address");
    let full_address = full.encode(lat, lon).expect("address");

    // Same cell, different spellings.
    assert_ne!(minimal_address, full_address);
    let lhs = minimal.decode(&minimal_address).expect("center");
    let rhs = full.decode(&full_address).expect("center");
    assert!(lhs.distance_m(rhs) < 1e-6, "same decoded center");
}
