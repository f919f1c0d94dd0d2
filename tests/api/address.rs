use h3syl::{error::AddressError, CellNumber, CHILD_SPAN};

#[test]
fn paris_round_trip() {
    let system = crate::scenario_system();

    let address = system.encode(48.8566, 2.3522).expect("address");
    assert_eq!(address.len(), 16);

    let center = system.decode(&address).expect("center");
    let again = system
        .encode(center.lat(), center.lng())
        .expect("address of the center");
    assert_eq!(again, address);
}

#[test]
fn well_formed_but_out_of_range() {
    let system = crate::scenario_system();

    // 75^8 - 1: syntactically perfect, beyond the cell space.
    let result = system.decode("zuzuzuzuzuzuzuzu");
    assert!(
        matches!(result, Err(AddressError::OutOfRange { .. })),
        "got {result:?}"
    );
    assert!(!system.is_valid("zuzuzuzuzuzuzuzu"));
}

#[test]
fn malformed_addresses() {
    let system = crate::scenario_system();

    assert!(matches!(
        system.decode(""),
        Err(AddressError::Empty)
    ));
    assert!(matches!(
        system.decode("dafe"),
        Err(AddressError::Length { .. })
    ));
    assert!(matches!(
        system.decode("xadadadadadadada"),
        Err(AddressError::UnknownConsonant { found: 'x', .. })
    ));
    assert!(matches!(
        system.decode("dxdadadadadadada"),
        Err(AddressError::UnknownVowel { found: 'x', .. })
    ));
}

#[test]
fn deleted_pentagon_subsequence_is_rejected() {
    let system = crate::scenario_system();

    // Base cell 4 is a pentagon; a leading K-axis digit under it names no
    // cell. Build the offending number directly: pentagon position, first
    // child digit 1, every other digit 0.
    let position = u64::from(system.ordering().position_of(4));
    let value = position * CHILD_SPAN + 678_223_072_849; // 7^14
    let number = CellNumber::try_from(value).expect("cell number");
    let address = h3syl::encode(number, system.config());

    let result = system.decode(&address);
    assert!(
        matches!(result, Err(AddressError::Cell(_))),
        "got {result:?}"
    );
    assert!(!system.is_valid(&address));
}

#[test]
fn all_zero_address_is_the_path_start() {
    let system = crate::scenario_system();

    let center = system.decode("dadadadadadadada").expect("center");
    let again = system
        .encode(center.lat(), center.lng())
        .expect("address of the center");
    assert_eq!(again, "dadadadadadadada");
}
