use super::*;
use crate::ordering::CellOrdering;

#[test]
fn range() {
    assert!(CellNumber::try_from(0).is_ok());
    assert!(CellNumber::try_from(CELL_SPACE - 1).is_ok());

    assert!(CellNumber::try_from(CELL_SPACE).is_err(), "out of range");
    assert!(CellNumber::try_from(u64::MAX).is_err(), "out of range");
}

#[test]
fn zero_is_the_path_start() {
    let ordering = CellOrdering::bundled();
    let number = CellNumber::try_from(0).expect("cell number");
    let path = number.to_path(ordering);

    assert_eq!(path.base(), ordering.cell_at(0));
    assert_eq!(path.digits(), [0; DEPTH]);
    assert_eq!(CellNumber::from_path(&path, ordering), number);
}

#[test]
fn max_is_the_path_end() {
    let ordering = CellOrdering::bundled();
    let number = CellNumber::try_from(CELL_SPACE - 1).expect("cell number");
    let path = number.to_path(ordering);

    assert_eq!(path.base(), ordering.cell_at(121));
    assert_eq!(path.digits(), [6; DEPTH]);
    assert_eq!(CellNumber::from_path(&path, ordering), number);
}

#[test]
fn digits_pack_most_significant_first() {
    let ordering = CellOrdering::bundled();

    let number = CellNumber::try_from(6).expect("cell number");
    let path = number.to_path(ordering);
    let mut expected = [0; DEPTH];
    expected[DEPTH - 1] = 6;
    assert_eq!(path.digits(), expected, "least significant digit is res 15");

    let number = CellNumber::try_from(CHILD_SPAN - 1).expect("cell number");
    let path = number.to_path(ordering);
    assert_eq!(path.digits(), [6; DEPTH], "full septary digits");
    assert_eq!(path.base(), ordering.cell_at(0), "still the first base");
}

#[test]
fn base_boundary() {
    let ordering = CellOrdering::bundled();

    let last = CellNumber::try_from(CHILD_SPAN - 1).expect("cell number");
    let first = CellNumber::try_from(CHILD_SPAN).expect("cell number");

    assert_eq!(last.to_path(ordering).base(), ordering.cell_at(0));
    assert_eq!(first.to_path(ordering).base(), ordering.cell_at(1));
    assert_eq!(first.to_path(ordering).digits(), [0; DEPTH]);
}

#[test]
fn round_trip() {
    let ordering = CellOrdering::bundled();
    let samples = [
        0,
        1,
        6,
        7,
        CHILD_SPAN - 1,
        CHILD_SPAN,
        42 * CHILD_SPAN + 123_456_789,
        CELL_SPACE / 2,
        CELL_SPACE - 2,
        CELL_SPACE - 1,
    ];

    for value in samples {
        let number = CellNumber::try_from(value).expect("cell number");
        let path = number.to_path(ordering);
        let packed = CellNumber::from_path(&path, ordering);

        assert_eq!(u64::from(packed), value, "round trip of {value}");
    }
}

#[test]
fn display() {
    let number = CellNumber::try_from(42).expect("cell number");
    assert_eq!(number.to_string(), "42");
}
