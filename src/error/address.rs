use crate::CELL_SPACE;
use h3o::error::InvalidCellIndex;
use std::fmt;

/// Errors occurring while parsing or decoding a syllable address.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum AddressError {
    /// The address is empty.
    Empty,
    /// The address has an odd number of characters and cannot be split into
    /// consonant-vowel syllables.
    OddLength {
        /// Length of the offending address, in characters.
        length: usize,
    },
    /// The address does not have the length mandated by the configuration.
    Length {
        /// Length of the offending address, in characters.
        length: usize,
        /// Expected length, in characters (twice the address length).
        expected: usize,
    },
    /// A syllable starts with a character that is not a configured consonant.
    UnknownConsonant {
        /// Byte offset of the character in the address.
        offset: usize,
        /// The offending character.
        found: char,
    },
    /// A syllable ends with a character that is not a configured vowel.
    UnknownVowel {
        /// Byte offset of the character in the address.
        offset: usize,
        /// The offending character.
        found: char,
    },
    /// The address is well-formed but its integer value names no cell.
    OutOfRange {
        /// The decoded integer value.
        value: u64,
    },
    /// The decoded integer falls into a deleted pentagon subsequence and
    /// does not correspond to an existing cell.
    Cell(InvalidCellIndex),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => write!(f, "empty address"),
            Self::OddLength { length } => {
                write!(f, "odd address length (got {length} characters)")
            }
            Self::Length { length, expected } => write!(
                f,
                "wrong address length (got {length} characters, expected \
                 {expected})"
            ),
            Self::UnknownConsonant { offset, found } => write!(
                f,
                "unknown consonant {found:?} at offset {offset}"
            ),
            Self::UnknownVowel { offset, found } => {
                write!(f, "unknown vowel {found:?} at offset {offset}")
            }
            Self::OutOfRange { value } => write!(
                f,
                "address value out of range (got {value}, max {})",
                CELL_SPACE - 1
            ),
            Self::Cell(err) => write!(f, "address names no cell: {err}"),
        }
    }
}

impl std::error::Error for AddressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Cell(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidCellIndex> for AddressError {
    fn from(value: InvalidCellIndex) -> Self {
        Self::Cell(value)
    }
}
