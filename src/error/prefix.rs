use super::AddressError;
use std::fmt;

/// Errors occurring while estimating a location from a partial address.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum PrefixError {
    /// The prefix is empty.
    Empty,
    /// The prefix is a complete address: use direct decoding instead.
    Complete {
        /// Number of syllables in the prefix (the full address length).
        syllables: u8,
    },
    /// The prefix is longer than a complete address.
    TooLong {
        /// Number of syllables in the prefix.
        syllables: u8,
        /// Address length of the configuration.
        max: u8,
    },
    /// The prefix could not be parsed into syllables.
    Address(AddressError),
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => write!(f, "empty prefix"),
            Self::Complete { syllables } => write!(
                f,
                "prefix of {syllables} syllables is a complete address"
            ),
            Self::TooLong { syllables, max } => write!(
                f,
                "prefix of {syllables} syllables exceeds the address \
                 length ({max})"
            ),
            Self::Address(err) => write!(f, "malformed prefix: {err}"),
        }
    }
}

impl std::error::Error for PrefixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Address(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<AddressError> for PrefixError {
    fn from(value: AddressError) -> Self {
        Self::Address(value)
    }
}
