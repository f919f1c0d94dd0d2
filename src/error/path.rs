use super::{InvalidBaseCell, InvalidDigit};
use std::fmt;

/// Errors occurring while building a hierarchical cell path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    /// The base cell is out of range.
    Base(InvalidBaseCell),
    /// A child digit is out of range.
    Digit(InvalidDigit),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Base(err) => write!(f, "{err}"),
            Self::Digit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Base(ref err) => Some(err),
            Self::Digit(ref err) => Some(err),
        }
    }
}

impl From<InvalidBaseCell> for PathError {
    fn from(value: InvalidBaseCell) -> Self {
        Self::Base(value)
    }
}

impl From<InvalidDigit> for PathError {
    fn from(value: InvalidDigit) -> Self {
        Self::Digit(value)
    }
}
