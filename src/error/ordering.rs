use std::fmt;

/// Errors occurring while generating or loading the base-cell ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderingError {
    /// The Hamiltonian search exhausted its wall-clock budget.
    Deadline {
        /// The budget, in seconds.
        seconds: u64,
    },
    /// A persisted ordering record is structurally invalid.
    Record {
        /// What the validation found.
        reason: String,
    },
    /// Two consecutive cells of the ordering are not spatial neighbors.
    BrokenPath {
        /// Position of the first cell of the offending pair.
        position: usize,
    },
    /// The ordering JSON could not be parsed.
    Syntax {
        /// The underlying parse failure.
        message: String,
    },
}

impl fmt::Display for OrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Deadline { seconds } => write!(
                f,
                "no Hamiltonian path found within {seconds} seconds"
            ),
            Self::Record { ref reason } => {
                write!(f, "inconsistent ordering record: {reason}")
            }
            Self::BrokenPath { position } => write!(
                f,
                "cells at positions {position} and {} are not neighbors",
                position + 1
            ),
            Self::Syntax { ref message } => {
                write!(f, "malformed ordering JSON: {message}")
            }
        }
    }
}

impl std::error::Error for OrderingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<serde_json::Error> for OrderingError {
    fn from(value: serde_json::Error) -> Self {
        Self::Syntax {
            message: value.to_string(),
        }
    }
}
