use std::fmt;

/// Errors occurring while deriving or loading a syllable configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested alphabet is not registered.
    UnknownAlphabet {
        /// The requested alphabet name.
        name: String,
    },
    /// No bundled configuration exists under the requested name.
    UnknownConfig {
        /// The requested configuration name.
        name: String,
    },
    /// A selected letter is not part of the alphabet.
    UnknownLetter {
        /// The offending letter.
        letter: char,
        /// Name of the alphabet it was checked against.
        alphabet: &'static str,
    },
    /// The letter selection contains no vowel.
    MissingVowel,
    /// The letter selection contains no consonant.
    MissingConsonant,
    /// The letter selection cannot cover the cell space within the maximum
    /// address length.
    Infeasible {
        /// Number of syllables the selection yields.
        syllables: u32,
    },
    /// A persisted configuration record is internally inconsistent.
    Record {
        /// What the validation found.
        reason: String,
    },
    /// The configuration JSON could not be parsed.
    Syntax {
        /// The underlying parse failure.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnknownAlphabet { ref name } => {
                write!(f, "unknown alphabet: {name}")
            }
            Self::UnknownConfig { ref name } => {
                write!(f, "no bundled configuration named {name}")
            }
            Self::UnknownLetter { letter, alphabet } => write!(
                f,
                "letter {letter:?} is not part of the {alphabet} alphabet"
            ),
            Self::MissingVowel => {
                write!(f, "at least one vowel is required")
            }
            Self::MissingConsonant => {
                write!(f, "at least one consonant is required")
            }
            Self::Infeasible { syllables } => write!(
                f,
                "{syllables} syllables cannot cover the cell space within \
                 the maximum address length"
            ),
            Self::Record { ref reason } => {
                write!(f, "inconsistent configuration record: {reason}")
            }
            Self::Syntax { ref message } => {
                write!(f, "malformed configuration JSON: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Syntax {
            message: value.to_string(),
        }
    }
}
