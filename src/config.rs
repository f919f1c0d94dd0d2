//! Syllable configurations.
//!
//! A configuration partitions a letter selection into sorted consonants and
//! vowels, derives the minimal address length whose combinations cover the
//! cell space, and carries the canonical base-26 identifier of the
//! selection. Configurations are immutable once constructed and are
//! persisted as JSON records with stable keys.
//!
//! The address space uses the plain `A^L` count: adjacent duplicate
//! syllables are allowed. Historical variants excluding adjacent duplicates
//! are intentionally not supported, as interoperability requires the simple
//! convention.

use crate::{
    alphabet::Alphabet,
    error::ConfigError,
    CELL_SPACE, MAX_ADDRESS_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration records shipped with the crate.
const BUNDLED: [&str; 2] = [
    include_str!("../configs/ascii-dnqqwn.json"),
    include_str!("../configs/ascii-fqwfmd.json"),
];

// -----------------------------------------------------------------------------

/// An immutable syllable configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Configuration name: `<alphabet>-<identifier>`.
    name: String,
    /// Human-readable description.
    description: String,
    /// The alphabet the letters were selected from.
    alphabet: &'static Alphabet,
    /// Selected consonants, sorted.
    consonants: Vec<char>,
    /// Selected vowels, sorted.
    vowels: Vec<char>,
    /// Address length, in syllables.
    address_length: u8,
    /// Number of distinct syllables (consonants × vowels).
    syllables: u32,
    /// Total number of addresses (`syllables^address_length`).
    combinations: u64,
}

impl Config {
    /// Derives a configuration from a letter selection.
    ///
    /// Letters are lowercased and deduplicated; the alphabet's vowel subset
    /// partitions them. The address length is the smallest `L` such that
    /// `(consonants × vowels)^L` covers the cell space.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownLetter`] when a letter is not part of the
    ///   alphabet.
    /// - [`ConfigError::MissingVowel`]/[`ConfigError::MissingConsonant`]
    ///   when the selection lacks one side of the partition.
    /// - [`ConfigError::Infeasible`] when no address length up to
    ///   [`MAX_ADDRESS_LENGTH`](crate::MAX_ADDRESS_LENGTH) covers the cell
    ///   space.
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::{Alphabet, Config};
    ///
    /// let alphabet = Alphabet::get("ascii")?;
    /// let config = Config::from_letters(alphabet, "sptkmnlfrwhvjzdaeiou")?;
    ///
    /// assert_eq!(config.name(), "ascii-dnqqwn");
    /// assert_eq!(config.address_length(), 8);
    /// # Ok::<(), h3syl::error::ConfigError>(())
    /// ```
    pub fn from_letters(
        alphabet: &'static Alphabet,
        letters: &str,
    ) -> Result<Self, ConfigError> {
        let selection = letters
            .chars()
            .map(|letter| letter.to_ascii_lowercase())
            .collect::<BTreeSet<_>>();
        alphabet.check_letters(&selection)?;

        let (vowels, consonants): (Vec<_>, Vec<_>) = selection
            .iter()
            .copied()
            .partition(|&letter| alphabet.is_vowel(letter));
        if vowels.is_empty() {
            return Err(ConfigError::MissingVowel);
        }
        if consonants.is_empty() {
            return Err(ConfigError::MissingConsonant);
        }

        let syllables = u32::try_from(consonants.len() * vowels.len())
            .expect("syllable count fits in 32 bits");
        let (address_length, combinations) = minimal_length(syllables)
            .ok_or(ConfigError::Infeasible { syllables })?;

        let identifier = alphabet.identifier(&selection);
        Ok(Self {
            name: format!("{}-{identifier}", alphabet.name()),
            description: format!(
                "{}, {} consonants, {} vowels, {} syllables",
                alphabet.description(),
                consonants.len(),
                vowels.len(),
                address_length,
            ),
            alphabet,
            consonants,
            vowels,
            address_length,
            syllables,
            combinations,
        })
    }

    /// Rebuilds a configuration from a persisted record, validating every
    /// derived field.
    ///
    /// The factory fails fast: any mismatch between the record's stored
    /// metadata and what this crate would derive from the same letter
    /// selection is rejected, since an inconsistent record would silently
    /// produce non-interoperable addresses.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Record`] describing the first inconsistency found,
    /// or the derivation errors of [`Config::from_letters`].
    pub fn from_record(record: &ConfigRecord) -> Result<Self, ConfigError> {
        let alphabet = Alphabet::get(&record.metadata.alphabet)?;
        if record.h3_resolution != 15 {
            return Err(record_error(format!(
                "unsupported grid resolution {}",
                record.h3_resolution
            )));
        }

        let letters = record
            .consonants
            .iter()
            .chain(record.vowels.iter())
            .collect::<String>();
        let config = Self::from_letters(alphabet, &letters)?;

        if record.consonants != config.consonants {
            return Err(record_error(
                "consonants are not the sorted consonant subset".to_owned(),
            ));
        }
        if record.vowels != config.vowels {
            return Err(record_error(
                "vowels are not the sorted vowel subset".to_owned(),
            ));
        }
        if record.address_length != config.address_length {
            return Err(record_error(format!(
                "address length {} is not minimal (expected {})",
                record.address_length, config.address_length
            )));
        }
        if record.name != config.name {
            return Err(record_error(format!(
                "name {} does not match identifier {}",
                record.name, config.name
            )));
        }

        let expected = config.metadata();
        let metadata = &record.metadata;
        if metadata.base26_identifier != expected.base26_identifier
            || metadata.binary_array != expected.binary_array
            || metadata.selected_letters != expected.selected_letters
        {
            return Err(record_error(
                "identifier metadata does not match the selection".to_owned(),
            ));
        }
        if metadata.total_syllables != expected.total_syllables
            || metadata.total_combinations != expected.total_combinations
            || metadata.h3_target_space != CELL_SPACE
        {
            return Err(record_error(
                "address space metadata does not match the selection"
                    .to_owned(),
            ));
        }
        if (metadata.coverage_ratio - expected.coverage_ratio).abs() > 1e-9 {
            return Err(record_error(format!(
                "coverage ratio {} does not match {}",
                metadata.coverage_ratio, expected.coverage_ratio
            )));
        }

        Ok(Self {
            description: record.description.clone(),
            ..config
        })
    }

    /// Parses and validates a configuration from its JSON record.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Syntax`] on malformed JSON, otherwise the errors of
    /// [`Config::from_record`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let record = serde_json::from_str::<ConfigRecord>(json)?;
        Self::from_record(&record)
    }

    /// Loads one of the configurations shipped with the crate.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownConfig`] when no bundled record matches the
    /// name.
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::Config;
    ///
    /// let config = Config::bundled("ascii-dnqqwn")?;
    /// assert_eq!(config.syllable_count(), 75);
    /// # Ok::<(), h3syl::error::ConfigError>(())
    /// ```
    pub fn bundled(name: &str) -> Result<Self, ConfigError> {
        for json in BUNDLED {
            let record = serde_json::from_str::<ConfigRecord>(json)?;
            if record.name == name {
                return Self::from_record(&record);
            }
        }
        Err(ConfigError::UnknownConfig {
            name: name.to_owned(),
        })
    }

    /// Names of the configurations shipped with the crate.
    #[must_use]
    pub fn bundled_names() -> Vec<String> {
        BUNDLED
            .iter()
            .filter_map(|json| {
                serde_json::from_str::<ConfigRecord>(json)
                    .map(|record| record.name)
                    .ok()
            })
            .collect()
    }

    /// Converts the configuration back into its persistable record.
    #[must_use]
    pub fn to_record(&self) -> ConfigRecord {
        ConfigRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            consonants: self.consonants.clone(),
            vowels: self.vowels.clone(),
            address_length: self.address_length,
            h3_resolution: 15,
            metadata: self.metadata(),
        }
    }

    /// Configuration name: `<alphabet>-<identifier>`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The alphabet the letters were selected from.
    #[must_use]
    pub const fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Selected consonants, sorted.
    #[must_use]
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Selected vowels, sorted.
    #[must_use]
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Address length, in syllables.
    #[must_use]
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// Address length, in characters.
    #[must_use]
    pub const fn address_chars(&self) -> usize {
        2 * self.address_length as usize
    }

    /// Number of distinct syllables.
    #[must_use]
    pub const fn syllable_count(&self) -> u32 {
        self.syllables
    }

    /// Total number of addresses, valid or not.
    #[must_use]
    pub const fn combinations(&self) -> u64 {
        self.combinations
    }

    /// Index of a consonant in the sorted consonant set.
    pub(crate) fn consonant_index(&self, consonant: char) -> Option<u32> {
        self.consonants
            .binary_search(&consonant)
            .ok()
            .map(|index| u32::try_from(index).expect("consonant index"))
    }

    /// Index of a vowel in the sorted vowel set.
    pub(crate) fn vowel_index(&self, vowel: char) -> Option<u32> {
        self.vowels
            .binary_search(&vowel)
            .ok()
            .map(|index| u32::try_from(index).expect("vowel index"))
    }

    /// Consonant at the given index of the sorted consonant set.
    pub(crate) fn consonant_at(&self, index: u32) -> char {
        self.consonants[index as usize]
    }

    /// Vowel at the given index of the sorted vowel set.
    pub(crate) fn vowel_at(&self, index: u32) -> char {
        self.vowels[index as usize]
    }

    /// Derived metadata of the configuration.
    fn metadata(&self) -> ConfigMetadata {
        let selection = self
            .consonants
            .iter()
            .chain(self.vowels.iter())
            .copied()
            .collect::<BTreeSet<_>>();
        #[allow(clippy::cast_precision_loss)]
        let coverage_ratio =
            self.combinations as f64 / CELL_SPACE as f64;

        ConfigMetadata {
            alphabet: self.alphabet.name().to_owned(),
            base26_identifier: self.alphabet.identifier(&selection),
            binary_array: self.alphabet.membership(&selection),
            selected_letters: selection.into_iter().collect(),
            total_syllables: self.syllables,
            total_combinations: self.combinations,
            h3_target_space: CELL_SPACE,
            coverage_ratio,
        }
    }
}

// -----------------------------------------------------------------------------

/// Persisted form of a [`Config`], with stable JSON keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Configuration name: `<alphabet>-<identifier>`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Selected consonants, sorted.
    pub consonants: Vec<char>,
    /// Selected vowels, sorted.
    pub vowels: Vec<char>,
    /// Address length, in syllables.
    pub address_length: u8,
    /// Grid resolution the configuration targets (always 15).
    pub h3_resolution: u8,
    /// Derived metadata.
    pub metadata: ConfigMetadata,
}

/// Derived metadata stored alongside a configuration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Name of the source alphabet.
    pub alphabet: String,
    /// Canonical identifier of the letter selection.
    pub base26_identifier: String,
    /// 0/1 membership vector over the alphabet, in declared order.
    pub binary_array: Vec<u8>,
    /// The selected letters, sorted.
    pub selected_letters: Vec<char>,
    /// Number of distinct syllables.
    pub total_syllables: u32,
    /// Total number of addresses.
    pub total_combinations: u64,
    /// Size of the cell space the addresses must cover.
    pub h3_target_space: u64,
    /// `total_combinations / h3_target_space`.
    pub coverage_ratio: f64,
}

// -----------------------------------------------------------------------------

/// Smallest address length whose combinations cover the cell space,
/// together with the combination count.
///
/// Returns `None` when no length up to the maximum works.
fn minimal_length(syllables: u32) -> Option<(u8, u64)> {
    let mut combinations = 1_u64;
    for length in 1..=MAX_ADDRESS_LENGTH {
        // Cannot overflow: `combinations` is below the cell space here and
        // the syllable count is bounded by the alphabet size.
        combinations *= u64::from(syllables);
        if combinations >= CELL_SPACE {
            return Some((length, combinations));
        }
    }
    None
}

fn record_error(reason: String) -> ConfigError {
    ConfigError::Record { reason }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
