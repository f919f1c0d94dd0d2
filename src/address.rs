//! The syllable codec.
//!
//! A cell number is written in base A (the syllable count) with exactly L
//! digits, most significant first. Each digit splits into a consonant index
//! and a vowel index; the address is the concatenation of the L
//! consonant-vowel pairs, without separators.

use crate::{config::Config, error::AddressError, number::CellNumber, CELL_SPACE};
use std::fmt;

/// A consonant-vowel pair from a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Syllable {
    /// The leading consonant.
    consonant: char,
    /// The trailing vowel.
    vowel: char,
}

impl Syllable {
    pub(crate) const fn new(consonant: char, vowel: char) -> Self {
        Self { consonant, vowel }
    }

    /// The syllable at an index of the configuration's syllable table.
    ///
    /// Syllables are indexed in lexicographic order: index `s` maps to the
    /// consonant `s / V` and the vowel `s % V`.
    #[must_use]
    pub fn from_index(index: u32, config: &Config) -> Self {
        debug_assert!(index < config.syllable_count(), "syllable index");
        let vowels = u32::try_from(config.vowels().len()).expect("vowel count");

        Self {
            consonant: config.consonant_at(index / vowels),
            vowel: config.vowel_at(index % vowels),
        }
    }

    /// Index of the syllable in the configuration's syllable table, if both
    /// characters belong to the configuration.
    #[must_use]
    pub fn index(self, config: &Config) -> Option<u32> {
        let vowels = u32::try_from(config.vowels().len()).expect("vowel count");
        let consonant = config.consonant_index(self.consonant)?;
        let vowel = config.vowel_index(self.vowel)?;

        Some(consonant * vowels + vowel)
    }

    /// The leading consonant.
    #[must_use]
    pub const fn consonant(self) -> char {
        self.consonant
    }

    /// The trailing vowel.
    #[must_use]
    pub const fn vowel(self) -> char {
        self.vowel
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.consonant, self.vowel)
    }
}

// -----------------------------------------------------------------------------

/// Writes a cell number as a syllable address.
///
/// The output always has exactly `2L` lowercase characters, leading
/// zero-syllables included.
///
/// # Example
///
/// ```
/// use h3syl::{encode, CellNumber, Config};
///
/// let config = Config::bundled("ascii-dnqqwn")?;
/// let number = CellNumber::try_from(0)?;
///
/// assert_eq!(encode(number, &config), "dadadadadadadada");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn encode(number: CellNumber, config: &Config) -> String {
    let base = u64::from(config.syllable_count());
    let length = usize::from(config.address_length());

    let mut digits = vec![0_u32; length];
    let mut value = u64::from(number);
    for digit in digits.iter_mut().rev() {
        *digit = u32::try_from(value % base).expect("syllable digit");
        value /= base;
    }
    debug_assert_eq!(value, 0, "cell numbers fit in the address space");

    let mut address = String::with_capacity(2 * length);
    for digit in digits {
        let syllable = Syllable::from_index(digit, config);
        address.push(syllable.consonant());
        address.push(syllable.vowel());
    }
    address
}

/// Parses a syllable address back into its cell number.
///
/// # Errors
///
/// [`AddressError`] when the address is empty, has the wrong length,
/// contains an unknown consonant or vowel, or decodes to an integer
/// outside the cell space.
pub fn decode(address: &str, config: &Config) -> Result<CellNumber, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    let length = address.chars().count();
    if length != config.address_chars() {
        if length % 2 != 0 {
            return Err(AddressError::OddLength { length });
        }
        return Err(AddressError::Length {
            length,
            expected: config.address_chars(),
        });
    }

    let base = u64::from(config.syllable_count());
    let value = parse_digits(address, config)?
        .into_iter()
        .fold(0_u64, |acc, digit| acc * base + u64::from(digit));
    if value >= CELL_SPACE {
        return Err(AddressError::OutOfRange { value });
    }
    Ok(CellNumber::new_unchecked(value))
}

/// Parses a string of whole syllables into their table indices.
///
/// Only the syllable structure is checked here: the caller is responsible
/// for length and range constraints.
pub(crate) fn parse_digits(
    address: &str,
    config: &Config,
) -> Result<Vec<u32>, AddressError> {
    let characters = address.char_indices().collect::<Vec<_>>();
    if characters.len() % 2 != 0 {
        return Err(AddressError::OddLength {
            length: characters.len(),
        });
    }

    let vowels = u32::try_from(config.vowels().len()).expect("vowel count");
    characters
        .chunks_exact(2)
        .map(|pair| {
            let (offset, consonant) = pair[0];
            let consonant = config.consonant_index(consonant).ok_or(
                AddressError::UnknownConsonant {
                    offset,
                    found: consonant,
                },
            )?;
            let (offset, vowel) = pair[1];
            let vowel = config.vowel_index(vowel).ok_or(
                AddressError::UnknownVowel {
                    offset,
                    found: vowel,
                },
            )?;
            Ok(consonant * vowels + vowel)
        })
        .collect()
}

#[cfg(test)]
#[path = "./address_tests.rs"]
mod tests;
