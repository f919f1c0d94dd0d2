//! Character universes for syllable configurations.
//!
//! An alphabet declares an ordered set of characters and which of them are
//! vowels. A configuration selects a subset of those characters; the
//! selection's membership bitmask, rendered in base 26, names the
//! configuration (e.g. `ascii-dnqqwn`).

use crate::error::ConfigError;
use std::collections::BTreeSet;

/// The Basic Latin alphabet, a–z with the five standard vowels.
pub const ASCII: Alphabet = Alphabet {
    name: "ascii",
    description: "Basic Latin alphabet",
    characters: &[
        'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
        'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ],
    vowels: &['a', 'e', 'i', 'o', 'u'],
};

// -----------------------------------------------------------------------------

/// An ordered character universe with a predeclared vowel subset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Alphabet {
    /// Registry name, used as the first half of configuration names.
    name: &'static str,
    /// Human-readable description.
    description: &'static str,
    /// Every character of the alphabet, in declared order.
    characters: &'static [char],
    /// The vowels among `characters`.
    vowels: &'static [char],
}

impl Alphabet {
    /// Looks up a registered alphabet by name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownAlphabet`] when no alphabet is registered
    /// under that name.
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::Alphabet;
    ///
    /// let alphabet = Alphabet::get("ascii")?;
    /// assert_eq!(alphabet.len(), 26);
    /// # Ok::<(), h3syl::error::ConfigError>(())
    /// ```
    pub fn get(name: &str) -> Result<&'static Self, ConfigError> {
        if name == ASCII.name {
            return Ok(&ASCII);
        }
        Err(ConfigError::UnknownAlphabet {
            name: name.to_owned(),
        })
    }

    /// Registry name of the alphabet.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description of the alphabet.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Characters of the alphabet, in declared order.
    #[must_use]
    pub const fn characters(&self) -> &'static [char] {
        self.characters
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns true if the alphabet has no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Returns true if the character belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.characters.contains(&character)
    }

    /// Returns true if the character is one of the alphabet's vowels.
    #[must_use]
    pub fn is_vowel(&self, character: char) -> bool {
        self.vowels.contains(&character)
    }

    /// The 0/1 membership vector of a selection, in declared order.
    pub(crate) fn membership(&self, letters: &BTreeSet<char>) -> Vec<u8> {
        self.characters
            .iter()
            .map(|character| u8::from(letters.contains(character)))
            .collect()
    }

    /// Canonical identifier of a letter selection.
    ///
    /// The membership vector, read as a little-endian binary integer, is
    /// rendered in base 26 with lowercase letters (most significant digit
    /// first). Identical selections always yield identical identifiers.
    #[must_use]
    pub fn identifier(&self, letters: &BTreeSet<char>) -> String {
        debug_assert!(
            self.characters.len() <= 128,
            "membership bitmask is limited to 128 characters"
        );
        let mut value = self
            .membership(letters)
            .into_iter()
            .enumerate()
            .fold(0_u128, |acc, (i, bit)| acc | (u128::from(bit) << i));

        if value == 0 {
            return "a".to_owned();
        }
        let mut identifier = Vec::new();
        while value > 0 {
            let digit = u8::try_from(value % 26).expect("base-26 digit");
            identifier.push(char::from(b'a' + digit));
            value /= 26;
        }
        identifier.iter().rev().collect()
    }

    /// Checks that every letter of a selection belongs to the alphabet.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownLetter`] for the first foreign letter found.
    pub(crate) fn check_letters(
        &self,
        letters: &BTreeSet<char>,
    ) -> Result<(), ConfigError> {
        for &letter in letters {
            if !self.contains(letter) {
                return Err(ConfigError::UnknownLetter {
                    letter,
                    alphabet: self.name,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "./alphabet_tests.rs"]
mod tests;
