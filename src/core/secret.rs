//! Secret word representation
//!
//! A `SecretWord` stores the hidden word along with its set of distinct letters
//! for constant-time membership checks.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden word of a session
///
/// Always non-empty and made only of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for SecretWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAscii => write!(f, "Secret word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Secret word contains invalid characters"),
        }
    }
}

impl std::error::Error for SecretWordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `SecretWordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::SecretWord;
    ///
    /// let word = SecretWord::new("React").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("node.js").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if !text.is_ascii() {
            return Err(SecretWordError::NonAscii);
        }

        text.make_ascii_lowercase();

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SecretWordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word (with repeats)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter.byte())
    }

    /// Iterate over the word's letters in order, with repeats
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_byte)
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn secret_word_valid() {
        let word = SecretWord::new("react").unwrap();
        assert_eq!(word.text(), "react");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn secret_word_uppercase_normalized() {
        let word = SecretWord::new("HTML").unwrap();
        assert_eq!(word.text(), "html");
    }

    #[test]
    fn secret_word_empty_rejected() {
        assert_eq!(SecretWord::new(""), Err(SecretWordError::Empty));
    }

    #[test]
    fn secret_word_non_ascii_rejected() {
        assert_eq!(SecretWord::new("café"), Err(SecretWordError::NonAscii));
    }

    #[test]
    fn non_ascii_that_lowercases_to_ascii_rejected() {
        // Kelvin sign lowercases to a plain 'k'
        assert_eq!(SecretWord::new("\u{212A}ey"), Err(SecretWordError::NonAscii));
        assert_eq!(SecretWord::new("KEY").unwrap().text(), "key");
    }

    #[test]
    fn secret_word_invalid_characters_rejected() {
        assert_eq!(
            SecretWord::new("node.js"),
            Err(SecretWordError::InvalidCharacters)
        );
        assert_eq!(
            SecretWord::new("two words"),
            Err(SecretWordError::InvalidCharacters)
        );
    }

    #[test]
    fn contains_checks_membership() {
        let word = SecretWord::new("html").unwrap();
        assert!(word.contains(letter('h')));
        assert!(word.contains(letter('l')));
        assert!(!word.contains(letter('z')));
    }

    #[test]
    fn letters_preserve_order_and_repeats() {
        let word = SecretWord::new("bell").unwrap();
        let letters: String = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "bell");
        assert_eq!(word.distinct_letters(), 3);
    }
}
