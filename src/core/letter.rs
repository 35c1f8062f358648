//! Single guessable letter
//!
//! A `Letter` is always one lowercase ASCII letter. Raw player input is
//! validated here before it ever reaches a session.

use std::fmt;

/// A single lowercase ASCII letter (`a`-`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for malformed guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    MultipleCharacters(usize),
    NotALetter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess must be a single letter, got nothing"),
            Self::MultipleCharacters(count) => {
                write!(f, "Guess must be a single letter, got {count} characters")
            }
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter a-z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Every letter of the alphabet, in keyboard-row independent order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self(b'a' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from a character
    ///
    /// Uppercase ASCII letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self((c as u8).to_ascii_lowercase()))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// Parse a letter from a line of input, ignoring surrounding whitespace
    ///
    /// # Errors
    /// Returns `LetterError` if the trimmed input is empty, longer than one
    /// character, or not a letter.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(LetterError::MultipleCharacters(trimmed.chars().count())),
        }
    }

    /// Create a letter from a byte already known to be lowercase ASCII
    #[inline]
    pub(crate) const fn from_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    /// Get the letter as a byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Get the letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (0 for `a`, 25 for `z`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}
