//! Game session snapshots
//!
//! A `Session` is an immutable value: the secret word and the ordered list of
//! distinct guessed letters. Every accepted guess produces a new snapshot, so
//! earlier snapshots stay valid for transition logs and tests.

use super::{DerivedStatus, Language, Letter, LetterError, SecretWord};

/// One game: the secret word and every letter guessed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: SecretWord,
    guessed: Vec<Letter>,
}

impl Session {
    /// Start a session for the given word with no guesses
    #[must_use]
    pub const fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: Vec::new(),
        }
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Guessed letters, oldest first
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    /// The most recent guess, if any
    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.guessed.last().copied()
    }

    /// Check if a letter has already been guessed
    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Apply a guess and return the resulting snapshot
    ///
    /// The guess is ignored (an identical snapshot is returned) when the game
    /// is already over or the letter was guessed before. Callers are expected
    /// to disable input in both cases.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{LANGUAGES, Letter, SecretWord, Session};
    ///
    /// let start = Session::new(SecretWord::new("go").unwrap());
    /// let g = Letter::new('g').unwrap();
    ///
    /// let once = start.guess(g, LANGUAGES);
    /// let twice = once.guess(g, LANGUAGES);
    /// assert_eq!(once, twice);
    /// assert!(start.guessed().is_empty());
    /// ```
    #[must_use]
    pub fn guess(&self, letter: Letter, languages: &[Language]) -> Self {
        if !self.accepts(letter, languages) {
            return self.clone();
        }

        let mut next = self.clone();
        next.guessed.push(letter);
        next
    }

    /// Validate raw input, then apply it as a guess
    ///
    /// # Errors
    /// Returns `LetterError` if `input` is not an ASCII letter. The session is
    /// never modified in that case.
    pub fn guess_char(&self, input: char, languages: &[Language]) -> Result<Self, LetterError> {
        let letter = Letter::new(input)?;
        Ok(self.guess(letter, languages))
    }

    /// Whether `guess` would append this letter
    #[must_use]
    pub fn accepts(&self, letter: Letter, languages: &[Language]) -> bool {
        !self.has_guessed(letter) && !DerivedStatus::derive(self, languages).is_over
    }
}
