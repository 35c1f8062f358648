//! Derived game status
//!
//! Everything beyond the raw session (wrong guess count, win, loss) is
//! recomputed from the session on demand and never stored.

use super::{Language, Session, max_wrong_guesses};

/// Flags computed from a session and a language table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedStatus {
    pub wrong_guess_count: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub is_over: bool,
    pub is_last_guess_wrong: bool,
}

/// State machine view of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl DerivedStatus {
    /// Compute the status of a session
    ///
    /// Pure: the same session and language table always produce the same
    /// status.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{DerivedStatus, LANGUAGES, SecretWord, Session};
    ///
    /// let session = Session::new(SecretWord::new("react").unwrap());
    /// let status = DerivedStatus::derive(&session, LANGUAGES);
    /// assert_eq!(status.wrong_guess_count, 0);
    /// assert!(!status.is_over);
    /// ```
    #[must_use]
    pub fn derive(session: &Session, languages: &[Language]) -> Self {
        let secret = session.secret();

        let wrong_guess_count = session
            .guessed()
            .iter()
            .filter(|&&letter| !secret.contains(letter))
            .count();

        let is_won = secret.letters().all(|letter| session.has_guessed(letter));
        let is_lost = wrong_guess_count >= max_wrong_guesses(languages);
        let is_last_guess_wrong = session
            .last_guess()
            .is_some_and(|letter| !secret.contains(letter));

        Self {
            wrong_guess_count,
            is_won,
            is_lost,
            is_over: is_won || is_lost,
            is_last_guess_wrong,
        }
    }

    /// Collapse the flags into a state machine state
    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.is_won {
            GameState::Won
        } else if self.is_lost {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Lives still standing, counting the final one
    #[must_use]
    pub const fn lives_remaining(&self, languages: &[Language]) -> usize {
        languages.len().saturating_sub(self.wrong_guess_count)
    }
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
