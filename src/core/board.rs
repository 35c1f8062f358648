//! Display-ready views of a session
//!
//! Front-ends render these directly; none of them carry game rules of their
//! own beyond what the derived status already decided.

use super::{DerivedStatus, Language, Letter, Session};

/// Feedback for one keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// Keyboard layout rows, QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Letters of the secret word, hidden unless guessed or the game is lost
#[must_use]
pub fn reveal(session: &Session, status: &DerivedStatus) -> Vec<Option<Letter>> {
    session
        .secret()
        .letters()
        .map(|letter| (status.is_lost || session.has_guessed(letter)).then_some(letter))
        .collect()
}

/// Pair each language with whether it has been lost
#[must_use]
pub fn lives<'a>(languages: &'a [Language], status: &DerivedStatus) -> Vec<(&'a Language, bool)> {
    languages
        .iter()
        .enumerate()
        .map(|(index, language)| (language, index < status.wrong_guess_count))
        .collect()
}

/// Feedback for a single key
#[must_use]
pub fn key_state(session: &Session, letter: Letter) -> KeyState {
    if !session.has_guessed(letter) {
        KeyState::Unused
    } else if session.secret().contains(letter) {
        KeyState::Correct
    } else {
        KeyState::Wrong
    }
}

/// Feedback for every letter, indexed by `Letter::index`
#[must_use]
pub fn keyboard(session: &Session) -> [KeyState; 26] {
    Letter::ALPHABET.map(|letter| key_state(session, letter))
}
