//! Status narration
//!
//! Turns a derived status into the line shown above the board.

use super::{DerivedStatus, Language};
use std::fmt;

/// Farewell templates; `{}` is replaced with the language just lost
pub const FAREWELLS: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// A status line for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A language was just lost, game continues
    Farewell(String),
    Won,
    Lost,
}

impl Message {
    /// Short headline, if the message has one
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::Farewell(_) => None,
            Self::Won => Some("You win!"),
            Self::Lost => Some("Game over!"),
        }
    }

    /// Body text
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Farewell(text) => text,
            Self::Won => "Well done! 🎉",
            Self::Lost => "You lose! Better start learning Assembly 😭",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            Some(title) => write!(f, "{title} {}", self.body()),
            None => write!(f, "{}", self.body()),
        }
    }
}

/// Farewell line for the `lost_index`-th language lost (zero based)
///
/// Templates cycle when more languages are lost than there are templates.
/// Returns `None` when `lost_index` is past the end of the language table.
#[must_use]
pub fn farewell(lost_index: usize, languages: &[Language]) -> Option<String> {
    let language = languages.get(lost_index)?;
    let template = FAREWELLS[lost_index % FAREWELLS.len()];
    Some(template.replacen("{}", language.name, 1))
}

/// Describe the current status, or `None` when there is nothing to say
///
/// # Examples
/// ```
/// use assembly_endgame::core::{DerivedStatus, LANGUAGES, Message, describe_status};
///
/// let status = DerivedStatus { wrong_guess_count: 1, is_last_guess_wrong: true, ..Default::default() };
/// assert_eq!(
///     describe_status(&status, LANGUAGES),
///     Some(Message::Farewell("Farewell, HTML".to_string()))
/// );
/// ```
#[must_use]
pub fn describe_status(status: &DerivedStatus, languages: &[Language]) -> Option<Message> {
    if !status.is_over && status.is_last_guess_wrong {
        let lost_index = status.wrong_guess_count.checked_sub(1)?;
        return farewell(lost_index, languages).map(Message::Farewell);
    }

    if status.is_won {
        return Some(Message::Won);
    }

    if status.is_lost {
        return Some(Message::Lost);
    }

    None
}
