//! Letter picking strategies
//!
//! Defines the `Guesser` trait and concrete automatic players.

use crate::core::{Letter, Session};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for picking the next letter to guess
pub trait Guesser {
    /// Pick a letter that has not been guessed yet
    ///
    /// Returns `None` once every letter has been guessed.
    fn next_letter<R: Rng + ?Sized>(&self, session: &Session, rng: &mut R) -> Option<Letter>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a guesser while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesserType {
    /// English letter frequency order (default)
    Frequency(FrequencyGuesser),
    /// Uniformly random unguessed letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter<R: Rng + ?Sized>(&self, session: &Session, rng: &mut R) -> Option<Letter> {
        match self {
            Self::Frequency(g) => g.next_letter(session, rng),
            Self::Random(g) => g.next_letter(session, rng),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its name
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Guesses letters from most to least common in English text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyGuesser;

impl FrequencyGuesser {
    /// Letters ordered by frequency in English text
    pub const ORDER: &'static str = "etaoinshrdlcumwfgypbvkjxqz";
}

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, session: &Session, _rng: &mut R) -> Option<Letter> {
        Self::ORDER
            .bytes()
            .map(Letter::from_byte)
            .find(|&letter| !session.has_guessed(letter))
    }
}

/// Guesses a uniformly random letter not yet tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, session: &Session, rng: &mut R) -> Option<Letter> {
        let unguessed: Vec<Letter> = Letter::ALPHABET
            .into_iter()
            .filter(|&letter| !session.has_guessed(letter))
            .collect();

        unguessed.choose(rng).copied()
    }
}
