//! Core domain types for the game
//!
//! This module contains the game state machine: letters, secret words, the
//! language table, session snapshots, derived status and narration. Everything
//! here is pure and deterministic; randomness lives in the word source.

pub mod board;
mod language;
mod letter;
mod narrator;
mod secret;
mod session;
mod status;

pub use board::{KEYBOARD_ROWS, KeyState, key_state, keyboard, lives, reveal};
pub use language::{LANGUAGES, Language, Rgb, max_wrong_guesses};
pub use letter::{Letter, LetterError};
pub use narrator::{FAREWELLS, Message, describe_status, farewell};
pub use secret::{SecretWord, SecretWordError};
pub use session::Session;
pub use status::{DerivedStatus, GameState};
