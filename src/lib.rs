//! Assembly: Endgame
//!
//! A hangman-style word game: every wrong guess costs the player one
//! programming language, and losing all but Assembly ends the game.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{DerivedStatus, LANGUAGES, Letter, SecretWord, Session};
//!
//! let session = Session::new(SecretWord::new("react").unwrap());
//! let session = session.guess(Letter::new('r').unwrap(), LANGUAGES);
//!
//! let status = DerivedStatus::derive(&session, LANGUAGES);
//! assert_eq!(status.wrong_guess_count, 0);
//! assert!(!status.is_won);
//! ```

// Core domain types
pub mod core;

// Game controller
pub mod game;

// Automatic players
pub mod solver;

// Word catalog
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
