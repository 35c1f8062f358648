//! Automatic players
//!
//! Guessers drive a `Game` without a human, for simulations and demos.

pub mod strategy;

pub use strategy::{FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
