//! Game controller
//!
//! Owns the current session and turns input events into new snapshots.

mod engine;
mod event;

pub use engine::{Game, GameError};
pub use event::{GameEvent, Outcome, Transition};
