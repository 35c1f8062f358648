//! Command implementations

pub mod simple;
pub mod simulate;
pub mod words;

pub use simple::{run_simple, run_simple_with};
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_one, run_simulation};
pub use words::{CatalogSummary, summarize_catalog};
