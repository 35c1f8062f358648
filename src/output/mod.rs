//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_summary, print_simulation_result, write_board};
