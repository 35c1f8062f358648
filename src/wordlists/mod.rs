//! Word catalog and random word selection
//!
//! Provides the embedded catalog compiled into the binary and the `WordSource`
//! that draws a secret word for each new session.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{CatalogError, WordSource};
