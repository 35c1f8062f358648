//! Word catalog loading utilities
//!
//! Provides functions to load a catalog from a file or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load secret words from a file
///
/// One word per line. Blank lines, `#` comments and invalid entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use assembly_endgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse catalog text, one word per line
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to secret words
///
/// # Examples
/// ```
/// use assembly_endgame::wordlists::loader::words_from_slice;
/// use assembly_endgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}
