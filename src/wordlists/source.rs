//! Random secret word selection

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// A fixed, non-empty catalog of secret words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<SecretWord>,
}

/// Error type for unusable catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word catalog contains no valid words"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl WordSource {
    /// Create a word source from a catalog
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { words })
    }

    /// The catalog compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the build script refuses an empty catalog.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS)).expect("build script guarantees a non-empty catalog")
    }

    /// All candidate words
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty source cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a word uniformly at random using the given RNG
    ///
    /// # Panics
    /// Will not panic - the catalog is non-empty by construction.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        self.words
            .choose(rng)
            .expect("catalog is non-empty by construction")
    }

    /// Draw a word uniformly at random using the thread RNG
    #[must_use]
    pub fn pick_random_word(&self) -> &SecretWord {
        self.pick_with(&mut rand::rng())
    }
}
