//! Catalog summary command
//!
//! Describes the word catalog a game would draw from.

use crate::wordlists::WordSource;
use std::collections::BTreeMap;

/// Summary of a word catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total_words: usize,
    pub shortest: String,
    pub longest: String,
    pub average_length: f64,
    /// Mean number of distinct letters, the guesses a perfect player needs
    pub average_distinct_letters: f64,
    /// Number of words per word length
    pub by_length: BTreeMap<usize, usize>,
}

/// Summarize the words in a source
#[must_use]
pub fn summarize_catalog(source: &WordSource) -> CatalogSummary {
    let words = source.words();

    let mut by_length = BTreeMap::new();
    for word in words {
        *by_length.entry(word.len()).or_insert(0) += 1;
    }

    let shortest = words
        .iter()
        .min_by_key(|w| w.len())
        .map(|w| w.text().to_string())
        .unwrap_or_default();
    let longest = words
        .iter()
        .max_by_key(|w| w.len())
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    let total_letters: usize = words.iter().map(|w| w.len()).sum();
    let total_distinct: usize = words.iter().map(|w| w.distinct_letters()).sum();

    CatalogSummary {
        total_words: words.len(),
        shortest,
        longest,
        average_length: total_letters as f64 / words.len() as f64,
        average_distinct_letters: total_distinct as f64 / words.len() as f64,
        by_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn summary_of_small_catalog() {
        let source = WordSource::new(words_from_slice(&["go", "react", "html"])).unwrap();
        let summary = summarize_catalog(&source);

        assert_eq!(summary.total_words, 3);
        assert_eq!(summary.shortest, "go");
        assert_eq!(summary.longest, "react");
        assert!((summary.average_length - 11.0 / 3.0).abs() < 1e-9);
        // go: 2, react: 5, html: 4
        assert!((summary.average_distinct_letters - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.by_length.get(&4), Some(&1));
        assert_eq!(summary.by_length.values().sum::<usize>(), 3);
    }

    #[test]
    fn repeated_letters_count_once() {
        let source = WordSource::new(words_from_slice(&["bell", "noon"])).unwrap();
        let summary = summarize_catalog(&source);

        assert!((summary.average_length - 4.0).abs() < 1e-9);
        assert!((summary.average_distinct_letters - 2.5).abs() < 1e-9);
    }

    #[test]
    fn summary_of_embedded_catalog() {
        let source = WordSource::embedded();
        let summary = summarize_catalog(&source);

        assert_eq!(summary.total_words, source.len());
        assert!(summary.shortest.len() <= summary.longest.len());
        assert!(summary.average_distinct_letters <= summary.average_length);
    }
}
