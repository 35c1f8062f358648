//! Formatting utilities for terminal output

use crate::core::{KeyState, Letter};

/// Format revealed word cells, `_` for hidden letters
#[must_use]
pub fn word_cells(cells: &[Option<Letter>]) -> String {
    cells
        .iter()
        .map(|cell| cell.map_or('_', |l| l.as_char().to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-character marker for a key state
#[must_use]
pub const fn key_marker(state: KeyState) -> char {
    match state {
        KeyState::Unused => ' ',
        KeyState::Correct => '+',
        KeyState::Wrong => 'x',
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing lives remaining out of the total
#[must_use]
pub fn lives_bar(remaining: usize, total: usize) -> String {
    create_progress_bar(remaining, total, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn word_cells_hidden_and_shown() {
        let cells = [Some(letter('r')), None, None, Some(letter('c')), None];
        assert_eq!(word_cells(&cells), "R _ _ C _");
    }

    #[test]
    fn word_cells_empty() {
        assert_eq!(word_cells(&[]), "");
    }

    #[test]
    fn key_markers() {
        assert_eq!(key_marker(KeyState::Unused), ' ');
        assert_eq!(key_marker(KeyState::Correct), '+');
        assert_eq!(key_marker(KeyState::Wrong), 'x');
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn lives_bar_one_cell_per_life() {
        assert_eq!(lives_bar(7, 9), "███████░░");
    }
}
