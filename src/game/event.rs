//! Input events and the transitions they produce

use crate::core::{GameState, Letter};

/// Everything a front-end can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player pressed a letter key
    PlayerGuessed(char),
    /// Start over with a fresh word
    RequestNewGame,
}

/// What happened to a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Letter appended to the session
    Accepted { letter: Letter, correct: bool },
    /// Letter was already guessed; nothing changed
    Duplicate(Letter),
    /// Game is over; nothing changed
    GameOver(Letter),
    /// A new session replaced the old one
    NewGame { abandoned: bool },
}

/// Before/after view of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub before: GameState,
    pub after: GameState,
    pub outcome: Outcome,
}

impl Transition {
    /// Whether the event changed the session
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Accepted { .. } | Outcome::NewGame { .. }
        )
    }

    /// Whether this event ended the game
    #[must_use]
    pub const fn finished(&self) -> bool {
        !self.before.is_terminal() && self.after.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_only_for_mutating_outcomes() {
        let letter = Letter::new('a').unwrap();
        let transition = |outcome| Transition {
            before: GameState::InProgress,
            after: GameState::InProgress,
            outcome,
        };

        assert!(transition(Outcome::Accepted { letter, correct: true }).changed());
        assert!(transition(Outcome::NewGame { abandoned: false }).changed());
        assert!(!transition(Outcome::Duplicate(letter)).changed());
        assert!(!transition(Outcome::GameOver(letter)).changed());
    }

    #[test]
    fn finished_on_entering_terminal_state() {
        let letter = Letter::new('a').unwrap();
        let won = Transition {
            before: GameState::InProgress,
            after: GameState::Won,
            outcome: Outcome::Accepted { letter, correct: true },
        };
        let reset = Transition {
            before: GameState::Lost,
            after: GameState::InProgress,
            outcome: Outcome::NewGame { abandoned: false },
        };

        assert!(won.finished());
        assert!(!reset.finished());
    }
}
