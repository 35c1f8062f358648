//! Game controller: the single owner of the current session

use super::event::{GameEvent, Outcome, Transition};
use crate::core::{
    DerivedStatus, GameState, Language, Letter, LetterError, Message, Session, describe_status,
};
use crate::wordlists::WordSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info, instrument};

/// Error type for unusable game configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    TooFewLanguages(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLanguages(count) => {
                write!(f, "Need at least 2 languages to play, got {count}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A running game
///
/// Holds the word source, the language table and the current session.
/// Events are applied one at a time; every accepted event replaces the
/// session with a new snapshot.
pub struct Game<'a, R: Rng = ChaCha8Rng> {
    source: &'a WordSource,
    languages: &'a [Language],
    rng: R,
    session: Session,
}

impl<'a> Game<'a, ChaCha8Rng> {
    /// Create a game whose word draws are reproducible from `seed`
    ///
    /// # Errors
    /// Returns `GameError::TooFewLanguages` if fewer than two languages are given.
    pub fn seeded(
        source: &'a WordSource,
        languages: &'a [Language],
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(source, languages, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Game<'a, R> {
    /// Create a game and start its first session
    ///
    /// # Errors
    /// Returns `GameError::TooFewLanguages` if fewer than two languages are
    /// given; a single language would lose before the first guess.
    pub fn new(
        source: &'a WordSource,
        languages: &'a [Language],
        mut rng: R,
    ) -> Result<Self, GameError> {
        if languages.len() < 2 {
            return Err(GameError::TooFewLanguages(languages.len()));
        }

        let session = Session::new(source.pick_with(&mut rng).clone());
        debug!(word_len = session.secret().len(), "Started first session");

        Ok(Self {
            source,
            languages,
            rng,
            session,
        })
    }

    /// The current session snapshot
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The language table lives are drawn from
    #[must_use]
    pub const fn languages(&self) -> &'a [Language] {
        self.languages
    }

    /// The word source new sessions draw from
    #[must_use]
    pub const fn source(&self) -> &'a WordSource {
        self.source
    }

    /// Derived status of the current session
    #[must_use]
    pub fn status(&self) -> DerivedStatus {
        DerivedStatus::derive(&self.session, self.languages)
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.status().state()
    }

    /// Status line for the current session
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        describe_status(&self.status(), self.languages)
    }

    /// Apply an input event
    ///
    /// # Errors
    /// Returns `LetterError` if a guessed character is not a letter. The
    /// session is left untouched.
    pub fn handle(&mut self, event: GameEvent) -> Result<Transition, LetterError> {
        match event {
            GameEvent::PlayerGuessed(c) => Ok(self.guess(Letter::new(c)?)),
            GameEvent::RequestNewGame => Ok(self.new_game()),
        }
    }

    /// Guess a letter
    ///
    /// Duplicate guesses and guesses after the game is over are ignored and
    /// reported as such in the returned transition.
    #[instrument(skip(self, letter), fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> Transition {
        let before = self.state();

        let outcome = if before.is_terminal() {
            debug!("Ignored guess after game over");
            Outcome::GameOver(letter)
        } else if self.session.has_guessed(letter) {
            debug!("Ignored duplicate guess");
            Outcome::Duplicate(letter)
        } else {
            self.session = self.session.guess(letter, self.languages);
            let correct = self.session.secret().contains(letter);
            debug!(correct, "Accepted guess");
            Outcome::Accepted { letter, correct }
        };

        let after = self.state();
        if before != after {
            let status = self.status();
            info!(
                state = ?after,
                guesses = self.session.guessed().len(),
                wrong = status.wrong_guess_count,
                "Game finished"
            );
        }

        Transition {
            before,
            after,
            outcome,
        }
    }

    /// Replace the session with a fresh one
    ///
    /// Allowed at any time; an unfinished session is abandoned.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Transition {
        let before = self.state();
        let abandoned = !before.is_terminal();

        if abandoned {
            info!(word = %self.session.secret(), "Abandoned unfinished session");
        }
        self.session = Session::new(self.source.pick_with(&mut self.rng).clone());
        debug!(word_len = self.session.secret().len(), "Started new session");

        Transition {
            before,
            after: self.state(),
            outcome: Outcome::NewGame { abandoned },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::wordlists::loader::words_from_slice;

    fn source(words: &[&str]) -> WordSource {
        WordSource::new(words_from_slice(words)).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn too_few_languages_rejected() {
        let source = source(&["react"]);
        assert_eq!(
            Game::seeded(&source, &LANGUAGES[..1], 0).err(),
            Some(GameError::TooFewLanguages(1))
        );
        assert_eq!(
            GameError::TooFewLanguages(0).to_string(),
            "Need at least 2 languages to play, got 0"
        );
    }

    #[test]
    fn new_game_starts_idle() {
        let source = source(&["react"]);
        let game = Game::seeded(&source, LANGUAGES, 0).unwrap();

        assert_eq!(game.session().secret().text(), "react");
        assert_eq!(game.status(), DerivedStatus::default());
        assert_eq!(game.message(), None);
    }

    #[test]
    fn guessing_the_whole_word_wins() {
        let source = source(&["react"]);
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();

        let transitions: Vec<Transition> = "react".chars().map(|c| game.guess(letter(c))).collect();

        assert!(transitions[..4].iter().all(|t| t.after == GameState::InProgress));
        assert!(transitions[4].finished());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.status().wrong_guess_count, 0);
        assert_eq!(game.message(), Some(Message::Won));
    }

    #[test]
    fn losing_then_guessing_is_ignored() {
        let source = source(&["html"]);
        let mut game = Game::seeded(&source, &LANGUAGES[..3], 0).unwrap();

        let first = game.guess(letter('z'));
        assert_eq!(first.outcome, Outcome::Accepted { letter: letter('z'), correct: false });
        assert_eq!(game.message(), Some(Message::Farewell("Farewell, HTML".to_string())));

        let second = game.guess(letter('x'));
        assert!(second.finished());
        assert_eq!(game.state(), GameState::Lost);

        let snapshot = game.session().clone();
        let third = game.guess(letter('q'));
        assert_eq!(third.outcome, Outcome::GameOver(letter('q')));
        assert!(!third.changed());
        assert_eq!(game.session(), &snapshot);
    }

    #[test]
    fn duplicate_guess_reported() {
        let source = source(&["go"]);
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();

        game.guess(letter('g'));
        let repeat = game.guess(letter('g'));
        game.guess(letter('o'));

        assert_eq!(repeat.outcome, Outcome::Duplicate(letter('g')));
        assert_eq!(game.session().guessed(), &[letter('g'), letter('o')]);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn handle_rejects_non_letters_without_change() {
        let source = source(&["react"]);
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();

        assert_eq!(
            game.handle(GameEvent::PlayerGuessed('?')),
            Err(LetterError::NotALetter('?'))
        );
        assert!(game.session().guessed().is_empty());

        let transition = game.handle(GameEvent::PlayerGuessed('R')).unwrap();
        assert!(transition.changed());
        assert_eq!(game.session().guessed(), &[letter('r')]);
    }

    #[test]
    fn request_new_game_replaces_session() {
        let source = source(&["go"]);
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();
        game.guess(letter('g'));
        game.guess(letter('o'));
        assert_eq!(game.state(), GameState::Won);

        let transition = game.handle(GameEvent::RequestNewGame).unwrap();
        assert_eq!(transition.outcome, Outcome::NewGame { abandoned: false });
        assert_eq!(transition.before, GameState::Won);
        assert_eq!(transition.after, GameState::InProgress);
        assert!(game.session().guessed().is_empty());
    }

    #[test]
    fn new_game_mid_session_is_abandon() {
        let source = source(&["react"]);
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();
        game.guess(letter('z'));

        let transition = game.new_game();
        assert_eq!(transition.outcome, Outcome::NewGame { abandoned: true });
        assert_eq!(game.status(), DerivedStatus::default());
    }

    #[test]
    fn same_seed_same_words() {
        let source = WordSource::embedded();
        let mut a = Game::seeded(&source, LANGUAGES, 99).unwrap();
        let mut b = Game::seeded(&source, LANGUAGES, 99).unwrap();

        for _ in 0..5 {
            assert_eq!(a.session().secret(), b.session().secret());
            a.new_game();
            b.new_game();
        }
    }
}
