//! TUI application state and logic

use crate::core::GameState;
use crate::game::{Game, GameEvent, Outcome, Transition};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::Rng;
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App<'a, R: Rng> {
    pub game: Game<'a, R>,
    pub notice: Option<Notice>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// One-line feedback that is not part of the game status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: Game<'a, R>) -> Self {
        Self {
            game,
            notice: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Route a key press to the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.dispatch(GameEvent::RequestNewGame),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.game.state().is_terminal() => {
                self.dispatch(GameEvent::RequestNewGame);
            }
            KeyCode::Char(c) if !ctrl => self.dispatch(GameEvent::PlayerGuessed(c)),
            _ => {}
        }
    }

    /// Apply an event and update notices and statistics
    pub fn dispatch(&mut self, event: GameEvent) {
        match self.game.handle(event) {
            Ok(transition) => self.record(&transition),
            Err(e) => {
                warn!(error = %e, "Rejected key");
                self.notice = Some(Notice {
                    text: e.to_string(),
                    style: NoticeStyle::Error,
                });
            }
        }
    }

    fn record(&mut self, transition: &Transition) {
        self.notice = match transition.outcome {
            Outcome::Duplicate(letter) => Some(Notice {
                text: format!("Already guessed {}", letter.as_char().to_ascii_uppercase()),
                style: NoticeStyle::Info,
            }),
            Outcome::GameOver(_) => Some(Notice {
                text: "Game over. Press Enter for a new game".to_string(),
                style: NoticeStyle::Info,
            }),
            Outcome::NewGame { abandoned: true } => Some(Notice {
                text: "Abandoned the last word. New game started!".to_string(),
                style: NoticeStyle::Info,
            }),
            Outcome::Accepted { .. } | Outcome::NewGame { abandoned: false } => None,
        };

        if transition.finished() {
            self.stats.total_games += 1;
            if transition.after == GameState::Won {
                self.stats.games_won += 1;
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "Leaving TUI"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;

    fn press(app: &mut App<'_, rand_chacha::ChaCha8Rng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<'_, rand_chacha::ChaCha8Rng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn letters_guess_and_win_counts() {
        let source = WordSource::new(words_from_slice(&["go"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('o'));

        assert_eq!(app.game.state(), GameState::Won);
        assert_eq!(app.stats, Statistics { total_games: 1, games_won: 1 });
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn enter_starts_new_game_only_when_over() {
        let source = WordSource::new(words_from_slice(&["go"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.session().guessed().len(), 1);

        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Enter);
        assert!(app.game.session().guessed().is_empty());
        assert_eq!(app.notice, None);
    }

    #[test]
    fn ctrl_n_abandons() {
        let source = WordSource::new(words_from_slice(&["react"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());

        press(&mut app, KeyCode::Char('z'));
        ctrl(&mut app, 'n');

        assert!(app.game.session().guessed().is_empty());
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(
            app.notice.as_ref().map(|n| n.style),
            Some(NoticeStyle::Info)
        );
    }

    #[test]
    fn non_letter_sets_error_notice() {
        let source = WordSource::new(words_from_slice(&["react"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());

        press(&mut app, KeyCode::Char('7'));

        assert!(app.game.session().guessed().is_empty());
        assert_eq!(
            app.notice,
            Some(Notice {
                text: "'7' is not a letter a-z".to_string(),
                style: NoticeStyle::Error,
            })
        );
    }

    #[test]
    fn duplicate_sets_info_notice() {
        let source = WordSource::new(words_from_slice(&["react"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(
            app.notice.map(|n| n.text),
            Some("Already guessed R".to_string())
        );
    }

    #[test]
    fn quit_keys() {
        let source = WordSource::new(words_from_slice(&["react"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
        assert!(app.game.session().guessed().is_empty());
    }
}
