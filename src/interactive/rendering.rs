//! TUI rendering with ratatui
//!
//! Board, language chips and keyboard for the game.

use super::app::{App, NoticeStyle};
use crate::core::{KEYBOARD_ROWS, KeyState, Language, Letter, Message, Rgb, board};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Status
            Constraint::Length(4), // Language chips
            Constraint::Length(5), // Word
            Constraint::Min(7),    // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status(f, app, chunks[1]);
    render_languages(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_footer(f, app, chunks[5]);
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_header<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let attempts = app.game.languages().len().saturating_sub(1);
    let content = vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guess the word within {attempts} attempts to keep the programming world safe from Assembly!"
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (content, color) = match app.game.message() {
        Some(Message::Farewell(text)) => (
            vec![Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::ITALIC),
            ))],
            Color::Magenta,
        ),
        Some(message) => {
            let color = if message == Message::Won {
                Color::Green
            } else {
                Color::Red
            };
            (
                vec![
                    Line::from(Span::styled(
                        message.title().unwrap_or_default(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(message.body().to_string()),
                ],
                color,
            )
        }
        None => (vec![Line::from("")], Color::DarkGray),
    };

    let status = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(status, area);
}

fn chip(language: &Language, lost: bool) -> Span<'static> {
    let label = format!(" {} ", language.name);
    if lost {
        Span::styled(
            format!(" 💀{}", label.trim_start()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
        )
    } else {
        Span::styled(
            label,
            Style::default()
                .bg(color(language.background))
                .fg(color(language.text)),
        )
    }
}

fn render_languages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let status = app.game.status();
    let mut spans = Vec::new();
    for (language, lost) in board::lives(app.game.languages(), &status) {
        spans.push(chip(language, lost));
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(
                    " Languages: {} of {} left ",
                    status.lives_remaining(app.game.languages()),
                    app.game.languages().len()
                ))
                .borders(Borders::ALL),
        );
    f.render_widget(chips, area);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let session = app.game.session();
    let status = app.game.status();

    let cells: Vec<Span> = board::reveal(session, &status)
        .into_iter()
        .flat_map(|cell| {
            let (text, style) = match cell {
                Some(letter) if session.has_guessed(letter) => (
                    letter.as_char().to_ascii_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                // Revealed only because the game was lost
                Some(letter) => (
                    letter.as_char().to_ascii_uppercase(),
                    Style::default().fg(Color::Red),
                ),
                None => ('_', Style::default().fg(Color::DarkGray)),
            };
            [
                Span::styled(format!(" {text} "), style.bg(Color::Rgb(0x32, 0x32, 0x32))),
                Span::raw(" "),
            ]
        })
        .collect();

    let word = Paragraph::new(vec![Line::from(""), Line::from(cells)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn key_style(state: KeyState, disabled: bool) -> Style {
    let style = match state {
        KeyState::Unused => Style::default().fg(Color::Black).bg(Color::Rgb(0xFC, 0xBA, 0x29)),
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Rgb(0x10, 0xA9, 0x5B)),
        KeyState::Wrong => Style::default().fg(Color::White).bg(Color::Rgb(0xEC, 0x5D, 0x49)),
    };
    if disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let keys = board::keyboard(app.game.session());
    let disabled = app.game.state().is_terminal();

    let mut lines = vec![Line::from("")];
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .bytes()
            .filter_map(|b| Letter::new(char::from(b)).ok())
            .flat_map(|letter| {
                [
                    Span::styled(
                        format!(" {} ", letter.as_char().to_ascii_uppercase()),
                        key_style(keys[letter.index()], disabled),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_footer<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let notice = match &app.notice {
        Some(notice) => {
            let color = match notice.style {
                NoticeStyle::Info => Color::White,
                NoticeStyle::Error => Color::Red,
            };
            Paragraph::new(notice.text.clone()).style(Style::default().fg(color))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(notice.alignment(Alignment::Center), chunks[1]);

    let help_text = if app.game.state().is_terminal() {
        "Enter: New Game | Esc: Quit"
    } else {
        "a-z: Guess | Ctrl+N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::game::Game;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(guesses: &str) -> String {
        let source = WordSource::new(words_from_slice(&["react"])).unwrap();
        let mut app = App::new(Game::seeded(&source, LANGUAGES, 0).unwrap());
        for c in guesses.chars() {
            app.game.guess(Letter::new(c).unwrap());
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_title_and_keyboard() {
        let text = screen("");
        assert!(text.contains("Assembly: Endgame"));
        assert!(text.contains(" Q "));
        assert!(text.contains("Languages: 9 of 9 left"));
    }

    #[test]
    fn renders_farewell_and_revealed_letters() {
        let text = screen("rz");
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains(" R "));
        assert!(text.contains("Languages: 8 of 9 left"));
    }

    #[test]
    fn renders_win() {
        let text = screen("react");
        assert!(text.contains("You win!"));
        assert!(text.contains("Enter: New Game"));
    }
}
