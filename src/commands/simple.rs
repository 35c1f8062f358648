//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::{GameState, Letter};
use crate::game::{Game, Outcome};
use crate::output::display::write_board;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R: Rng>(game: &mut Game<'_, R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the game loop on arbitrary input and output streams
///
/// Ends on `quit` or when the input is exhausted.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple_with<R: Rng, I: BufRead, O: Write>(
    game: &mut Game<'_, R>,
    input: &mut I,
    output: &mut O,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Assembly: Endgame                        ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        game.languages().len().saturating_sub(1)
    )?;
    writeln!(output, "Type a letter to guess. Commands: 'new' for a new game, 'quit' to exit.")?;

    let mut games_played = 0_usize;
    let mut games_won = 0_usize;

    loop {
        write_board(output, game.session(), game.languages())?;

        let prompt = if game.state().is_terminal() {
            "\nPlay again? (new/quit)"
        } else {
            "\nGuess a letter"
        };
        let Some(line) = read_line(input, output, prompt)? else {
            break;
        };

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("new") {
            game.new_game();
            writeln!(output, "\n🔄 New game started!")?;
            continue;
        }

        match Letter::parse(&line) {
            Ok(letter) => {
                let transition = game.guess(letter);
                match transition.outcome {
                    Outcome::Duplicate(l) => {
                        writeln!(output, "You already guessed {}.", l.as_char().to_ascii_uppercase())?;
                    }
                    Outcome::GameOver(_) => {
                        writeln!(output, "The game is over. Type 'new' to play again.")?;
                    }
                    Outcome::Accepted { .. } | Outcome::NewGame { .. } => {}
                }
                if transition.finished() {
                    games_played += 1;
                    if transition.after == GameState::Won {
                        games_won += 1;
                    }
                }
            }
            Err(e) => writeln!(output, "{}", format!("❌ {e}").red())?,
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Won {games_won} of {games_played} finished games.\n"
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn run(words: &[&str], script: &str) -> (String, Vec<char>) {
        colored::control::set_override(false);
        let source = WordSource::new(words_from_slice(words)).unwrap();
        let mut game = Game::seeded(&source, LANGUAGES, 0).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        run_simple_with(&mut game, &mut input, &mut output).unwrap();

        let guessed = game.session().guessed().iter().map(|l| l.as_char()).collect();
        (String::from_utf8(output).unwrap(), guessed)
    }

    #[test]
    fn winning_game_is_counted() {
        let (text, guessed) = run(&["go"], "g\no\nquit\n");
        assert_eq!(guessed, ['g', 'o']);
        assert!(text.contains("You win!"));
        assert!(text.contains("Won 1 of 1 finished games"));
    }

    #[test]
    fn invalid_input_reported() {
        let (text, guessed) = run(&["go"], "42\n!\nquit\n");
        assert!(guessed.is_empty());
        assert!(text.contains("got 2 characters"));
        assert!(text.contains("'!' is not a letter a-z"));
    }

    #[test]
    fn single_non_ascii_character_reported_as_one() {
        // 'İ' lowercases to two code points
        let (text, guessed) = run(&["go"], "İ\nQUIT\n");
        assert!(guessed.is_empty());
        assert!(text.contains("'İ' is not a letter a-z"));
        assert!(!text.contains("got 2 characters"));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn duplicate_guess_reported() {
        let (text, guessed) = run(&["react"], "r\nR\n");
        assert_eq!(guessed, ['r']);
        assert!(text.contains("You already guessed R."));
    }

    #[test]
    fn new_game_resets_guesses() {
        let (text, guessed) = run(&["react"], "z\nnew\n");
        assert!(guessed.is_empty());
        assert!(text.contains("New game started!"));
    }

    #[test]
    fn end_of_input_exits() {
        let (text, _) = run(&["react"], "");
        assert!(text.contains("Thanks for playing!"));
    }
}
