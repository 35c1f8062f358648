//! Display functions for the line-based front-end and command results

use super::formatters::{key_marker, lives_bar, word_cells};
use crate::commands::{CatalogSummary, SimulationResult};
use crate::core::{
    DerivedStatus, KEYBOARD_ROWS, KeyState, Language, Letter, Message, Session, board,
    describe_status, max_wrong_guesses,
};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn chip(language: &Language, lost: bool) -> ColoredString {
    let label = format!(" {} ", language.name);
    if lost {
        label.bright_black().strikethrough()
    } else {
        let (bg, fg) = (language.background, language.text);
        label.on_truecolor(bg.0, bg.1, bg.2).truecolor(fg.0, fg.1, fg.2)
    }
}

fn key(letter: Letter, state: KeyState) -> ColoredString {
    let label = letter.as_char().to_ascii_uppercase().to_string();
    match state {
        KeyState::Unused => label.bright_white(),
        KeyState::Correct => label.black().on_green(),
        KeyState::Wrong => label.white().on_red(),
    }
}

/// Render the status message, if any
fn write_message<W: Write>(out: &mut W, message: Option<&Message>) -> io::Result<()> {
    match message {
        Some(Message::Farewell(text)) => writeln!(out, "  {}", text.italic().magenta()),
        Some(message @ Message::Won) => writeln!(
            out,
            "  {} {}",
            message.title().unwrap_or_default().bright_green().bold(),
            message.body().green()
        ),
        Some(message @ Message::Lost) => writeln!(
            out,
            "  {} {}",
            message.title().unwrap_or_default().bright_red().bold(),
            message.body().red()
        ),
        None => writeln!(out),
    }
}

/// Write the full board for a session
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_board<W: Write>(
    out: &mut W,
    session: &Session,
    languages: &[Language],
) -> io::Result<()> {
    let status = DerivedStatus::derive(session, languages);
    let message = describe_status(&status, languages);

    writeln!(out)?;
    write_message(out, message.as_ref())?;
    writeln!(out)?;

    let chips: Vec<String> = board::lives(languages, &status)
        .into_iter()
        .map(|(language, lost)| chip(language, lost).to_string())
        .collect();
    writeln!(out, "  {}", chips.join(" "))?;
    let standing = status.lives_remaining(languages);
    writeln!(
        out,
        "  Languages left: {} {standing}/{} | Attempts left: {}",
        lives_bar(standing, languages.len()).cyan(),
        languages.len(),
        max_wrong_guesses(languages).saturating_sub(status.wrong_guess_count)
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        word_cells(&board::reveal(session, &status)).bright_yellow().bold()
    )?;
    writeln!(out)?;

    let keys = board::keyboard(session);
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let rendered: Vec<String> = row
            .bytes()
            .filter_map(|b| Letter::new(char::from(b)).ok())
            .map(|letter| key(letter, keys[letter.index()]).to_string())
            .collect();
        writeln!(out, "  {}{}", " ".repeat(indent), rendered.join(" "))?;
    }

    // + in the word, x not in it
    if !session.guessed().is_empty() {
        let history: Vec<String> = session
            .guessed()
            .iter()
            .map(|&letter| {
                format!(
                    "{}{}",
                    letter.as_char().to_ascii_uppercase(),
                    key_marker(keys[letter.index()])
                )
            })
            .collect();
        writeln!(out, "\n  Guessed: {}", history.join(" "))?;
    }

    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong guesses per game:".bright_cyan().bold());
    for (&wrong, &count) in &result.wrong_distribution {
        let pct = if result.total_games > 0 {
            (count as f64 / result.total_games as f64) * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Words that beat the guesser:".bright_cyan().bold());
        println!("   {}", result.hardest_words.join(", "));
    }
}

/// Print a catalog summary and the language table
pub fn print_catalog_summary(summary: &CatalogSummary, languages: &[Language]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:            {}", summary.total_words);
    println!("   Shortest:         {}", summary.shortest.to_uppercase());
    println!("   Longest:          {}", summary.longest.to_uppercase());
    println!("   Average length:   {:.1}", summary.average_length);
    println!("   Distinct letters: {:.1}", summary.average_distinct_letters);

    println!("\n📏 {}", "Words per length:".bright_cyan().bold());
    for (&length, &count) in &summary.by_length {
        println!("   {length:2}: {count}");
    }

    println!("\n🧑‍💻 {}", "Languages (lost front to back):".bright_cyan().bold());
    for (index, language) in languages.iter().enumerate() {
        println!(
            "   {}. {} {} on {}",
            index + 1,
            chip(language, false),
            language.text,
            language.background
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, SecretWord};

    fn render(word: &str, guesses: &str, languages: &[Language]) -> String {
        colored::control::set_override(false);
        let session = guesses
            .chars()
            .fold(Session::new(SecretWord::new(word).unwrap()), |s, c| {
                s.guess(Letter::new(c).unwrap(), languages)
            });
        let mut out = Vec::new();
        write_board(&mut out, &session, languages).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_word_and_lives() {
        let text = render("react", "rz", LANGUAGES);
        assert!(text.contains("R _ _ _ _"));
        assert!(text.contains("Languages left: ████████░ 8/9 | Attempts left: 7"));
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("Guessed: R+ Zx"));
        assert!(text.contains("Q W E R T Y U I O P"));
    }

    #[test]
    fn board_shows_win() {
        let text = render("go", "go", LANGUAGES);
        assert!(text.contains("You win! Well done!"));
        assert!(text.contains("G O"));
    }

    #[test]
    fn board_reveals_word_on_loss() {
        let text = render("html", "zx", &LANGUAGES[..3]);
        assert!(text.contains("Game over!"));
        assert!(text.contains("H T M L"));
        assert!(text.contains("Languages left: █░░ 1/3 | Attempts left: 0"));
        assert!(text.contains("Guessed: Zx Xx"));
    }
}
