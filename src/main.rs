//! Assembly: Endgame - CLI
//!
//! Hangman with programming languages as lives, with TUI and line-based modes.

use anyhow::{Context, Result};
use assembly_endgame::{
    commands::{SimulationConfig, run_simple, run_simulation, summarize_catalog},
    core::LANGUAGES,
    game::Game,
    output::{print_catalog_summary, print_simulation_result},
    solver::GuesserType,
    wordlists::{WordSource, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "assembly_endgame.log";

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language but Assembly is gone",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist file, one word per line (default: embedded catalog)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for word selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many games with an automatic guesser and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,
    },

    /// Show the word catalog and the language table
    Words,
}

/// Load the word source based on the -w flag
fn load_source(wordlist: Option<&str>) -> Result<WordSource> {
    match wordlist {
        None => Ok(WordSource::embedded()),
        Some(path) => {
            let words =
                load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?;
            let source = WordSource::new(words)
                .with_context(|| format!("Wordlist {path} has no usable words"))?;
            info!(path, words = source.len(), "Loaded custom wordlist");
            Ok(source)
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it logs to a file; every other mode logs
/// warnings and above to stderr unless `RUST_LOG` says otherwise.
fn init_logging(to_file: bool) -> Result<()> {
    if to_file {
        let log_file = File::create(LOG_FILE).with_context(|| format!("Failed to create {LOG_FILE}"))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let source = load_source(cli.wordlist.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!(seed, "Using seed");

    match command {
        Commands::Play => run_play_command(&source, seed),
        Commands::Simple => run_simple_command(&source, seed),
        Commands::Simulate { count, guesser } => {
            run_simulate_command(&source, seed, count, &guesser)
        }
        Commands::Words => {
            print_catalog_summary(&summarize_catalog(&source), LANGUAGES);
            Ok(())
        }
    }
}

fn run_play_command(source: &WordSource, seed: u64) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    let game = Game::seeded(source, LANGUAGES, seed)?;
    run_tui(App::new(game))
}

fn run_simple_command(source: &WordSource, seed: u64) -> Result<()> {
    let mut game = Game::seeded(source, LANGUAGES, seed)?;
    run_simple(&mut game)?;
    Ok(())
}

fn run_simulate_command(source: &WordSource, seed: u64, count: usize, guesser: &str) -> Result<()> {
    let guesser = GuesserType::from_name(guesser);
    println!(
        "Simulating {count} games with the {} guesser (seed {seed})...",
        guesser.name()
    );

    let mut config = SimulationConfig::new(count, seed, guesser);
    config.show_progress = true;

    let result = run_simulation(source, LANGUAGES, &config, guesser.name())?;
    print_simulation_result(&result);
    Ok(())
}
