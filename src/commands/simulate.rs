//! Batch simulation
//!
//! Plays many games with an automatic guesser and collects statistics.

use crate::core::Language;
use crate::game::{Game, GameError};
use crate::solver::Guesser;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulationConfig<G: Guesser> {
    pub games: usize,
    pub seed: u64,
    pub guesser: G,
    pub show_progress: bool,
}

impl<G: Guesser> SimulationConfig<G> {
    #[must_use]
    pub const fn new(games: usize, seed: u64, guesser: G) -> Self {
        Self {
            games,
            seed,
            guesser,
            show_progress: false,
        }
    }
}

/// Result of a single simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub wrong_guesses: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub guesser: String,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_guesses: f64,
    /// Number of games per wrong guess count
    pub wrong_distribution: BTreeMap<usize, usize>,
    /// Lost words, longest first
    pub hardest_words: Vec<String>,
    pub duration: Duration,
}

/// Play one game to completion with the given guesser
///
/// The word draw and the guesser's own randomness are both derived from
/// `seed`, so the same seed always replays the same game.
///
/// # Errors
///
/// Returns `GameError` if the language table is unusable.
pub fn play_one<G: Guesser>(
    source: &WordSource,
    languages: &[Language],
    guesser: &G,
    seed: u64,
) -> Result<GameRecord, GameError> {
    let mut game = Game::seeded(source, languages, seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed.rotate_left(32));

    while !game.state().is_terminal() {
        let Some(letter) = guesser.next_letter(game.session(), &mut rng) else {
            break;
        };
        game.guess(letter);
    }

    let status = game.status();
    Ok(GameRecord {
        word: game.session().secret().text().to_string(),
        won: status.is_won,
        guesses: game.session().guessed().len(),
        wrong_guesses: status.wrong_guess_count,
    })
}

/// Run a batch of games in parallel
///
/// Game `i` is seeded with `config.seed + i`.
///
/// # Errors
///
/// Returns `GameError` if the language table is unusable.
pub fn run_simulation<G: Guesser + Sync>(
    source: &WordSource,
    languages: &[Language],
    config: &SimulationConfig<G>,
    guesser_name: &str,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░")),
    );

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_one(
                source,
                languages,
                &config.guesser,
                config.seed.wrapping_add(i as u64),
            );
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    let result = summarize(records, guesser_name, start.elapsed());
    info!(
        games = result.total_games,
        wins = result.wins,
        guesser = guesser_name,
        "Simulation finished"
    );
    Ok(result)
}

fn summarize(records: Vec<GameRecord>, guesser_name: &str, duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();

    let mut wrong_distribution = BTreeMap::new();
    for record in &records {
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();

    let mut hardest_words: Vec<String> = records
        .into_iter()
        .filter(|r| !r.won)
        .map(|r| r.word)
        .collect();
    hardest_words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    hardest_words.dedup();
    hardest_words.truncate(10);

    let ratio = |n: usize| {
        if total_games > 0 {
            n as f64 / total_games as f64
        } else {
            0.0
        }
    };

    SimulationResult {
        guesser: guesser_name.to_string(),
        total_games,
        wins,
        losses: total_games - wins,
        win_rate: ratio(wins),
        average_guesses: ratio(total_guesses),
        wrong_distribution,
        hardest_words,
        duration,
    }
}
