//! Benchmark command
//!
//! Tests solver performance across multiple target words. Games are
//! independent, so they run in parallel.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Session;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which answers to play and how
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of answers to play; all of them when `None`
    pub count: Option<usize>,
    /// Sample answers at random with this seed instead of taking the first ones
    pub seed: Option<u64>,
    /// Played on every first turn instead of the mode's opening
    pub first_word: Option<Word>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: None,
            seed: None,
            first_word: None,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets not found within the guess limit
    pub failures: Vec<Word>,
    /// Average over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the targets described by `config` from `answers`
#[must_use]
pub fn select_targets(answers: &[Word], config: &BenchmarkConfig) -> Vec<Word> {
    let count = config.count.unwrap_or(answers.len()).min(answers.len());
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            answers.choose_multiple(&mut rng, count).copied().collect()
        }
        None => answers[..count].to_vec(),
    }
}

/// Play every selected target from a fresh copy of `session`
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid, the forced first
/// word is not playable, or a game runs out of guesses to suggest.
pub fn run_benchmark(session: &Session, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let targets = select_targets(session.answers(), config);

    // Every game opens identically, so resolve the opening once
    let opening = match config.first_word {
        Some(word) => Some(word),
        None => session.suggest(),
    };

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(session.config().mode.to_string());

    log::info!(
        "benchmarking {} targets, opening {}",
        targets.len(),
        opening.map_or_else(|| "computed".to_string(), |w| w.to_string())
    );

    let start = Instant::now();
    let outcomes: Vec<(Word, Option<usize>)> = targets
        .par_iter()
        .map(|&target| -> Result<(Word, Option<usize>)> {
            let solve_config = SolveConfig {
                target,
                max_guesses: config.max_guesses,
                first_word: opening,
            };
            let result = solve_word(&solve_config, session.clone())
                .with_context(|| format!("Failed to play {target}"))?;
            pb.inc(1);
            Ok((target, result.success.then_some(result.steps.len())))
        })
        .collect::<Result<_>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    Ok(summarize(&outcomes, duration))
}

fn summarize(outcomes: &[(Word, Option<usize>)], duration: Duration) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for &(target, guesses) in outcomes {
        match guesses {
            Some(n) => *distribution.entry(n).or_insert(0) += 1,
            None => failures.push(target),
        }
    }

    let solved = outcomes.len() - failures.len();
    let total_guesses: usize = distribution.iter().map(|(n, count)| n * count).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let total_words = outcomes.len();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        average_guesses,
        min_guesses: distribution.keys().min().copied().unwrap_or(0),
        max_guesses: distribution.keys().max().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    }
}
