//! Benchmark command
//!
//! Tests solver performance across a reproducible random sample of answers.

use crate::core::Word;
use crate::solver::Solver;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct answers with a seeded generator, in vocabulary order
#[must_use]
pub fn sample_answers(answers: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = sample(&mut rng, answers.len(), count.min(answers.len())).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| answers[i].clone()).collect()
}

/// Play every target word and summarize the turn counts
///
/// Exhausted games and answers the solver does not know count as failures.
#[must_use]
pub fn run_benchmark(solver: &Solver<'_>, target_words: &[Word]) -> BenchmarkResult {
    let start = Instant::now();
    let reports = solver.play_all(target_words);
    let duration = start.elapsed();

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut failed = Vec::new();

    for (target, report) in target_words.iter().zip(reports) {
        match report.ok().and_then(|r| r.outcome.turns()) {
            Some(turns) => {
                total_guesses += turns;
                min_guesses = min_guesses.min(turns);
                max_guesses = max_guesses.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            None => failed.push(target.clone()),
        }
    }

    let total_words = target_words.len();
    let solved = total_words - failed.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
