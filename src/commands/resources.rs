//! Loading the shared read-only resources every command needs
//!
//! Vocabulary, weights and pattern dictionary are materialized up front, before
//! any game starts.

use crate::core::{Vocabulary, Word};
use crate::dictionary::{CacheError, PatternDictionary, cache};
use crate::solver::{Solver, SolverConfig};
use crate::weights::{WeightConfig, WeightTable, build_weights};
use crate::wordlists::{load_frequencies, load_vocabulary};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

/// Where to find inputs and how to weight them
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    /// Answer vocabulary
    pub words: PathBuf,
    /// Extra guess-only words
    pub guesses: Option<PathBuf>,
    /// Frequency source; uniform weights when absent
    pub frequencies: Option<PathBuf>,
    pub cache: PathBuf,
    /// Rebuild the dictionary even if a cache exists
    pub rebuild: bool,
    pub weights: WeightConfig,
}

/// Everything a solver borrows
pub struct Resources {
    pub dictionary: PatternDictionary,
    pub weights: WeightTable,
}

/// Answer vocabulary and guess pool (answers are always guessable)
///
/// # Errors
/// Returns an error if a word list cannot be loaded.
pub fn load_vocabularies(config: &ResourceConfig) -> Result<(Vocabulary, Vocabulary)> {
    let answers = load_vocabulary(&config.words)?;
    let guesses = match &config.guesses {
        Some(path) => {
            let extra = load_vocabulary(path)?;
            Vocabulary::new(extra.words().iter().chain(answers.words()).cloned())?
        }
        None => answers.clone(),
    };
    Ok((guesses, answers))
}

/// Load every resource, building the dictionary only when allowed to
///
/// # Errors
/// Returns an error if an input file is bad, the cache is missing (without
/// `rebuild`), stale, or corrupt.
pub fn load_resources(config: &ResourceConfig) -> Result<Resources> {
    let (guesses, answers) = load_vocabularies(config)?;

    let weights = match &config.frequencies {
        Some(path) => {
            let frequencies = load_frequencies(path)?;
            build_weights(&answers, &frequencies, config.weights)?
        }
        None => WeightTable::uniform(&answers),
    };

    let dictionary = if config.rebuild {
        build_and_save(guesses, answers, config)?
    } else {
        let start = Instant::now();
        let dict = match cache::load(&config.cache) {
            Ok(dict) => dict,
            Err(err @ CacheError::NotFound { .. }) => return Err(err.into()),
            Err(err) => return Err(err).context("failed to load pattern dictionary"),
        };
        if dict.guesses() != &guesses || dict.answers() != &answers {
            bail!(
                "pattern dictionary cache {} was built from different word lists; run `generate` or pass --rebuild",
                config.cache.display()
            );
        }
        eprintln!(
            "{} pattern dictionary ({} × {}) in {:.2}s",
            "Loaded".green(),
            dict.guesses().len(),
            dict.answers().len(),
            start.elapsed().as_secs_f64()
        );
        dict
    };

    Ok(Resources {
        dictionary,
        weights,
    })
}

/// Build the dictionary with a progress bar and write it to the cache
///
/// # Errors
/// Returns an error if the cache cannot be written.
pub fn build_and_save(
    guesses: Vocabulary,
    answers: Vocabulary,
    config: &ResourceConfig,
) -> Result<PatternDictionary> {
    let dict = build_with_progress_bar(guesses, answers);
    cache::save(&dict, &config.cache)?;
    eprintln!(
        "{} pattern dictionary to {}",
        "Saved".green(),
        config.cache.display()
    );
    Ok(dict)
}

/// Build the dictionary, reporting one tick per guess row
#[must_use]
pub fn build_with_progress_bar(guesses: Vocabulary, answers: Vocabulary) -> PatternDictionary {
    let pb = ProgressBar::new(guesses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let dict = PatternDictionary::build_with_progress(guesses, answers, || pb.inc(1));
    pb.finish_and_clear();
    dict
}

/// Resolve the configured opening: a fixed word, `auto`, or none
///
/// `auto` computes the best turn-1 guess once so batch runs skip the most
/// expensive evaluation.
///
/// # Errors
/// Returns an error for an invalid word or an empty guess pool.
pub fn resolve_opening(
    opening: Option<&str>,
    resources: &Resources,
    config: &SolverConfig,
) -> Result<Option<Word>> {
    match opening {
        None => Ok(None),
        Some("auto") => {
            let solver = Solver::new(
                &resources.dictionary,
                &resources.weights,
                SolverConfig {
                    opening: None,
                    ..config.clone()
                },
            )?;
            let best = solver.best_opening()?;
            let word = solver.word(best.guess).clone();
            eprintln!(
                "{} opening guess {}{}",
                "Computed".green(),
                word.text().to_uppercase().bright_yellow(),
                best.entropy
                    .map(|h| format!(" ({h:.3} bits)"))
                    .unwrap_or_default()
            );
            Ok(Some(word))
        }
        Some(text) => Ok(Some(
            Word::new(text).with_context(|| format!("invalid opening guess {text:?}"))?,
        )),
    }
}
