//! Dictionary generation command
//!
//! Builds the full pattern dictionary from the word lists and writes it to the
//! cache, replacing any existing file.

use super::resources::{ResourceConfig, build_and_save, load_vocabularies};
use crate::dictionary::cache;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of building the dictionary
pub struct GenerateResult {
    pub guesses: usize,
    pub answers: usize,
    /// Size of the written cache file
    pub bytes: usize,
    pub duration: Duration,
    pub path: PathBuf,
}

/// Build and save the pattern dictionary
///
/// # Errors
///
/// Returns an error if a word list cannot be loaded or the cache cannot be
/// written.
pub fn run_generate(config: &ResourceConfig) -> Result<GenerateResult> {
    let (guesses, answers) = load_vocabularies(config)?;

    let start = Instant::now();
    let dict = build_and_save(guesses, answers, config)?;

    Ok(GenerateResult {
        guesses: dict.guesses().len(),
        answers: dict.answers().len(),
        bytes: cache::encoded_len(&dict),
        duration: start.elapsed(),
        path: config.cache.clone(),
    })
}
