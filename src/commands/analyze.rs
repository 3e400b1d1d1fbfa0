//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word as an
//! opening guess.

use crate::core::Word;
use crate::solver::Solver;
use crate::solver::entropy::{GuessMetrics, entropies, guess_metrics};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 2^entropy: the effective number of equally likely outcomes
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// 1-based position among all guesses by entropy
    pub rank: usize,
    pub total_guesses: usize,
    /// Highest-entropy openings, best first
    pub top: Vec<(Word, f64)>,
}

/// Analyze a word against the full answer vocabulary
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the guess pool.
pub fn analyze_word(solver: &Solver<'_>, word: &str, top_n: usize) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;
    let dict = solver.dictionary();
    let Some(guess) = dict.guess_index(&word) else {
        bail!("{word} is not in the guess pool");
    };

    let state = solver.new_game();
    let remaining = state.remaining();
    let metrics = guess_metrics(dict, guess, remaining, solver.weights());

    let pool: Vec<usize> = (0..dict.guesses().len()).collect();
    let mut scores = entropies(dict, &pool, remaining, solver.weights());
    // Stable sort keeps pool order among equal entropies
    scores.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));

    let rank = scores
        .iter()
        .position(|s| s.entropy <= metrics.entropy)
        .map_or(scores.len(), |i| i + 1);

    let top = scores
        .iter()
        .take(top_n)
        .map(|s| (solver.word(s.guess).clone(), s.entropy))
        .collect();

    Ok(AnalysisResult {
        word,
        expected_reduction: metrics.entropy.exp2(),
        metrics,
        total_candidates: remaining.len(),
        rank,
        total_guesses: scores.len(),
        top,
    })
}
