//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word, classify};
use crate::solver::entropy::guess_metrics;
use crate::solver::{GuessSource, Outcome, Phase, Solver, SolverError};
use anyhow::{Context, Result};

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub source: GuessSource,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word, recording what the solver saw at each turn
///
/// # Errors
///
/// Returns an error if the target is not a valid word or not in the answer
/// vocabulary.
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;
    if solver.dictionary().answer_index(&target).is_none() {
        return Err(SolverError::UnknownAnswer(target).into());
    }

    let mut state = solver.new_game();
    let mut guesses = Vec::new();

    loop {
        let candidates_before = state.remaining().len();
        let suggestion = solver.next_guess(&mut state)?;

        let expected_remaining = (candidates_before > 1).then(|| {
            guess_metrics(
                solver.dictionary(),
                suggestion.guess,
                state.remaining(),
                solver.weights(),
            )
            .expected_remaining
        });

        let word = solver.word(suggestion.guess).clone();
        let pattern = classify(&word, &target);
        let phase = solver.feedback(&mut state, pattern)?;

        guesses.push(GuessStep {
            word,
            pattern,
            source: suggestion.source,
            candidates_before,
            candidates_after: state.remaining().len(),
            entropy: suggestion.entropy,
            expected_remaining,
        });

        let outcome = match phase {
            Phase::Solved => Outcome::Solved {
                turns: guesses.len(),
            },
            Phase::Exhausted => Outcome::Exhausted,
            Phase::AwaitingGuess | Phase::AwaitingFeedback(_) => continue,
        };

        return Ok(SolveResult {
            target,
            outcome,
            guesses,
        });
    }
}
