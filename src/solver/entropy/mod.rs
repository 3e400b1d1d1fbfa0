//! Entropy evaluation over the pattern dictionary
//!
//! Scores every guess in the pool against the weighted remaining candidates and
//! picks the most informative one.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, GuessScore, entropies, guess_entropy, guess_metrics, pattern_masses,
    shannon_entropy,
};
pub use selector::{TieBreak, select_best_guess};
