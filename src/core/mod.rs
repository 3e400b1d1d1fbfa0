//! Core domain types for Wordle
//!
//! Words, feedback patterns and the indexed vocabulary every table is keyed by.
//! Nothing here depends on the solver.

mod pattern;
mod vocabulary;
mod word;

pub use pattern::{Feedback, Pattern, PatternError, classify};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{Word, WordError};

/// Number of letters in a word
pub const WORD_LEN: usize = 5;
