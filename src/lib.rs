//! Wordle Max-Entropy Solver
//!
//! Solves Wordle by always playing the guess whose feedback is expected to carry
//! the most information about the hidden answer, weighting answers by how common
//! they are.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_maxent::core::{Vocabulary, Word};
//! use wordle_maxent::dictionary::PatternDictionary;
//! use wordle_maxent::solver::{Solver, SolverConfig};
//! use wordle_maxent::weights::WeightTable;
//!
//! let words = Vocabulary::from_strs(&["crane", "slate", "irate", "toast"]).unwrap();
//! let dict = PatternDictionary::build(&words);
//! let weights = WeightTable::uniform(&words);
//!
//! let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
//! let report = solver.play(&Word::new("toast").unwrap()).unwrap();
//! assert!(report.outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Precomputed guess × answer feedback table
pub mod dictionary;

// Answer prior from word frequencies
pub mod weights;

// Entropy evaluation and the solver loop
pub mod solver;

// Word list and frequency files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
