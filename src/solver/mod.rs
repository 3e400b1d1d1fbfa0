//! Entropy-maximizing solver
//!
//! The entropy evaluator scores guesses; the engine runs the game state machine
//! on top of it.

mod engine;
pub mod entropy;
mod game;

pub use engine::{Solver, SolverConfig, SolverError};
pub use entropy::TieBreak;
pub use game::{GameReport, GameState, GuessSource, Outcome, Phase, Suggestion, Turn};
