//! Word lists and frequency data
//!
//! The vocabulary and the answer-frequency signal come from plain text files.

pub mod loader;

pub use loader::{LoadError, load_frequencies, load_vocabulary};
