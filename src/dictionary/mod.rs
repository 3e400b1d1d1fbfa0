//! Pattern dictionary: build once, cache on disk, share read-only
//!
//! Building is O(guesses × answers) classifications, which is why the table is
//! persisted and reloaded rather than recomputed per game.

mod builder;
pub mod cache;

pub use builder::PatternDictionary;
pub use cache::CacheError;
