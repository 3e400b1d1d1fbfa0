//! Ordered, deduplicated word list with stable indices
//!
//! Every table in the crate (pattern rows, weights, candidate sets) is keyed by
//! the index a word has here.

use super::Word;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error type for vocabulary construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("vocabulary is empty")]
    Empty,
}

/// Non-empty ordered set of words
///
/// The first occurrence of a duplicate keeps its position; later copies are dropped.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from words in their source order
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if no words are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_maxent::core::{Vocabulary, Word};
    ///
    /// let vocab = Vocabulary::from_strs(&["slate", "crane", "slate"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// assert_eq!(vocab.index_of(&Word::new("crane").unwrap()), Some(1));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, VocabularyError> {
        let mut ordered = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if !index.contains_key(&word) {
                index.insert(word.clone(), ordered.len());
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self {
            words: ordered,
            index,
        })
    }

    /// Convenience constructor for literal word lists
    ///
    /// # Errors
    /// Returns an error if any entry is not a valid word or the list is empty.
    pub fn from_strs(words: &[&str]) -> anyhow::Result<Self> {
        let words = words
            .iter()
            .map(|&s| Word::new(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words)?)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty vocabularies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Stable index of `word`, if present
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Look up by text, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<usize> {
        Word::new(text).ok().and_then(|w| self.index_of(&w))
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Vocabulary {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_preserves_order_and_dedups() {
        let vocab = Vocabulary::from_strs(&["slate", "crane", "SLATE", "irate"]).unwrap();
        let texts: Vec<&str> = vocab.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert_eq!(vocab.find("irate"), Some(2));
        assert_eq!(vocab.find("Crane"), Some(1));
    }

    #[test]
    fn vocabulary_rejects_empty() {
        assert_eq!(Vocabulary::new(Vec::new()), Err(VocabularyError::Empty));
    }

    #[test]
    fn vocabulary_lookup_missing() {
        let vocab = Vocabulary::from_strs(&["slate"]).unwrap();
        assert_eq!(vocab.find("crane"), None);
        assert_eq!(vocab.find("nope"), None);
        assert!(!vocab.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn vocabulary_equality_is_order_sensitive() {
        let a = Vocabulary::from_strs(&["slate", "crane"]).unwrap();
        let b = Vocabulary::from_strs(&["crane", "slate"]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
