//! Wordle word representation
//!
//! A Word stores a 5-letter lowercase word as text and as a fixed byte array.

use super::WORD_LEN;
use std::fmt;
use thiserror::Error;

/// A 5-letter Wordle word
///
/// Ordering is lexicographic on the lowercase text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters: {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; it is never truncated or padded.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or the text contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_maxent::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Rebuild a word from raw bytes, as stored in the dictionary cache
    ///
    /// # Errors
    /// Returns `WordError` if the bytes are not lowercase ASCII letters.
    pub fn from_bytes(bytes: [u8; WORD_LEN]) -> Result<Self, WordError> {
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters(
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }
        let text = bytes.iter().map(|&b| char::from(b)).collect();
        Ok(Self { text, chars: bytes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Per-letter counts, indexed by `letter - b'a'`
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
