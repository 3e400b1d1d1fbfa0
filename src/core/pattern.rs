//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback must be exactly {WORD_LEN} symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

impl Pattern {
    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Create a pattern from a raw value, rejecting anything out of range
    #[inline]
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        if value < 243 { Some(Self(value)) } else { None }
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw value as a table index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the answer's letter counts
    /// 2. Second pass: mark present letters from whatever counts remain, left to right
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_maxent::core::{Word, Pattern};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    ///
    /// // S present, P absent, E present, E present, D absent
    /// assert_eq!(Pattern::calculate(&guess, &answer).digits(), [1, 0, 1, 1, 0]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let target = answer.chars();
        let mut result = [0u8; WORD_LEN];
        let mut available = answer.letter_counts();

        // Allow: index needed to compare guess[i] with target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess[i] == target[i] {
                result[i] = 2;
                available[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == 0 {
                let slot = &mut available[usize::from(guess[i] - b'a')];
                if *slot > 0 {
                    result[i] = 1;
                    *slot -= 1;
                }
            }
        }

        Self::from_digits(result)
    }

    /// Pack per-position digits (each 0, 1 or 2) into a pattern
    #[must_use]
    pub fn from_digits(digits: [u8; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            debug_assert!(digit < 3);
            pattern += digit * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Unpack into per-position digits
    #[must_use]
    pub const fn digits(self) -> [u8; WORD_LEN] {
        let mut digits = [0u8; WORD_LEN];
        let mut val = self.0;
        let mut i = 0;
        while i < WORD_LEN {
            digits[i] = val % 3;
            val /= 3;
            i += 1;
        }
        digits
    }

    /// Per-position feedback symbols
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        self.digits().map(Feedback::from_digit)
    }

    /// Parse human-entered feedback such as `"10110"`, `"Y-YY-"` or `"🟨⬛🟨🟨⬛"`
    ///
    /// # Errors
    /// Returns `PatternError` when the input is not exactly five symbols or
    /// contains a symbol outside the accepted set.
    ///
    /// # Examples
    /// ```
    /// use wordle_maxent::core::Pattern;
    ///
    /// let p1 = Pattern::parse("21020").unwrap();
    /// let p2 = Pattern::parse("GY-G-").unwrap();
    /// let p3 = Pattern::parse("🟩🟨⬛🟩⬛").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p2, p3);
    /// assert!(Pattern::parse("2102").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(PatternError::InvalidLength(symbols.len()));
        }

        let mut digits = [0u8; WORD_LEN];
        for (position, &symbol) in symbols.iter().enumerate() {
            let feedback = Feedback::from_symbol(symbol)
                .ok_or(PatternError::InvalidSymbol { symbol, position })?;
            digits[position] = feedback as u8;
        }

        Ok(Self::from_digits(digits))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.emoji()).collect()
    }

    /// Iterate over every possible pattern in value order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..243u8).map(Self)
    }
}

/// Classify a guess against an answer
///
/// Free-function form of [`Pattern::calculate`].
#[inline]
#[must_use]
pub fn classify(guess: &Word, answer: &Word) -> Pattern {
    Pattern::calculate(guess, answer)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
