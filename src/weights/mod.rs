//! Prior weights for candidate answers
//!
//! Words are ranked by an external frequency signal and the rank, not the raw
//! frequency, is pushed through a logistic curve. With `n` words, commonness rank
//! `r` (0 = most common), a window `width` and a `cutoff` rank:
//!
//! ```text
//! x(r) = (cutoff - r) * width / (n - 1)
//! weight(r) = 1 / (1 + e^-x(r))
//! ```
//!
//! The points span a window of length `width` and the word ranked exactly at
//! `cutoff` lands on the midpoint of the curve (weight 0.5). Weights are relative
//! priors; consumers normalize over whatever subset they score.

use crate::core::{Vocabulary, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Frequency signal per word; only the relative order matters
pub type Frequencies = FxHashMap<Word, f64>;

/// Error type for weight construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("sigmoid width must be a positive finite number, got {0}")]
    InvalidWidth(f64),
    #[error("weight table has {got} entries, vocabulary has {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("weight {value} at index {index} is not a non-negative finite number")]
    InvalidWeight { index: usize, value: f64 },
}

/// Shape of the rank → weight curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightConfig {
    /// Length of the sigmoid window the ranks are spread over; larger is sharper
    pub width: f64,
    /// Commonness rank judged 50% likely to be a plausible answer
    pub cutoff: usize,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            cutoff: 3000,
        }
    }
}

impl WeightConfig {
    /// Check the configuration
    ///
    /// # Errors
    /// Returns `WeightError::InvalidWidth` unless `width` is finite and positive.
    pub fn validate(&self) -> Result<(), WeightError> {
        if self.width.is_finite() && self.width > 0.0 {
            Ok(())
        } else {
            Err(WeightError::InvalidWidth(self.width))
        }
    }
}

/// Weight per vocabulary index
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    /// Every word equally likely
    #[must_use]
    pub fn uniform(vocabulary: &Vocabulary) -> Self {
        Self {
            weights: vec![1.0; vocabulary.len()],
        }
    }

    /// Wrap explicit weights aligned with `vocabulary`
    ///
    /// # Errors
    /// Returns `WeightError` if the lengths differ or a weight is negative or not finite.
    pub fn from_values(vocabulary: &Vocabulary, weights: Vec<f64>) -> Result<Self, WeightError> {
        if weights.len() != vocabulary.len() {
            return Err(WeightError::LengthMismatch {
                expected: vocabulary.len(),
                got: weights.len(),
            });
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|&(_, w)| !(w.is_finite() && *w >= 0.0))
        {
            return Err(WeightError::InvalidWeight { index, value });
        }
        Ok(Self { weights })
    }

    /// Weight of the word at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.weights[index]
    }

    /// All weights in vocabulary order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Logistic function
#[inline]
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Rank `vocabulary` by `frequencies` and map ranks through the sigmoid window
///
/// Words missing from `frequencies` count as frequency 0. Equal frequencies keep
/// vocabulary order, so the result is deterministic. Every weight is at least
/// `f64::MIN_POSITIVE`, however far below the cutoff a word ranks.
///
/// # Errors
/// Returns `WeightError::InvalidWidth` for an unusable `config.width`.
///
/// # Examples
/// ```
/// use wordle_maxent::core::{Vocabulary, Word};
/// use wordle_maxent::weights::{Frequencies, WeightConfig, build_weights};
///
/// let vocab = Vocabulary::from_strs(&["xylyl", "about", "crane"]).unwrap();
/// let mut freqs = Frequencies::default();
/// freqs.insert(Word::new("about").unwrap(), 900.0);
/// freqs.insert(Word::new("crane").unwrap(), 12.0);
///
/// let config = WeightConfig { width: 4.0, cutoff: 1 };
/// let weights = build_weights(&vocab, &freqs, config).unwrap();
///
/// assert!((weights.get(2) - 0.5).abs() < 1e-12); // crane is ranked at the cutoff
/// assert!(weights.get(1) > weights.get(2));
/// assert!(weights.get(2) > weights.get(0));
/// ```
pub fn build_weights(
    vocabulary: &Vocabulary,
    frequencies: &Frequencies,
    config: WeightConfig,
) -> Result<WeightTable, WeightError> {
    config.validate()?;

    let n = vocabulary.len();
    let freq: Vec<f64> = vocabulary
        .words()
        .iter()
        .map(|w| frequencies.get(w).copied().unwrap_or(0.0))
        .collect();

    let mut by_commonness: Vec<usize> = (0..n).collect();
    by_commonness.sort_by(|&a, &b| freq[b].total_cmp(&freq[a]).then(a.cmp(&b)));

    let step = if n > 1 {
        config.width / (n - 1) as f64
    } else {
        0.0
    };
    let cutoff = config.cutoff as f64;

    let mut weights = vec![0.0; n];
    for (rank, &index) in by_commonness.iter().enumerate() {
        weights[index] = sigmoid((cutoff - rank as f64) * step).max(f64::MIN_POSITIVE);
    }

    Ok(WeightTable { weights })
}
