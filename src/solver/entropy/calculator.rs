//! Weighted Shannon entropy of a guess over the remaining candidates
//!
//! For a guess, every remaining answer drops its prior weight into the bucket of
//! the pattern it would produce. Dividing by the total remaining weight gives a
//! 243-slot probability vector whose entropy (in bits) is the expected
//! information of the guess.

use crate::core::Pattern;
use crate::dictionary::PatternDictionary;
use crate::weights::WeightTable;
use rayon::prelude::*;

/// Entropy of one guess from the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    /// Guess index in the dictionary's guess pool
    pub guess: usize,
    /// Expected information in bits
    pub entropy: f64,
}

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Per-pattern weight mass of `remaining` against one dictionary row
///
/// Returns the masses indexed by pattern value and their total. Sums run in
/// `remaining` order so repeated calls are bit-identical.
#[must_use]
pub fn pattern_masses(
    row: &[u8],
    remaining: &[usize],
    weights: &WeightTable,
) -> ([f64; Pattern::COUNT], f64) {
    let mut masses = [0.0f64; Pattern::COUNT];
    let mut total = 0.0;
    for &answer in remaining {
        let w = weights.get(answer);
        masses[usize::from(row[answer])] += w;
        total += w;
    }
    (masses, total)
}

/// Shannon entropy in bits of the distribution proportional to `masses`
///
/// Zero masses contribute nothing (`0·log 0 = 0`); an all-zero input has entropy 0.
///
/// # Examples
/// ```
/// use wordle_maxent::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy(&[1.0, 1.0, 1.0, 1.0]) - 2.0).abs() < 1e-12);
/// assert!((shannon_entropy(&[3.0, 0.0, 3.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(shannon_entropy(&[0.0, 0.0]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(masses: &[f64]) -> f64 {
    let total: f64 = masses.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let h: f64 = masses
        .iter()
        .filter(|&&m| m > 0.0)
        .map(|&m| {
            let p = m / total;
            -p * p.log2()
        })
        .sum();
    h.max(0.0)
}

/// Entropy of guessing `guess` when `remaining` answers are still possible
#[must_use]
pub fn guess_entropy(
    dict: &PatternDictionary,
    guess: usize,
    remaining: &[usize],
    weights: &WeightTable,
) -> f64 {
    let (masses, _) = pattern_masses(dict.row(guess), remaining, weights);
    shannon_entropy(&masses)
}

/// Entropy of every guess in `pool`, in pool order
///
/// Guesses are scored in parallel; each score is independent of thread count.
#[must_use]
pub fn entropies(
    dict: &PatternDictionary,
    pool: &[usize],
    remaining: &[usize],
    weights: &WeightTable,
) -> Vec<GuessScore> {
    pool.par_iter()
        .map(|&guess| GuessScore {
            guess,
            entropy: guess_entropy(dict, guess, remaining, weights),
        })
        .collect()
}

/// Entropy plus partition statistics for one guess
#[must_use]
pub fn guess_metrics(
    dict: &PatternDictionary,
    guess: usize,
    remaining: &[usize],
    weights: &WeightTable,
) -> GuessMetrics {
    let row = dict.row(guess);
    let (masses, total) = pattern_masses(row, remaining, weights);

    let mut sizes = [0usize; Pattern::COUNT];
    for &answer in remaining {
        sizes[usize::from(row[answer])] += 1;
    }

    let expected_remaining = if total > 0.0 {
        masses
            .iter()
            .zip(&sizes)
            .map(|(&m, &n)| m / total * n as f64)
            .sum()
    } else {
        0.0
    };

    GuessMetrics {
        entropy: shannon_entropy(&masses),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    fn setup(words: &[&str]) -> (PatternDictionary, WeightTable) {
        let vocab = Vocabulary::from_strs(words).unwrap();
        let weights = WeightTable::uniform(&vocab);
        (PatternDictionary::build(&vocab), weights)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        assert!((shannon_entropy(&[5.0; 8]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert!(shannon_entropy(&[0.0, 7.0, 0.0]).abs() < 1e-12);
    }

    #[test]
    fn shannon_entropy_is_scale_invariant() {
        let a = shannon_entropy(&[1.0, 2.0, 3.0]);
        let b = shannon_entropy(&[10.0, 20.0, 30.0]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        assert!(shannon_entropy(&[25.0; 4]) > shannon_entropy(&[97.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn shannon_entropy_empty() {
        assert_eq!(shannon_entropy(&[]), 0.0);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let (dict, weights) = setup(&["slate", "zzzzz"]);
        let h = guess_entropy(&dict, 0, &[0, 1], &weights);
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_same_pattern_is_zero() {
        let (dict, weights) = setup(&["zzzzz", "aaaaa", "bbbbb", "ccccc"]);
        let h = guess_entropy(&dict, 0, &[1, 2, 3], &weights);
        assert!(h.abs() < 1e-12);
    }

    #[test]
    fn weights_shift_entropy() {
        let vocab = Vocabulary::from_strs(&["slate", "zzzzz"]).unwrap();
        let dict = PatternDictionary::build(&vocab);
        let skewed = WeightTable::from_values(&vocab, vec![3.0, 1.0]).unwrap();

        // p = (3/4, 1/4)
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        let h = guess_entropy(&dict, 0, &[0, 1], &skewed);
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_total_weight_is_zero_entropy() {
        let vocab = Vocabulary::from_strs(&["slate", "zzzzz"]).unwrap();
        let dict = PatternDictionary::build(&vocab);
        let zero = WeightTable::from_values(&vocab, vec![0.0, 0.0]).unwrap();
        assert_eq!(guess_entropy(&dict, 0, &[0, 1], &zero), 0.0);
        assert_eq!(guess_entropy(&dict, 0, &[], &zero), 0.0);
    }

    #[test]
    fn entropies_keep_pool_order() {
        let (dict, weights) = setup(&["crane", "slate", "irate", "crate", "zzzzz"]);
        let scores = entropies(&dict, &[4, 0, 2], &[0, 1, 2, 3], &weights);
        let order: Vec<usize> = scores.iter().map(|s| s.guess).collect();
        assert_eq!(order, vec![4, 0, 2]);
        assert!(scores[0].entropy.abs() < 1e-12);
        assert!(scores[1].entropy > 0.0);
    }

    #[test]
    fn metrics_partition_statistics() {
        let (dict, weights) = setup(&["slate", "zzzzz", "yyyyy", "plate"]);
        // SLATE vs {slate, zzzzz, yyyyy, plate}: zzzzz and yyyyy share the all-absent bucket
        let m = guess_metrics(&dict, 0, &[0, 1, 2, 3], &weights);
        assert_eq!(m.max_partition, 2);
        // buckets 1, 2, 1 with p = 1/4, 1/2, 1/4
        assert!((m.expected_remaining - 1.5).abs() < 1e-12);
        assert!((m.entropy - 1.5).abs() < 1e-12);
    }
}
