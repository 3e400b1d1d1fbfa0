//! Precomputed guess → pattern → answers table
//!
//! One row per guess holds the packed pattern of that guess against every
//! answer, in answer-index order. A bucket `dict[guess][pattern]` is the set of
//! answer indices whose code in that row equals `pattern`, so for a fixed guess
//! the 243 buckets partition the answer vocabulary by construction.

use crate::core::{Pattern, Vocabulary, Word, classify};
use rayon::prelude::*;
use std::fmt;

/// Immutable pattern lookup table over a guess pool and an answer vocabulary
#[derive(Clone, PartialEq, Eq)]
pub struct PatternDictionary {
    guesses: Vocabulary,
    answers: Vocabulary,
    table: Vec<u8>,
}

impl PatternDictionary {
    /// Build the square table where every vocabulary word is both a guess and an answer
    ///
    /// # Examples
    /// ```
    /// use wordle_maxent::core::{Pattern, Vocabulary};
    /// use wordle_maxent::dictionary::PatternDictionary;
    ///
    /// let vocab = Vocabulary::from_strs(&["slate", "crane", "irate"]).unwrap();
    /// let dict = PatternDictionary::build(&vocab);
    ///
    /// let perfect: Vec<usize> = dict.bucket(0, Pattern::PERFECT).collect();
    /// assert_eq!(perfect, vec![0]);
    /// ```
    #[must_use]
    pub fn build(vocabulary: &Vocabulary) -> Self {
        Self::build_with_guesses(vocabulary.clone(), vocabulary.clone())
    }

    /// Build the table for a separate guess pool
    #[must_use]
    pub fn build_with_guesses(guesses: Vocabulary, answers: Vocabulary) -> Self {
        Self::build_with_progress(guesses, answers, || {})
    }

    /// Build the table, calling `on_row` once per finished guess row
    ///
    /// Rows are filled in parallel; the result is identical to a sequential build.
    pub fn build_with_progress<F>(guesses: Vocabulary, answers: Vocabulary, on_row: F) -> Self
    where
        F: Fn() + Sync,
    {
        let width = answers.len();
        let mut table = vec![0u8; guesses.len() * width];

        table
            .par_chunks_mut(width)
            .zip(guesses.words().par_iter())
            .for_each(|(row, guess)| {
                for (slot, answer) in row.iter_mut().zip(answers.words()) {
                    *slot = classify(guess, answer).value();
                }
                on_row();
            });

        Self {
            guesses,
            answers,
            table,
        }
    }

    /// Reassemble a dictionary from stored parts, validating shape and codes
    ///
    /// # Errors
    /// Returns a description of the first inconsistency found.
    pub fn from_parts(
        guesses: Vocabulary,
        answers: Vocabulary,
        table: Vec<u8>,
    ) -> Result<Self, String> {
        let expected = guesses.len() * answers.len();
        if table.len() != expected {
            return Err(format!(
                "table has {} entries, expected {expected}",
                table.len()
            ));
        }

        if let Some(pos) = table.iter().position(|&code| Pattern::try_new(code).is_none()) {
            return Err(format!("invalid pattern code {} at entry {pos}", table[pos]));
        }

        let dict = Self {
            guesses,
            answers,
            table,
        };

        for (g, guess) in dict.guesses.words().iter().enumerate() {
            if let Some(a) = dict.answers.index_of(guess) {
                if !dict.pattern(g, a).is_perfect() {
                    return Err(format!("row for {guess} does not match itself"));
                }
            }
        }

        Ok(dict)
    }

    /// Guess pool, in row order
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &Vocabulary {
        &self.guesses
    }

    /// Answer vocabulary, in column order
    #[inline]
    #[must_use]
    pub const fn answers(&self) -> &Vocabulary {
        &self.answers
    }

    /// Raw row-major table of pattern codes
    #[inline]
    #[must_use]
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    /// Pattern codes of one guess against every answer
    ///
    /// # Panics
    /// Panics if `guess` is not a valid guess index
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        let width = self.answers.len();
        &self.table[guess * width..(guess + 1) * width]
    }

    /// Pattern produced by guess index `guess` against answer index `answer`
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess: usize, answer: usize) -> Pattern {
        Pattern::new(self.table[guess * self.answers.len() + answer])
    }

    /// Answer indices in `dict[guess][pattern]`, ascending
    pub fn bucket(&self, guess: usize, pattern: Pattern) -> impl Iterator<Item = usize> + '_ {
        let code = pattern.value();
        self.row(guess)
            .iter()
            .enumerate()
            .filter_map(move |(answer, &c)| (c == code).then_some(answer))
    }

    /// Size of every bucket for one guess, indexed by pattern value
    #[must_use]
    pub fn bucket_sizes(&self, guess: usize) -> [usize; Pattern::COUNT] {
        let mut sizes = [0usize; Pattern::COUNT];
        for &code in self.row(guess) {
            sizes[usize::from(code)] += 1;
        }
        sizes
    }

    /// Row index of a guess word
    #[inline]
    #[must_use]
    pub fn guess_index(&self, word: &Word) -> Option<usize> {
        self.guesses.index_of(word)
    }

    /// Column index of an answer word
    #[inline]
    #[must_use]
    pub fn answer_index(&self, word: &Word) -> Option<usize> {
        self.answers.index_of(word)
    }
}

impl fmt::Debug for PatternDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternDictionary")
            .field("guesses", &self.guesses.len())
            .field("answers", &self.answers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vocabulary {
        Vocabulary::from_strs(words).unwrap()
    }

    #[test]
    fn build_matches_classifier() {
        let v = vocab(&["slate", "crane", "speed", "erase", "robot"]);
        let dict = PatternDictionary::build(&v);

        for (g, guess) in v.words().iter().enumerate() {
            for (a, answer) in v.words().iter().enumerate() {
                assert_eq!(dict.pattern(g, a), classify(guess, answer));
            }
        }
    }

    #[test]
    fn buckets_partition_answers() {
        let v = vocab(&["slate", "crane", "irate", "crate", "grate", "zzzzz"]);
        let dict = PatternDictionary::build(&v);

        for g in 0..v.len() {
            let mut seen = vec![0usize; v.len()];
            for pattern in Pattern::all() {
                for a in dict.bucket(g, pattern) {
                    seen[a] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1));
            assert_eq!(dict.bucket_sizes(g).iter().sum::<usize>(), v.len());
        }
    }

    #[test]
    fn diagonal_is_perfect() {
        let v = vocab(&["slate", "crane", "aaaaa"]);
        let dict = PatternDictionary::build(&v);
        for i in 0..v.len() {
            assert!(dict.pattern(i, i).is_perfect());
            assert_eq!(dict.bucket(i, Pattern::PERFECT).collect::<Vec<_>>(), vec![i]);
        }
    }

    #[test]
    fn rectangular_build_uses_guess_rows() {
        let guesses = vocab(&["crane", "slate", "zzzzz"]);
        let answers = vocab(&["slate", "irate"]);
        let dict = PatternDictionary::build_with_guesses(guesses, answers);

        assert_eq!(dict.row(0).len(), 2);
        assert_eq!(dict.table().len(), 6);
        // ZZZZZ shares nothing with either answer
        assert_eq!(dict.bucket(2, Pattern::new(0)).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(dict.guess_index(&Word::new("slate").unwrap()), Some(1));
        assert_eq!(dict.answer_index(&Word::new("slate").unwrap()), Some(0));
    }

    #[test]
    fn progress_called_once_per_row() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let v = vocab(&["slate", "crane", "irate", "crate"]);
        let rows = AtomicUsize::new(0);
        let dict = PatternDictionary::build_with_progress(v.clone(), v, || {
            rows.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(rows.load(Ordering::Relaxed), 4);
        assert_eq!(dict.guesses().len(), 4);
    }

    #[test]
    fn from_parts_validates() {
        let v = vocab(&["slate", "crane"]);
        let dict = PatternDictionary::build(&v);

        let rebuilt = PatternDictionary::from_parts(v.clone(), v.clone(), dict.table().to_vec());
        assert_eq!(rebuilt.unwrap(), dict);

        assert!(PatternDictionary::from_parts(v.clone(), v.clone(), vec![0; 3]).is_err());
        assert!(PatternDictionary::from_parts(v.clone(), v.clone(), vec![243; 4]).is_err());
        // Valid codes but the diagonal is not perfect
        assert!(PatternDictionary::from_parts(v.clone(), v, vec![0; 4]).is_err());
    }
}
