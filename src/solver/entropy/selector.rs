//! Max-entropy guess selection with a deterministic tie-break

use super::calculator::GuessScore;
use crate::dictionary::PatternDictionary;
use std::str::FromStr;

/// Rule applied when several guesses share the maximum entropy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First guess in pool order wins
    #[default]
    PoolOrder,
    /// A guess that could itself be the answer wins, then pool order
    PreferCandidate,
    /// Alphabetically smallest guess wins
    Lexicographic,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pool" | "first" | "pool-order" => Ok(Self::PoolOrder),
            "candidate" | "prefer-candidate" => Ok(Self::PreferCandidate),
            "lexicographic" | "alpha" => Ok(Self::Lexicographic),
            other => Err(format!(
                "unknown tie-break {other:?} (expected pool, candidate or lexicographic)"
            )),
        }
    }
}

/// Pick the strictly maximal score, resolving equal entropies with `tie_break`
///
/// `is_candidate` reports whether a guess index is still a possible answer.
/// Returns `None` for an empty score list.
#[must_use]
pub fn select_best_guess<F>(
    scores: &[GuessScore],
    tie_break: TieBreak,
    dict: &PatternDictionary,
    is_candidate: F,
) -> Option<GuessScore>
where
    F: Fn(usize) -> bool,
{
    let mut best: Option<GuessScore> = None;

    for &score in scores {
        let Some(current) = best else {
            best = Some(score);
            continue;
        };

        let better = if score.entropy > current.entropy {
            true
        } else if score.entropy < current.entropy {
            false
        } else {
            match tie_break {
                TieBreak::PoolOrder => false,
                TieBreak::PreferCandidate => is_candidate(score.guess) && !is_candidate(current.guess),
                TieBreak::Lexicographic => {
                    let words = dict.guesses();
                    words.word(score.guess) < words.word(current.guess)
                }
            }
        };

        if better {
            best = Some(score);
        }
    }

    best
}
