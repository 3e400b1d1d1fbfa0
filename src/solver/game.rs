//! Per-game state owned by a single game run

use crate::core::{Pattern, Word};

/// Why a guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// Only one candidate remained
    SoleCandidate,
    /// Fixed opening guess from the configuration
    Opening,
    /// Highest entropy over the guess pool
    MaxEntropy,
    /// Supplied from outside the solver
    External,
}

/// A guess ready to be played
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    /// Index into the dictionary's guess pool
    pub guess: usize,
    /// Entropy in bits, when it was computed
    pub entropy: Option<f64>,
    pub source: GuessSource,
}

impl Suggestion {
    /// Wrap a guess chosen outside the solver
    #[must_use]
    pub const fn external(guess: usize) -> Self {
        Self {
            guess,
            entropy: None,
            source: GuessSource::External,
        }
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting for the next guess to be chosen
    AwaitingGuess,
    /// A guess has been played and its feedback is pending
    AwaitingFeedback(Suggestion),
    /// The last feedback was all correct
    Solved,
    /// The turn cap was reached without solving
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// One completed turn
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub guess_index: usize,
    pub pattern: Pattern,
    pub entropy: Option<f64>,
    pub remaining_before: usize,
    pub remaining_after: usize,
}

/// Mutable state of one game
///
/// `remaining` holds answer indices in ascending order and only ever shrinks
/// between turns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) remaining: Vec<usize>,
    pub(crate) turn: usize,
    pub(crate) log: Vec<Turn>,
    pub(crate) phase: Phase,
}

impl GameState {
    pub(crate) fn new(answer_count: usize) -> Self {
        Self {
            remaining: (0..answer_count).collect(),
            turn: 1,
            log: Vec::new(),
            phase: Phase::AwaitingGuess,
        }
    }

    /// Answer indices still consistent with every feedback so far
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Current turn, starting at 1
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Completed turns in order
    #[inline]
    #[must_use]
    pub fn log(&self) -> &[Turn] {
        &self.log
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { turns: usize },
    Exhausted,
}

impl Outcome {
    /// Turns used, or `None` for an exhausted game
    #[must_use]
    pub const fn turns(self) -> Option<usize> {
        match self {
            Self::Solved { turns } => Some(turns),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Record of a finished batch game
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub answer: Word,
    pub outcome: Outcome,
    pub log: Vec<Turn>,
}

impl GameReport {
    /// Guess words in play order
    #[must_use]
    pub fn guesses(&self) -> Vec<&Word> {
        self.log.iter().map(|t| &t.guess).collect()
    }
}
