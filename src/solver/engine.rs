//! Solver loop: choose, play, narrow, repeat

use super::entropy::{TieBreak, entropies, select_best_guess};
use super::game::{GameReport, GameState, GuessSource, Outcome, Phase, Suggestion, Turn};
use crate::core::{Pattern, Word, classify};
use crate::dictionary::PatternDictionary;
use crate::weights::WeightTable;
use rayon::prelude::*;
use thiserror::Error;

/// Error type for the solver loop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("{0} is not in the guess pool")]
    UnknownWord(Word),
    #[error("{0} is not in the answer vocabulary")]
    UnknownAnswer(Word),
    #[error("answer {0} is not in the guess pool")]
    AnswerNotGuessable(Word),
    #[error("weight table has {got} entries but the dictionary has {expected} answers")]
    WeightMismatch { expected: usize, got: usize },
    #[error("max_turns must be at least 1")]
    InvalidTurnCap,
    #[error("no candidates match the feedback so far")]
    NoCandidates,
    #[error("the game is already over")]
    GameOver,
    #[error("no guess is pending feedback")]
    NoPendingGuess,
    #[error("guess index {0} is outside the guess pool")]
    GuessOutOfRange(usize),
}

/// Explicit solver configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Games that are not solved by this turn are exhausted
    pub max_turns: usize,
    /// Fixed turn-1 guess that skips the opening entropy evaluation
    pub opening: Option<Word>,
    pub tie_break: TieBreak,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_turns: 9,
            opening: None,
            tie_break: TieBreak::default(),
        }
    }
}

/// Entropy-maximizing Wordle solver
///
/// Borrows the dictionary and weights read-only, so one instance (or many) can
/// drive any number of games, including in parallel.
pub struct Solver<'a> {
    dict: &'a PatternDictionary,
    weights: &'a WeightTable,
    config: SolverConfig,
    opening: Option<usize>,
    pool: Vec<usize>,
    answer_to_guess: Vec<usize>,
    guess_to_answer: Vec<Option<usize>>,
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary and weights aligned with its answers
    ///
    /// # Errors
    /// Returns `SolverError` if the weights do not match the answer vocabulary,
    /// an answer cannot be guessed, the opening is not in the guess pool, or
    /// `max_turns` is zero.
    pub fn new(
        dict: &'a PatternDictionary,
        weights: &'a WeightTable,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        if weights.len() != dict.answers().len() {
            return Err(SolverError::WeightMismatch {
                expected: dict.answers().len(),
                got: weights.len(),
            });
        }
        if config.max_turns == 0 {
            return Err(SolverError::InvalidTurnCap);
        }

        let answer_to_guess = dict
            .answers()
            .words()
            .iter()
            .map(|w| {
                dict.guess_index(w)
                    .ok_or_else(|| SolverError::AnswerNotGuessable(w.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let guess_to_answer = dict
            .guesses()
            .words()
            .iter()
            .map(|w| dict.answer_index(w))
            .collect();

        let opening = config
            .opening
            .as_ref()
            .map(|w| {
                dict.guess_index(w)
                    .ok_or_else(|| SolverError::UnknownWord(w.clone()))
            })
            .transpose()?;

        Ok(Self {
            dict,
            weights,
            config,
            opening,
            pool: (0..dict.guesses().len()).collect(),
            answer_to_guess,
            guess_to_answer,
        })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a PatternDictionary {
        self.dict
    }

    #[must_use]
    pub const fn weights(&self) -> &'a WeightTable {
        self.weights
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Guess word for a pool index
    #[must_use]
    pub fn word(&self, guess: usize) -> &'a Word {
        self.dict.guesses().word(guess)
    }

    /// Fresh game: every answer possible, turn 1
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(self.dict.answers().len())
    }

    /// Remaining candidates as words
    #[must_use]
    pub fn candidates(&self, state: &GameState) -> Vec<&'a Word> {
        state
            .remaining
            .iter()
            .map(|&a| self.dict.answers().word(a))
            .collect()
    }

    /// Choose the next guess without changing the game
    ///
    /// # Errors
    /// Returns `GameOver` for a finished game and `NoCandidates` when the
    /// feedback so far is inconsistent with every answer.
    pub fn suggest(&self, state: &GameState) -> Result<Suggestion, SolverError> {
        if state.phase.is_terminal() {
            return Err(SolverError::GameOver);
        }

        match state.remaining.as_slice() {
            [] => Err(SolverError::NoCandidates),
            &[only] => Ok(Suggestion {
                guess: self.answer_to_guess[only],
                entropy: None,
                source: GuessSource::SoleCandidate,
            }),
            remaining => match self.opening {
                Some(guess) if state.turn == 1 => Ok(Suggestion {
                    guess,
                    entropy: None,
                    source: GuessSource::Opening,
                }),
                _ => self.evaluate(remaining),
            },
        }
    }

    /// Max-entropy guess over the whole pool for a remaining set
    ///
    /// If every guess scores 0 under the prior (e.g. all remaining weight is
    /// zero), the candidates are scored with uniform weights instead. Guessing a
    /// remaining candidate then splits it off, so each turn narrows the set.
    fn evaluate(&self, remaining: &[usize]) -> Result<Suggestion, SolverError> {
        let best = self.select(remaining, self.weights)?;
        if best.entropy.is_some_and(|h| h > 0.0) || remaining.len() < 2 {
            return Ok(best);
        }
        self.select(remaining, &WeightTable::uniform(self.dict.answers()))
    }

    fn select(&self, remaining: &[usize], weights: &WeightTable) -> Result<Suggestion, SolverError> {
        let scores = entropies(self.dict, &self.pool, remaining, weights);

        let mut is_remaining = vec![false; self.dict.answers().len()];
        for &a in remaining {
            is_remaining[a] = true;
        }
        let is_candidate = |g: usize| self.guess_to_answer[g].is_some_and(|a| is_remaining[a]);

        select_best_guess(&scores, self.config.tie_break, self.dict, is_candidate)
            .map(|best| Suggestion {
                guess: best.guess,
                entropy: Some(best.entropy),
                source: GuessSource::MaxEntropy,
            })
            .ok_or(SolverError::NoCandidates)
    }

    /// Best turn-1 guess with no prior feedback, ignoring any configured opening
    ///
    /// Computing this once and pinning it as `SolverConfig::opening` gives the same
    /// games as evaluating turn 1 every time.
    ///
    /// # Errors
    /// Returns `NoCandidates` only for an empty guess pool.
    pub fn best_opening(&self) -> Result<Suggestion, SolverError> {
        let state = self.new_game();
        match state.remaining.as_slice() {
            &[only] => Ok(Suggestion {
                guess: self.answer_to_guess[only],
                entropy: None,
                source: GuessSource::SoleCandidate,
            }),
            remaining => self.evaluate(remaining),
        }
    }

    /// Play `suggestion`, moving the game to `AwaitingFeedback`
    ///
    /// # Errors
    /// Returns `GameOver` for a finished game and `GuessOutOfRange` when the
    /// suggestion does not index the guess pool.
    pub fn commit(&self, state: &mut GameState, suggestion: Suggestion) -> Result<(), SolverError> {
        if state.phase.is_terminal() {
            return Err(SolverError::GameOver);
        }
        if suggestion.guess >= self.dict.guesses().len() {
            return Err(SolverError::GuessOutOfRange(suggestion.guess));
        }
        state.phase = Phase::AwaitingFeedback(suggestion);
        Ok(())
    }

    /// Suggest and commit in one step
    ///
    /// # Errors
    /// Same as [`Solver::suggest`].
    pub fn next_guess(&self, state: &mut GameState) -> Result<Suggestion, SolverError> {
        let suggestion = self.suggest(state)?;
        self.commit(state, suggestion)?;
        Ok(suggestion)
    }

    /// Apply feedback for the pending guess and narrow the candidates
    ///
    /// Feedback that no remaining answer could produce is rejected with
    /// `NoCandidates` and leaves the state untouched.
    ///
    /// # Errors
    /// Returns `NoPendingGuess` if nothing was committed, `GameOver` for a
    /// finished game, and `NoCandidates` for inconsistent feedback.
    pub fn feedback(&self, state: &mut GameState, pattern: Pattern) -> Result<Phase, SolverError> {
        let suggestion = match state.phase {
            Phase::AwaitingFeedback(s) => s,
            Phase::AwaitingGuess => return Err(SolverError::NoPendingGuess),
            Phase::Solved | Phase::Exhausted => return Err(SolverError::GameOver),
        };

        let row = self.dict.row(suggestion.guess);
        let code = pattern.value();
        let narrowed: Vec<usize> = state
            .remaining
            .iter()
            .copied()
            .filter(|&a| row[a] == code)
            .collect();

        if narrowed.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        state.log.push(Turn {
            guess: self.word(suggestion.guess).clone(),
            guess_index: suggestion.guess,
            pattern,
            entropy: suggestion.entropy,
            remaining_before: state.remaining.len(),
            remaining_after: narrowed.len(),
        });
        state.remaining = narrowed;

        state.phase = if pattern.is_perfect() {
            Phase::Solved
        } else {
            state.turn += 1;
            if state.turn > self.config.max_turns {
                Phase::Exhausted
            } else {
                Phase::AwaitingGuess
            }
        };

        Ok(state.phase)
    }

    /// Drop the last turn and recompute the candidates from the remaining log
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&self, state: &mut GameState) -> bool {
        if state.log.pop().is_none() {
            let pending = matches!(state.phase, Phase::AwaitingFeedback(_));
            state.phase = Phase::AwaitingGuess;
            return pending;
        }

        let mut replayed = GameState::new(self.dict.answers().len());
        for turn in &state.log {
            let row = self.dict.row(turn.guess_index);
            replayed.remaining.retain(|&a| row[a] == turn.pattern.value());
        }

        state.remaining = replayed.remaining;
        state.turn = state.log.len() + 1;
        state.phase = Phase::AwaitingGuess;
        true
    }

    /// Play a whole game against a known answer
    ///
    /// # Errors
    /// Returns `UnknownAnswer` if `answer` is not in the answer vocabulary.
    pub fn play(&self, answer: &Word) -> Result<GameReport, SolverError> {
        if !self.dict.answers().contains(answer) {
            return Err(SolverError::UnknownAnswer(answer.clone()));
        }

        let mut state = self.new_game();
        loop {
            let suggestion = self.next_guess(&mut state)?;
            let pattern = classify(self.word(suggestion.guess), answer);

            match self.feedback(&mut state, pattern)? {
                Phase::Solved => {
                    return Ok(GameReport {
                        answer: answer.clone(),
                        outcome: Outcome::Solved {
                            turns: state.log.len(),
                        },
                        log: state.log,
                    });
                }
                Phase::Exhausted => {
                    return Ok(GameReport {
                        answer: answer.clone(),
                        outcome: Outcome::Exhausted,
                        log: state.log,
                    });
                }
                Phase::AwaitingGuess | Phase::AwaitingFeedback(_) => {}
            }
        }
    }

    /// Play every answer independently, in parallel, keeping input order
    ///
    /// A failing game only affects its own entry.
    #[must_use]
    pub fn play_all(&self, answers: &[Word]) -> Vec<Result<GameReport, SolverError>> {
        answers.par_iter().map(|answer| self.play(answer)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "stare", "roast", "toast", "beast",
    ];

    fn setup() -> (PatternDictionary, WeightTable) {
        let vocab = Vocabulary::from_strs(WORDS).unwrap();
        let weights = WeightTable::uniform(&vocab);
        (PatternDictionary::build(&vocab), weights)
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn new_game_starts_with_everything() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let state = solver.new_game();

        assert_eq!(state.remaining().len(), WORDS.len());
        assert_eq!(state.turn(), 1);
        assert_eq!(state.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn first_suggestion_maximizes_entropy() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let state = solver.new_game();

        let suggestion = solver.suggest(&state).unwrap();
        assert_eq!(suggestion.source, GuessSource::MaxEntropy);

        let all = entropies(&dict, &solver.pool, state.remaining(), &weights);
        let max = all.iter().map(|s| s.entropy).fold(f64::MIN, f64::max);
        assert_eq!(suggestion.entropy, Some(max));
    }

    #[test]
    fn sole_candidate_skips_entropy() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let mut state = solver.new_game();

        solver
            .commit(&mut state, Suggestion::external(1))
            .unwrap();
        // slate guessed, slate is the answer
        let phase = solver.feedback(&mut state, Pattern::PERFECT).unwrap();
        assert_eq!(phase, Phase::Solved);
        assert_eq!(state.remaining(), &[1]);

        let mut state = solver.new_game();
        state.remaining = vec![4];
        let suggestion = solver.suggest(&state).unwrap();
        assert_eq!(suggestion.source, GuessSource::SoleCandidate);
        assert_eq!(solver.word(suggestion.guess).text(), "grate");
        assert_eq!(suggestion.entropy, None);
    }

    #[test]
    fn opening_used_only_on_turn_one() {
        let (dict, weights) = setup();
        let config = SolverConfig {
            opening: Some(word("roast")),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&dict, &weights, config).unwrap();
        let mut state = solver.new_game();

        let first = solver.next_guess(&mut state).unwrap();
        assert_eq!(first.source, GuessSource::Opening);
        assert_eq!(solver.word(first.guess).text(), "roast");

        let pattern = classify(&word("roast"), &word("crane"));
        assert_eq!(solver.feedback(&mut state, pattern).unwrap(), Phase::AwaitingGuess);
        let second = solver.suggest(&state).unwrap();
        assert_ne!(second.source, GuessSource::Opening);
    }

    #[test]
    fn pinned_best_opening_plays_identical_games() {
        let (dict, weights) = setup();
        let free = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let opening = free.best_opening().unwrap();

        let pinned = Solver::new(
            &dict,
            &weights,
            SolverConfig {
                opening: Some(free.word(opening.guess).clone()),
                ..SolverConfig::default()
            },
        )
        .unwrap();

        for answer in WORDS {
            let a = free.play(&word(answer)).unwrap();
            let b = pinned.play(&word(answer)).unwrap();
            assert_eq!(a.guesses(), b.guesses());
            assert_eq!(a.outcome, b.outcome);
        }
    }

    #[test]
    fn unknown_opening_rejected() {
        let (dict, weights) = setup();
        let config = SolverConfig {
            opening: Some(word("tares")),
            ..SolverConfig::default()
        };
        assert_eq!(
            Solver::new(&dict, &weights, config).err(),
            Some(SolverError::UnknownWord(word("tares")))
        );
    }

    #[test]
    fn mismatched_weights_rejected() {
        let (dict, _) = setup();
        let other = Vocabulary::from_strs(&["slate"]).unwrap();
        let weights = WeightTable::uniform(&other);
        assert!(matches!(
            Solver::new(&dict, &weights, SolverConfig::default()),
            Err(SolverError::WeightMismatch { expected: 10, got: 1 })
        ));
    }

    #[test]
    fn zero_turn_cap_rejected() {
        let (dict, weights) = setup();
        let config = SolverConfig {
            max_turns: 0,
            ..SolverConfig::default()
        };
        assert_eq!(
            Solver::new(&dict, &weights, config).err(),
            Some(SolverError::InvalidTurnCap)
        );
    }

    #[test]
    fn answers_must_be_guessable() {
        let guesses = Vocabulary::from_strs(&["crane", "slate"]).unwrap();
        let answers = Vocabulary::from_strs(&["slate", "irate"]).unwrap();
        let dict = PatternDictionary::build_with_guesses(guesses, answers.clone());
        let weights = WeightTable::uniform(&answers);
        assert_eq!(
            Solver::new(&dict, &weights, SolverConfig::default()).err(),
            Some(SolverError::AnswerNotGuessable(word("irate")))
        );
    }

    #[test]
    fn inconsistent_feedback_leaves_state_untouched() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let mut state = solver.new_game();

        // CRANE cannot score all-absent against a vocabulary full of A/E/R words
        solver.commit(&mut state, Suggestion::external(0)).unwrap();
        let before = state.clone();
        assert_eq!(
            solver.feedback(&mut state, Pattern::new(0)),
            Err(SolverError::NoCandidates)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn commit_rejects_index_outside_pool() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let mut state = solver.new_game();

        assert_eq!(
            solver.commit(&mut state, Suggestion::external(WORDS.len())),
            Err(SolverError::GuessOutOfRange(WORDS.len()))
        );
        assert_eq!(state, solver.new_game());
        assert_eq!(
            solver.feedback(&mut state, Pattern::PERFECT),
            Err(SolverError::NoPendingGuess)
        );
    }

    #[test]
    fn zero_weight_candidates_still_narrow() {
        let vocab = Vocabulary::from_strs(&["crane", "slate", "boast", "toast"]).unwrap();
        let dict = PatternDictionary::build(&vocab);
        let weights = WeightTable::from_values(&vocab, vec![1.0, 1.0, 0.0, 0.0]).unwrap();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();

        // CRANE leaves {boast, toast}, which carry no weight at all
        let report = solver.play(&word("toast")).unwrap();
        assert_eq!(report.outcome, Outcome::Solved { turns: 3 });
        let guesses: Vec<&str> = report.log.iter().map(|t| t.guess.text()).collect();
        assert_eq!(guesses, ["crane", "boast", "toast"]);
        assert_eq!(report.log[1].entropy, Some(1.0));

        for answer in ["crane", "slate", "boast", "toast"] {
            let report = solver.play(&word(answer)).unwrap();
            assert!(report.outcome.is_solved(), "{answer} not solved");
            for turn in &report.log {
                if turn.remaining_before > 1 {
                    assert!(turn.remaining_after < turn.remaining_before);
                }
            }
        }
    }

    #[test]
    fn feedback_requires_pending_guess() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let mut state = solver.new_game();
        assert_eq!(
            solver.feedback(&mut state, Pattern::PERFECT),
            Err(SolverError::NoPendingGuess)
        );
    }

    #[test]
    fn exhausts_at_turn_cap() {
        let (dict, weights) = setup();
        let config = SolverConfig {
            max_turns: 1,
            opening: Some(word("beast")),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&dict, &weights, config).unwrap();

        let report = solver.play(&word("crane")).unwrap();
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.log.len(), 1);

        let report = solver.play(&word("beast")).unwrap();
        assert_eq!(report.outcome, Outcome::Solved { turns: 1 });
    }

    #[test]
    fn finished_game_rejects_more_turns() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let mut state = solver.new_game();
        solver.commit(&mut state, Suggestion::external(2)).unwrap();
        solver.feedback(&mut state, Pattern::PERFECT).unwrap();

        assert_eq!(solver.suggest(&state), Err(SolverError::GameOver));
        assert_eq!(
            solver.commit(&mut state, Suggestion::external(0)),
            Err(SolverError::GameOver)
        );
    }

    #[test]
    fn every_answer_solved_and_narrowing_is_monotonic() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();

        for answer in WORDS {
            let report = solver.play(&word(answer)).unwrap();
            assert!(report.outcome.is_solved(), "{answer} not solved");
            assert_eq!(report.log.last().unwrap().guess.text(), *answer);
            for turn in &report.log {
                assert!(turn.remaining_after <= turn.remaining_before);
            }
        }
    }

    #[test]
    fn play_is_deterministic() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        for answer in WORDS {
            let a = solver.play(&word(answer)).unwrap();
            let b = solver.play(&word(answer)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn play_rejects_unknown_answer() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        assert_eq!(
            solver.play(&word("zzzzz")),
            Err(SolverError::UnknownAnswer(word("zzzzz")))
        );
    }

    #[test]
    fn play_all_isolates_failures() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let answers = [word("slate"), word("zzzzz"), word("toast")];

        let results = solver.play_all(&answers);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].as_ref().unwrap().outcome.is_solved());
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let (dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let answer = word("toast");
        let mut state = solver.new_game();

        let first = solver.next_guess(&mut state).unwrap();
        solver
            .feedback(&mut state, classify(solver.word(first.guess), &answer))
            .unwrap();
        let after_one = state.clone();

        let second = solver.next_guess(&mut state).unwrap();
        let pattern = classify(solver.word(second.guess), &answer);
        if solver.feedback(&mut state, pattern).unwrap() == Phase::AwaitingGuess {
            assert!(solver.undo(&mut state));
            assert_eq!(state, after_one);
        }

        // Undo everything, then nothing is left to undo
        while solver.undo(&mut state) {}
        assert_eq!(state, solver.new_game());
    }
}
