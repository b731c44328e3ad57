//! The game loop driver.
//!
//! [`Game`] owns one game's candidate pool and running matcher. It asks a
//! [`GuessPolicy`] for words and hands them to a [`GameInterface`], which
//! stands for whatever actually plays the game: a person at a browser, a
//! simulator, or a scripted fake in tests.
//!
//! # State machine
//! `AwaitingGuess` → `AwaitingFeedback` → back to `AwaitingGuess`, until one
//! of the terminal phases `Solved`, `Exhausted` or `Stalled` is reached.

use crate::error::SolverError;
use crate::feedback::{FeedbackRow, is_solved, row_to_string};
use crate::matcher::FeedbackMatcher;
use crate::policy::{GuessPolicy, Turn};
use crate::pool::CandidatePool;
use crate::{debug_log, info_log};

/// Scored rounds allowed per game.
pub const MAX_ROUNDS: usize = 6;

/// What the game said about a submitted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The game does not know the word; nothing was scored.
    NotRecognized,
    Feedback(FeedbackRow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    AwaitingFeedback,
    /// Terminal: the last guess was all correct.
    Solved,
    /// Terminal: every round was used without solving.
    Exhausted,
    /// Terminal: no candidate is consistent with the feedback.
    Stalled,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Solved | Phase::Exhausted | Phase::Stalled)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { word: String, rounds: usize },
    Exhausted { rounds: usize, remaining: usize },
    NoCandidates { rounds: usize },
}

/// The collaborator that submits words to the real game.
///
/// Only [`submit`](GameInterface::submit) and
/// [`game_solved`](GameInterface::game_solved) are required; the other hooks
/// exist so a shell can report progress.
pub trait GameInterface {
    fn submit(&mut self, word: &str) -> Result<Submission, SolverError>;

    /// Called once, when a guess comes back all correct.
    fn game_solved(&mut self, word: &str, rounds: usize) -> Result<(), SolverError>;

    fn word_rejected(&mut self, _word: &str) {}

    fn round_scored(&mut self, _round: usize, _word: &str, _feedback: &FeedbackRow, _remaining: usize) {}

    fn game_exhausted(&mut self, _rounds: usize, _remaining: usize) {}

    fn game_stalled(&mut self, _rounds: usize) {}
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct Game<P> {
    pool: CandidatePool,
    matcher: FeedbackMatcher,
    policy: P,
    phase: Phase,
    last_guess: Option<String>,
    round: usize,
    submissions: usize,
    max_rounds: usize,
}

impl<P: GuessPolicy> Game<P> {
    /// Start a game over the full word list with no constraints.
    pub fn new(words: impl Into<CandidatePool>, policy: P) -> Self {
        Self {
            pool: words.into(),
            matcher: FeedbackMatcher::new(),
            policy,
            phase: Phase::AwaitingGuess,
            last_guess: None,
            round: 0,
            submissions: 0,
            max_rounds: MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(self, max_rounds: usize) -> Self {
        Self { max_rounds, ..self }
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn matcher(&self) -> &FeedbackMatcher {
        &self.matcher
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Scored rounds played so far.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn last_guess(&self) -> Option<&str> {
        self.last_guess.as_deref()
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SolverError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SolverError::UnexpectedPhase {
                expected,
                found: self.phase,
            })
        }
    }

    /// Ask the policy for the next word to submit.
    ///
    /// With an empty pool the policy is not consulted: the game moves to
    /// [`Phase::Stalled`] and [`SolverError::NoCandidates`] is returned.
    pub fn next_guess(&mut self) -> Result<String, SolverError> {
        self.expect_phase(Phase::AwaitingGuess)?;
        if self.pool.is_empty() {
            self.phase = Phase::Stalled;
            return Err(SolverError::NoCandidates);
        }

        let turn = Turn {
            round: self.round + 1,
            submissions: self.submissions,
        };
        let word = match self.policy.select_word(&self.pool, turn) {
            Ok(word) => word,
            Err(SolverError::NoCandidates) => {
                self.phase = Phase::Stalled;
                return Err(SolverError::NoCandidates);
            }
            Err(e) => return Err(e),
        };

        info_log!(
            "round {}: guessing \"{}\" from {} candidates",
            turn.round,
            word,
            self.pool.len()
        );
        self.submissions += 1;
        self.last_guess = Some(word.clone());
        self.phase = Phase::AwaitingFeedback;
        Ok(word)
    }

    /// Feed the game's answer for the pending guess back in.
    pub fn record(&mut self, submission: Submission) -> Result<Phase, SolverError> {
        self.expect_phase(Phase::AwaitingFeedback)?;
        let Some(word) = self.last_guess.clone() else {
            return Err(SolverError::UnexpectedPhase {
                expected: Phase::AwaitingGuess,
                found: self.phase,
            });
        };

        match submission {
            Submission::NotRecognized => {
                info_log!("\"{}\" was not recognized, dropping it", word);
                self.pool = self.pool.remove_exact(&word);
                self.phase = Phase::AwaitingGuess;
            }
            Submission::Feedback(row) => {
                self.round += 1;
                self.matcher = self.matcher.extend(&word, &row);
                if is_solved(&row) {
                    self.phase = Phase::Solved;
                } else {
                    self.pool = self.pool.filter(&self.matcher);
                    debug_log!(
                        "\"{}\" scored {}, {} candidates remain",
                        word,
                        row_to_string(&row),
                        self.pool.len()
                    );
                    self.phase = if self.round >= self.max_rounds {
                        Phase::Exhausted
                    } else {
                        Phase::AwaitingGuess
                    };
                }
            }
        }
        Ok(self.phase)
    }

    /// The outcome of a finished game, or `None` while it is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Solved => Some(Outcome::Solved {
                word: self.last_guess.clone().unwrap_or_default(),
                rounds: self.round,
            }),
            Phase::Exhausted => Some(Outcome::Exhausted {
                rounds: self.round,
                remaining: self.pool.len(),
            }),
            Phase::Stalled => Some(Outcome::NoCandidates { rounds: self.round }),
            Phase::AwaitingGuess | Phase::AwaitingFeedback => None,
        }
    }

    /// Play until the game is solved, out of rounds, or out of candidates.
    ///
    /// Only errors raised by `interface` (or by the policy) are returned as
    /// `Err`; running out of rounds or candidates is an [`Outcome`].
    pub fn play<I: GameInterface + ?Sized>(&mut self, interface: &mut I) -> Result<Outcome, SolverError> {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }
        self.expect_phase(Phase::AwaitingGuess)?;

        loop {
            let word = match self.next_guess() {
                Ok(word) => word,
                Err(SolverError::NoCandidates) => {
                    info_log!("no candidates remain after {} rounds", self.round);
                    interface.game_stalled(self.round);
                    return Ok(Outcome::NoCandidates { rounds: self.round });
                }
                Err(e) => return Err(e),
            };

            let submission = interface.submit(&word)?;
            let phase = self.record(submission)?;
            match submission {
                Submission::NotRecognized => interface.word_rejected(&word),
                Submission::Feedback(row) => {
                    interface.round_scored(self.round, &word, &row, self.pool.len())
                }
            }

            match phase {
                Phase::Solved => {
                    info_log!("solved \"{}\" in {} rounds", word, self.round);
                    interface.game_solved(&word, self.round)?;
                    return Ok(Outcome::Solved {
                        word,
                        rounds: self.round,
                    });
                }
                Phase::Exhausted => {
                    info_log!("out of rounds with {} candidates left", self.pool.len());
                    interface.game_exhausted(self.round, self.pool.len());
                    return Ok(Outcome::Exhausted {
                        rounds: self.round,
                        remaining: self.pool.len(),
                    });
                }
                Phase::AwaitingGuess | Phase::AwaitingFeedback | Phase::Stalled => {}
            }
        }
    }
}
