use thiserror::Error;

use crate::game_state::Phase;

/// Everything that can go wrong outside the pure constraint engine.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The candidate pool is empty, so there is nothing left to guess.
    #[error("no viable candidates remain")]
    NoCandidates,

    /// A driver operation was called in the wrong phase of the game.
    #[error("expected the game to be {expected:?}, but it is {found:?}")]
    UnexpectedPhase { expected: Phase, found: Phase },

    /// Feedback coming from the shell could not be parsed.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    /// A word handed in from the shell is not five ascii letters.
    #[error("\"{0}\" is not a five letter word")]
    InvalidWord(String),

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}
