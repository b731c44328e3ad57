// Library interface for wordle-autoplay
// The binary in main.rs is a thin shell over these modules

pub mod cli;
pub mod constraint;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod matcher;
pub mod policy;
pub mod pool;
pub mod simulator;
pub mod wordbank;

/// Letters in every word of the game.
pub const WORD_LENGTH: usize = 5;

// Re-export commonly used items for easier testing
pub use constraint::{LetterConstraint, PositionSet};
pub use error::SolverError;
pub use feedback::{Feedback, FeedbackRow, parse_row, score};
pub use game_state::{Game, GameInterface, MAX_ROUNDS, Outcome, Phase, Submission};
pub use matcher::FeedbackMatcher;
pub use policy::{FixedOpening, GuessPolicy, Turn, UniformRandom, default_policy};
pub use pool::CandidatePool;
pub use simulator::SimulatedGame;
pub use wordbank::{load_embedded_wordbank, load_wordbank_from_file, load_wordbank_from_str};
