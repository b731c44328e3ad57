//! An offline stand-in for the real game.

use std::collections::HashSet;

use crate::error::SolverError;
use crate::feedback::{FeedbackRow, row_to_string, score};
use crate::game_state::{GameInterface, Submission};
use crate::info_log;
use crate::wordbank::is_valid_word;

/// Scores guesses against a known answer with the game's own rules.
///
/// Words outside `dictionary` are refused the way the real game refuses
/// them, without using up a row.
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    answer: String,
    dictionary: HashSet<String>,
    history: Vec<(String, FeedbackRow)>,
    rejected: Vec<String>,
    solved_in: Option<usize>,
}

impl SimulatedGame {
    /// The answer itself is always part of the dictionary.
    pub fn new(answer: &str, dictionary: impl IntoIterator<Item = String>) -> Result<Self, SolverError> {
        let answer = answer.trim().to_lowercase();
        if !is_valid_word(&answer) {
            return Err(SolverError::InvalidWord(answer));
        }
        let mut dictionary: HashSet<String> = dictionary.into_iter().collect();
        dictionary.insert(answer.clone());
        Ok(Self {
            answer,
            dictionary,
            history: Vec::new(),
            rejected: Vec::new(),
            solved_in: None,
        })
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Every scored guess so far, in order.
    pub fn history(&self) -> &[(String, FeedbackRow)] {
        &self.history
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Round count reported through the completion notification.
    pub fn solved_in(&self) -> Option<usize> {
        self.solved_in
    }
}

impl GameInterface for SimulatedGame {
    fn submit(&mut self, word: &str) -> Result<Submission, SolverError> {
        if !is_valid_word(word) || !self.dictionary.contains(word) {
            self.rejected.push(word.to_string());
            return Ok(Submission::NotRecognized);
        }
        let row = score(word, &self.answer);
        info_log!("simulated game scored \"{}\" as {}", word, row_to_string(&row));
        self.history.push((word.to_string(), row));
        Ok(Submission::Feedback(row))
    }

    fn game_solved(&mut self, _word: &str, rounds: usize) -> Result<(), SolverError> {
        self.solved_in = Some(rounds);
        Ok(())
    }
}
