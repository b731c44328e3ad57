//! Per-position feedback for a guess.
//!
//! The game marks every tile of a submitted word as `absent`, `present` or
//! `correct`. This module holds that vocabulary, the parsers the shell uses
//! to read it, and the official scoring rules used by the simulator.

use std::fmt;
use std::str::FromStr;

use crate::WORD_LENGTH;
use crate::error::SolverError;

/// Feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the word beyond the occurrences already marked (gray)
    Absent,
    /// Letter in the word, but not at this position (yellow)
    Present,
    /// Letter at exactly this position (green)
    Correct,
}

/// One feedback symbol per position of a guess.
pub type FeedbackRow = [Feedback; WORD_LENGTH];

impl Feedback {
    /// Parse a single-character shorthand (g=green, y=yellow, x/b=gray).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'x' | 'b' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => 'x',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feedback::Absent => "absent",
            Feedback::Present => "present",
            Feedback::Correct => "correct",
        }
    }
}

impl FromStr for Feedback {
    type Err = SolverError;

    /// Accepts the full evaluation names in any case, or a one-letter shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "absent" => Ok(Feedback::Absent),
            "present" => Ok(Feedback::Present),
            "correct" => Ok(Feedback::Correct),
            _ => {
                let mut chars = lower.chars();
                let symbol = match (chars.next(), chars.next()) {
                    (Some(c), None) => Feedback::from_char(c),
                    _ => None,
                };
                symbol.ok_or_else(|| SolverError::InvalidFeedback(s.to_string()))
            }
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a whole row of feedback.
///
/// Either a compact form such as `gyxxg`, or one evaluation name per
/// position separated by whitespace or commas (`absent present correct ...`).
pub fn parse_row(input: &str) -> Result<FeedbackRow, SolverError> {
    let input = input.trim();
    let symbols: Vec<Feedback> = if input.contains(|c: char| c.is_whitespace() || c == ',') {
        input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()?
    } else {
        input
            .chars()
            .map(|c| Feedback::from_char(c).ok_or_else(|| SolverError::InvalidFeedback(input.to_string())))
            .collect::<Result<_, _>>()?
    };

    symbols.try_into().map_err(|symbols: Vec<Feedback>| {
        SolverError::InvalidFeedback(format!(
            "expected {WORD_LENGTH} symbols, got {} in \"{input}\"",
            symbols.len()
        ))
    })
}

/// Render a row in the compact `gyxxg` form.
pub fn row_to_string(row: &FeedbackRow) -> String {
    row.iter().map(|f| f.to_char()).collect()
}

pub fn is_solved(row: &FeedbackRow) -> bool {
    row.iter().all(|&f| f == Feedback::Correct)
}

/// Score `guess` against `answer` the way the game does.
///
/// Greens are assigned first; the remaining letters of the answer are then
/// handed out left to right as yellows, so a repeated letter in the guess is
/// never marked more often than it occurs in the answer.
pub fn score(guess: &str, answer: &str) -> FeedbackRow {
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(answer.len(), WORD_LENGTH);

    let mut row = [Feedback::Absent; WORD_LENGTH];
    let mut unmatched = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            row[i] = Feedback::Correct;
        } else {
            unmatched[(answer[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if row[i] == Feedback::Correct {
            continue;
        }
        let idx = (guess[i] - b'a') as usize;
        if unmatched[idx] > 0 {
            row[i] = Feedback::Present;
            unmatched[idx] -= 1;
        }
    }

    row
}
