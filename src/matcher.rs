//! The running set of letter constraints for one game.

use crate::constraint::LetterConstraint;
use crate::debug_log;
use crate::feedback::FeedbackRow;
use crate::WORD_LENGTH;

const ALPHABET: usize = 26;

fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Accepts exactly the words consistent with every guess folded into it.
///
/// Constraints are stored in a table indexed by letter. A letter that has
/// never been guessed has no entry and places no restriction on a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackMatcher {
    letters: [Option<LetterConstraint>; ALPHABET],
}

impl FeedbackMatcher {
    /// A matcher with no constraints; it accepts every word.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_guess(guess: &str, feedback: &FeedbackRow) -> Self {
        Self::new().extend(guess, feedback)
    }

    /// Return a new matcher that also honours `guess` scored as `feedback`.
    ///
    /// All occurrences of a letter in this guess are folded together first,
    /// then intersected with what earlier guesses established.
    ///
    /// # Panics
    ///
    /// If `guess` is not [`WORD_LENGTH`] lowercase ascii letters.
    #[must_use]
    pub fn extend(&self, guess: &str, feedback: &FeedbackRow) -> Self {
        assert!(
            guess.len() == WORD_LENGTH && guess.bytes().all(|b| b.is_ascii_lowercase()),
            "guess \"{guess}\" is not a {WORD_LENGTH} letter lowercase word"
        );

        let mut this_guess: [Option<LetterConstraint>; ALPHABET] = [None; ALPHABET];
        for (position, (letter, &symbol)) in guess.bytes().zip(feedback.iter()).enumerate() {
            let entry = &mut this_guess[slot(letter)];
            let base = entry.unwrap_or_else(|| LetterConstraint::new(letter as char));
            *entry = Some(base.apply(symbol, position));
        }

        let mut letters = self.letters;
        for (merged, new) in letters.iter_mut().zip(this_guess) {
            if let Some(new) = new {
                *merged = Some(match *merged {
                    Some(previous) => previous.intersect(new),
                    None => new,
                });
            }
        }

        let extended = Self { letters };
        debug_log!("constraints after \"{}\": {}", guess, extended.describe());
        extended
    }

    /// True iff `word` satisfies every stored letter constraint.
    pub fn accepts(&self, word: &str) -> bool {
        word.len() == WORD_LENGTH && self.constraints().all(|c| c.accepts(word))
    }

    pub fn constraint(&self, letter: char) -> Option<&LetterConstraint> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.letters[slot(letter as u8)].as_ref()
    }

    pub fn constraints(&self) -> impl Iterator<Item = &LetterConstraint> {
        self.letters.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }

    /// One line summary of every constraint, used for logging.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self.constraints().map(ToString::to_string).collect();
        parts.join("; ")
    }
}
