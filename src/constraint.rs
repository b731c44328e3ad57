//! Everything known about a single letter.
//!
//! A [`LetterConstraint`] is an immutable value. New evidence never mutates
//! an existing constraint; it produces a new, tighter one.

use std::fmt;

use crate::WORD_LENGTH;
use crate::feedback::Feedback;

/// A set of zero-based positions within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub fn with(self, position: usize) -> Self {
        assert!(
            position < WORD_LENGTH,
            "position {position} is outside a {WORD_LENGTH} letter word"
        );
        Self(self.0 | 1 << position)
    }

    pub fn contains(self, position: usize) -> bool {
        position < WORD_LENGTH && self.0 & (1 << position) != 0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&p| self.contains(p))
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        write!(f, "{{{}}}", positions.join(","))
    }
}

/// Count bounds and position knowledge for one letter.
///
/// `max_count` of `None` means the upper bound is still unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterConstraint {
    letter: u8,
    min_count: u8,
    max_count: Option<u8>,
    required: PositionSet,
    forbidden: PositionSet,
}

impl LetterConstraint {
    /// The unconstrained state for `letter`: any count, any position.
    pub fn new(letter: char) -> Self {
        assert!(letter.is_ascii_lowercase(), "'{letter}' is not a lowercase ascii letter");
        Self {
            letter: letter as u8,
            min_count: 0,
            max_count: None,
            required: PositionSet::EMPTY,
            forbidden: PositionSet::EMPTY,
        }
    }

    pub fn letter(&self) -> char {
        self.letter as char
    }

    pub fn min_count(&self) -> u8 {
        self.min_count
    }

    pub fn max_count(&self) -> Option<u8> {
        self.max_count
    }

    pub fn required(&self) -> PositionSet {
        self.required
    }

    pub fn forbidden(&self) -> PositionSet {
        self.forbidden
    }

    /// Fold one feedback symbol for an occurrence of this letter at `position`.
    ///
    /// `Absent` pins the maximum to the occurrences counted so far in this
    /// guess. Because later `Present`/`Correct` marks raise a pinned maximum
    /// together with the minimum, the result for one guess does not depend on
    /// the order its occurrences are folded in.
    #[must_use]
    pub fn apply(self, symbol: Feedback, position: usize) -> Self {
        match symbol {
            Feedback::Absent => Self {
                max_count: Some(self.min_count),
                ..self
            },
            Feedback::Present => Self {
                forbidden: self.forbidden.with(position),
                ..self.one_more()
            },
            Feedback::Correct => Self {
                required: self.required.with(position),
                ..self.one_more()
            },
        }
    }

    fn one_more(self) -> Self {
        Self {
            min_count: self.min_count + 1,
            max_count: self.max_count.map(|max| max + 1),
            ..self
        }
    }

    /// Combine the knowledge of two constraints on the same letter.
    ///
    /// Counts are never added across guesses: the tighter bound of each side
    /// wins and the position sets are merged.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        debug_assert_eq!(self.letter, other.letter);
        let max_count = match (self.max_count, other.max_count) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self {
            letter: self.letter,
            min_count: self.min_count.max(other.min_count),
            max_count,
            required: self.required.union(other.required),
            forbidden: self.forbidden.union(other.forbidden),
        }
    }

    /// True when `word` satisfies the count bounds and every position rule.
    pub fn accepts(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let count = bytes.iter().filter(|&&b| b == self.letter).count();

        count >= usize::from(self.min_count)
            && self.max_count.is_none_or(|max| count <= usize::from(max))
            && self.required.iter().all(|p| bytes.get(p) == Some(&self.letter))
            && self.forbidden.iter().all(|p| bytes.get(p) != Some(&self.letter))
    }

    /// False once contradictory feedback has made this letter unsatisfiable.
    pub fn is_consistent(&self) -> bool {
        self.required.is_disjoint(self.forbidden)
            && self.max_count.is_none_or(|max| self.min_count <= max)
            && self.max_count.is_none_or(|max| self.required.len() <= usize::from(max))
    }
}

impl fmt::Display for LetterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_count {
            Some(max) => write!(f, "{}: {}..={}", self.letter(), self.min_count, max)?,
            None => write!(f, "{}: {}..", self.letter(), self.min_count)?,
        }
        if !self.required.is_empty() {
            write!(f, " at {}", self.required)?;
        }
        if !self.forbidden.is_empty() {
            write!(f, " not at {}", self.forbidden)?;
        }
        Ok(())
    }
}
