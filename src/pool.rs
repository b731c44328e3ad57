use crate::matcher::FeedbackMatcher;

/// The words that are still possible answers, in their original load order.
///
/// A pool is never changed in place; [`filter`](CandidatePool::filter) and
/// [`remove_exact`](CandidatePool::remove_exact) return a new pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<String>,
}

impl CandidatePool {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Keep only the words `matcher` accepts. May return an empty pool.
    #[must_use]
    pub fn filter(&self, matcher: &FeedbackMatcher) -> Self {
        self.words
            .iter()
            .filter(|word| matcher.accepts(word))
            .cloned()
            .collect()
    }

    /// Drop every occurrence of `word`, e.g. after the game refused it.
    #[must_use]
    pub fn remove_exact(&self, word: &str) -> Self {
        self.words.iter().filter(|w| *w != word).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl From<Vec<String>> for CandidatePool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<String> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
