//! Strategies for picking the next word to guess.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SolverError;
use crate::pool::CandidatePool;

/// The opening word used when none is configured.
pub const DEFAULT_OPENING: &str = "soare";

/// Where the game is when a policy is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Turn {
    /// One-based number of the round about to be played.
    pub round: usize,
    /// Words submitted so far in this game, including ones the game refused.
    pub submissions: usize,
}

/// Chooses the next word to try.
pub trait GuessPolicy {
    /// Return a word from `pool`, or fail with [`SolverError::NoCandidates`]
    /// if there is nothing to choose from.
    fn select_word(&mut self, pool: &CandidatePool, turn: Turn) -> Result<String, SolverError>;
}

impl<P: GuessPolicy + ?Sized> GuessPolicy for Box<P> {
    fn select_word(&mut self, pool: &CandidatePool, turn: Turn) -> Result<String, SolverError> {
        (**self).select_word(pool, turn)
    }
}

/// Picks uniformly at random from the pool using an injected random source.
#[derive(Debug, Clone)]
pub struct UniformRandom<R> {
    rng: R,
}

impl<R: Rng> UniformRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GuessPolicy for UniformRandom<R> {
    fn select_word(&mut self, pool: &CandidatePool, _turn: Turn) -> Result<String, SolverError> {
        pool.words()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SolverError::NoCandidates)
    }
}

/// Plays a fixed word before anything has been submitted, then defers to `then`.
///
/// The opening does not have to be in the pool. If the game refuses it, the
/// next call already counts one submission and falls through to `then`.
#[derive(Debug, Clone)]
pub struct FixedOpening<P> {
    opening: String,
    then: P,
}

impl<P: GuessPolicy> FixedOpening<P> {
    pub fn new(opening: impl Into<String>, then: P) -> Self {
        Self {
            opening: opening.into(),
            then,
        }
    }

    pub fn opening(&self) -> &str {
        &self.opening
    }
}

impl<P: GuessPolicy> GuessPolicy for FixedOpening<P> {
    fn select_word(&mut self, pool: &CandidatePool, turn: Turn) -> Result<String, SolverError> {
        if turn.submissions == 0 {
            Ok(self.opening.clone())
        } else {
            self.then.select_word(pool, turn)
        }
    }
}

/// The reference policy: open with [`DEFAULT_OPENING`], then guess at random.
pub fn default_policy<R: Rng>(rng: R) -> FixedOpening<UniformRandom<R>> {
    FixedOpening::new(DEFAULT_OPENING, UniformRandom::new(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> CandidatePool {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn turn(submissions: usize) -> Turn {
        Turn {
            round: submissions + 1,
            submissions,
        }
    }

    #[test]
    fn test_uniform_random_picks_from_pool() {
        let candidates = pool(&["crane", "slate", "raise", "stare"]);
        let mut policy = UniformRandom::new(StdRng::seed_from_u64(7));
        for i in 0..20 {
            let word = policy.select_word(&candidates, turn(i)).unwrap();
            assert!(candidates.contains(&word));
        }
    }

    #[test]
    fn test_uniform_random_is_deterministic_for_a_seed() {
        let candidates = pool(&["crane", "slate", "raise", "stare", "arise", "irate"]);
        let mut a = UniformRandom::new(StdRng::seed_from_u64(42));
        let mut b = UniformRandom::new(StdRng::seed_from_u64(42));
        for i in 0..10 {
            assert_eq!(
                a.select_word(&candidates, turn(i)).unwrap(),
                b.select_word(&candidates, turn(i)).unwrap()
            );
        }
    }

    #[test]
    fn test_uniform_random_empty_pool() {
        let mut policy = UniformRandom::new(StdRng::seed_from_u64(1));
        let result = policy.select_word(&CandidatePool::default(), turn(1));
        assert!(matches!(result, Err(SolverError::NoCandidates)));
    }

    #[test]
    fn test_fixed_opening_first_then_delegates() {
        let candidates = pool(&["crane"]);
        let mut policy = default_policy(StdRng::seed_from_u64(3));
        assert_eq!(policy.opening(), "soare");
        assert_eq!(policy.select_word(&candidates, turn(0)).unwrap(), "soare");
        assert_eq!(policy.select_word(&candidates, turn(1)).unwrap(), "crane");
        assert_eq!(policy.select_word(&candidates, turn(2)).unwrap(), "crane");
    }

    #[test]
    fn test_fixed_opening_ignores_empty_pool_on_first_call() {
        let mut policy = FixedOpening::new("arise", UniformRandom::new(StdRng::seed_from_u64(3)));
        let empty = CandidatePool::default();
        assert_eq!(policy.select_word(&empty, turn(0)).unwrap(), "arise");
        assert!(policy.select_word(&empty, turn(1)).is_err());
    }

    #[test]
    fn test_boxed_policy() {
        let mut policy: Box<dyn GuessPolicy> = Box::new(default_policy(StdRng::seed_from_u64(3)));
        assert_eq!(policy.select_word(&pool(&["crane"]), turn(0)).unwrap(), "soare");
    }
}
