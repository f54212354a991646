//! Random source for the computer opponent's fallback move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Picks one of `len` options.
///
/// The only nondeterminism in the game goes through this trait, so tests can
/// swap in a fixed choice.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seedable random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a random source with a fixed seed.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a random source seeded from the thread RNG.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = SeededRandom::new(7);
        for len in 1..10 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let seq_a: Vec<_> = (0..16).map(|_| a.pick(9)).collect();
        let seq_b: Vec<_> = (0..16).map(|_| b.pick(9)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 42);
    }
}
