//! RNG module - deck shuffling
//!
//! Wraps a seedable `StdRng` and exposes a non-mutating shuffle: the input
//! slice is copied and the copy is permuted with Fisher-Yates
//! (`SliceRandom::shuffle`), so every arrangement is equally likely.
//!
//! Seeded shufflers are deterministic, which tests and `MEMORY_SEED` rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniform shuffler for card arrangements
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Shuffler {
    /// Create a shuffler seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Create a deterministic shuffler with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed this shuffler was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Return a uniformly random permutation of `items`.
    ///
    /// The input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.rng);
        out
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::from_entropy()
    }
}
