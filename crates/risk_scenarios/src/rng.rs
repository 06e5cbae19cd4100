//! Seeded random number generator for scenario sampling.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Seeded PRNG wrapper used to pick sample rows.
///
/// The same seed always yields the same sequence, within a process and
/// across restarts, for a fixed `rand` version.
pub struct SamplingRng {
    inner: StdRng,
    seed: u64,
}

impl SamplingRng {
    /// Creates a new RNG initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `amount` distinct row positions from `0..population`.
    ///
    /// Positions are returned in draw order. `amount` is clamped to
    /// `population`.
    pub fn choose_rows(&mut self, population: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.inner, population, amount.min(population)).into_vec()
    }
}
