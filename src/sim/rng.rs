//! Seeded random source
//!
//! One source is owned by the gameplay state; each alien brain gets its own
//! child forked from it, so brains built in the same frame never share a seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Pcg32,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Split off an independently seeded child source
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.next_u64())
    }

    /// Raw 64-bit draw, used to seed new rounds
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform integer in `[low, high]` (inclusive)
    pub fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform integer in `[0, 99]`
    pub fn percent(&mut self) -> u32 {
        self.rng.random_range(0..100)
    }

    /// Uniform index into a collection of `len` items (`len` must be non-zero)
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Uniform angle in whole degrees, `[0, 360)`
    pub fn rotation_degrees(&mut self) -> f32 {
        self.rng.random_range(0..360u32) as f32
    }
}
