//! Seeded RNG for synthetic input generation.
//!
//! The scheduler never draws random numbers.  Randomness only enters
//! through the arrival generator, and a given seed maps to the same
//! arrivals for a fixed `rand` version.
//!
//! Replicates of one scenario (same config, different draws) are seeded as
//!
//!   seed = base_seed XOR (replicate * GOLDEN_GAMMA)
//!
//! so replicate `0` reproduces the plain `SimRng::new(base_seed)` stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Fractional part of the golden ratio as a 64-bit fixed-point value.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// RNG for building one input set.  Not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Stream for the `replicate`-th independent draw of a scenario.
    pub fn for_replicate(base_seed: u64, replicate: u64) -> Self {
        Self::new(base_seed ^ replicate.wrapping_mul(GOLDEN_GAMMA))
    }

    /// Uniform draw from a half-open or closed range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
