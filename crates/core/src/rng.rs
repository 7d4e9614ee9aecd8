//! RNG module - tile placement randomness
//!
//! Every spawn makes exactly one uniform draw over the precomputed list of empty
//! cells, so the generator only has to answer "pick an index below `len`".
//! Games are seeded so the same seed and the same moves replay identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable generator used for tile placement
#[derive(Debug, Clone)]
pub struct TileRng {
    seed: u64,
    rng: SmallRng,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `[0, len)`; `None` when `len` is 0.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
