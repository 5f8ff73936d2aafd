use crate::UniformSource;
use rand::{Rng, SeedableRng, distr::Open01, rngs::StdRng};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 123;

/// Reproducible uniform stream seeded once at construction.
pub struct SeededUniform {
    rng: StdRng,
    seed: u64,
}

impl SeededUniform {
    /// Create a new stream with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created (or last reseeded) with
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from its seed
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

impl UniformSource for SeededUniform {
    /// `Open01` never yields 0 or 1, and the affine map onto `(0, 1)` or
    /// `(-1, 1)` is exact in `f64`, so neither endpoint can appear.
    #[inline]
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        let u: f64 = self.rng.sample(Open01);
        low + (high - low) * u
    }
}

impl Default for SeededUniform {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
