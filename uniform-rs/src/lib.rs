//! # Uniform: seeded streams of open-interval uniform draws
//!
//! Every normal-variate generator in this workspace consumes uniform draws
//! through the [`UniformSource`] trait. The stream is an explicit value owned
//! by the caller and lent to each generator call by `&mut` reference, so there
//! is no hidden process-wide seed.
//!
//! ## Open intervals
//!
//! Draws are taken from the *open* interval `(low, high)`. For the two ranges
//! the generators use, `(0, 1)` and `(-1, 1)`, the endpoints are never
//! returned, which keeps `ln(u)` finite for every draw.
//!
//! ## Sources
//!
//! - [`SeededUniform`]: the production stream, backed by `rand`'s `StdRng`.
//! - [`RecordingUniform`]: forwards to another source and keeps a trace of
//!   every value it handed out.
//! - [`ReplayUniform`]: plays back a fixed trace, for exact-input tests.

mod seeded;
mod trace;

pub use seeded::{DEFAULT_SEED, SeededUniform};
pub use trace::{RecordingUniform, ReplayUniform};

/// A sequential stream of uniform draws.
pub trait UniformSource {
    /// Draw from the open interval `(low, high)`.
    fn next_uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw from `(0, 1)`
    #[inline]
    fn unit(&mut self) -> f64 {
        self.next_uniform(0.0, 1.0)
    }

    /// Draw from `(-1, 1)`
    #[inline]
    fn symmetric(&mut self) -> f64 {
        self.next_uniform(-1.0, 1.0)
    }
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    #[inline]
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).next_uniform(low, high)
    }
}
