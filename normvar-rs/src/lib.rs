//! # Normvar: four standard-normal generators and a throughput harness
//!
//! - [`boxmuller`]: Box-Muller transform, two variates per two draws.
//! - [`polar`]: Marsaglia-Bray polar method, rejection on the unit disc.
//! - [`inverse`]: Beasley-Springer-Moro inverse CDF, one draw per variate.
//! - [`rejection`]: acceptance-rejection with a Laplace proposal.
//!
//! Every generator is a free function over a borrowed [`UniformSource`]; the
//! [`Harness`] owns the seeded stream for a run and ranks the four algorithms
//! by elapsed time.
//!
//! ```rust
//! use normvar_rs::{BenchConfig, Harness};
//!
//! let config = BenchConfig::builder().samples(1_000).seed(123).build()?;
//! let ranking = Harness::new(config)?.run()?;
//! assert_eq!(ranking.len(), 4);
//! # Ok::<(), normvar_rs::HarnessError>(())
//! ```

pub mod boxmuller;
pub mod config;
pub mod consts;
pub mod error;
pub mod harness;
pub mod inverse;
pub mod polar;
pub mod rejection;
pub mod sampler;

pub use config::{BenchConfig, BenchConfigBuilder};
pub use error::{ConfigError, HarnessError, SampleError};
pub use harness::{AlgorithmResult, Harness, Ranking};
pub use sampler::Algorithm;
pub use uniform_rs::{SeededUniform, UniformSource};

/// Run the full benchmark for `samples` variates per algorithm on `seed`.
pub fn benchmark(samples: usize, seed: u64) -> Result<Ranking, HarnessError> {
    let config = BenchConfig::builder().samples(samples).seed(seed).build()?;
    Harness::new(config)?.run()
}
