//! Benchmark configuration.

use crate::{consts::DEFAULT_SAMPLES, error::ConfigError};
use uniform_rs::DEFAULT_SEED;

/// Immutable benchmark parameters. Use [`BenchConfig::builder`] to construct.
///
/// ```rust
/// use normvar_rs::BenchConfig;
///
/// let config = BenchConfig::builder()
///     .samples(10_000)
///     .seed(7)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.samples(), 10_000);
/// assert_eq!(config.max_attempts(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    samples: usize,
    seed: u64,
    max_attempts: Option<usize>,
}

impl BenchConfig {
    #[inline]
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Variates requested per algorithm.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-call cap on rejected proposals, if any.
    #[inline]
    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// # Errors
    ///
    /// - `samples` is 0
    /// - `max_attempts` is `Some(0)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSampleCount(self.samples));
        }
        if self.max_attempts == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_attempts",
                value: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            max_attempts: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BenchConfigBuilder {
    samples: Option<usize>,
    seed: Option<u64>,
    max_attempts: Option<usize>,
}

impl BenchConfigBuilder {
    #[inline]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Unset fields take their defaults.
    pub fn build(self) -> Result<BenchConfig, ConfigError> {
        let config = BenchConfig {
            samples: self.samples.unwrap_or(DEFAULT_SAMPLES),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            max_attempts: self.max_attempts,
        };
        config.validate()?;
        Ok(config)
    }
}
