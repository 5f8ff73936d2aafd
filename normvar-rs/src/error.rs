//! Error types for generator configuration and capped rejection loops.

use thiserror::Error;

/// A capped rejection sampler gave up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Every one of `attempts` consecutive proposals was rejected.
    #[error("{algorithm} rejected {attempts} consecutive proposals")]
    RejectionCapExceeded {
        algorithm: &'static str,
        attempts: usize,
    },
}

/// Invalid benchmark configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sample count must be at least 1.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: String },
}

/// Fatal harness failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sample(#[from] SampleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = ConfigError::InvalidParameter {
            name: "max_attempts",
            value: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("max_attempts"));

        let err = SampleError::RejectionCapExceeded {
            algorithm: "polar",
            attempts: 10,
        };
        assert_eq!(err.to_string(), "polar rejected 10 consecutive proposals");
    }

    #[test]
    fn test_harness_error_is_transparent() {
        let err: HarnessError = ConfigError::InvalidSampleCount(0).into();
        assert_eq!(
            err.to_string(),
            ConfigError::InvalidSampleCount(0).to_string()
        );
        assert!(matches!(err, HarnessError::Config(_)));
    }
}
