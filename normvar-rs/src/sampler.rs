use crate::{boxmuller, error::ConfigError, error::SampleError, inverse, polar, rejection};
use std::{fmt, str::FromStr};
use uniform_rs::UniformSource;

/// The four standard-normal generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BoxMuller,
    Polar,
    InverseCdf,
    AcceptReject,
}

impl Algorithm {
    /// Run order used by the harness.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BoxMuller,
        Algorithm::Polar,
        Algorithm::InverseCdf,
        Algorithm::AcceptReject,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoxMuller => boxmuller::NAME,
            Algorithm::Polar => polar::NAME,
            Algorithm::InverseCdf => inverse::NAME,
            Algorithm::AcceptReject => rejection::NAME,
        }
    }

    /// Whether one call yields two variates.
    pub fn yields_pairs(self) -> bool {
        matches!(self, Algorithm::BoxMuller | Algorithm::Polar)
    }

    /// Generator calls needed for `n` requested variates. Pair generators
    /// round down, dropping an odd remainder.
    pub fn invocations(self, n: usize) -> usize {
        if self.yields_pairs() { n / 2 } else { n }
    }

    /// Variates actually produced for `n` requested.
    pub fn variates(self, n: usize) -> usize {
        if self.yields_pairs() { n / 2 * 2 } else { n }
    }

    /// Produce the variates for `n` requested, handing each to `sink`.
    ///
    /// With `max_attempts` set, the rejection generators fail instead of
    /// looping past that many rejected proposals for a single call.
    pub fn drive<U, F>(
        self,
        src: &mut U,
        n: usize,
        max_attempts: Option<usize>,
        mut sink: F,
    ) -> Result<(), SampleError>
    where
        U: UniformSource + ?Sized,
        F: FnMut(f64),
    {
        let calls = self.invocations(n);
        match (self, max_attempts) {
            (Algorithm::BoxMuller, _) => {
                for _ in 0..calls {
                    let (z1, z2) = boxmuller::pair(src);
                    sink(z1);
                    sink(z2);
                }
            }
            (Algorithm::Polar, None) => {
                for _ in 0..calls {
                    let (x, y) = polar::pair(src);
                    sink(x);
                    sink(y);
                }
            }
            (Algorithm::Polar, Some(cap)) => {
                for _ in 0..calls {
                    let (x, y) = polar::try_pair(src, cap)?;
                    sink(x);
                    sink(y);
                }
            }
            (Algorithm::InverseCdf, _) => {
                for _ in 0..calls {
                    sink(inverse::sample(src));
                }
            }
            (Algorithm::AcceptReject, None) => {
                for _ in 0..calls {
                    sink(rejection::sample(src));
                }
            }
            (Algorithm::AcceptReject, Some(cap)) => {
                for _ in 0..calls {
                    sink(rejection::try_sample(src, cap)?);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ConfigError::InvalidParameter {
                name: "algorithm",
                value: format!("unknown algorithm '{}'", s),
            })
    }
}
