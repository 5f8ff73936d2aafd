//! Throughput harness.
//!
//! Runs each [`Algorithm`] for the configured number of variates, strictly one
//! after another on a single uniform stream, and ranks them by wall-clock time.
//! Only the ordering is expected to be stable between runs; the durations
//! themselves are not reproducible.

use crate::{
    config::BenchConfig,
    error::{ConfigError, HarnessError, SampleError},
    sampler::Algorithm,
};
use std::{
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};
use uniform_rs::{SeededUniform, UniformSource};

/// Elapsed time for one algorithm's full run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmResult {
    algorithm: Algorithm,
    elapsed: Duration,
}

impl AlgorithmResult {
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Results ordered by ascending elapsed time. Ties keep run order.
#[derive(Clone, Debug)]
pub struct Ranking {
    results: Vec<AlgorithmResult>,
}

impl Ranking {
    pub fn new(mut results: Vec<AlgorithmResult>) -> Self {
        results.sort_by_key(|r| r.elapsed);
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmResult> {
        self.results.iter()
    }

    pub fn fastest(&self) -> Option<&AlgorithmResult> {
        self.results.first()
    }

    pub fn slowest(&self) -> Option<&AlgorithmResult> {
        self.results.last()
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.name() == name)
    }

    /// `(name, seconds)` pairs in rank order.
    pub fn to_secs(&self) -> Vec<(&'static str, f64)> {
        self.results.iter().map(|r| (r.name(), r.secs())).collect()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a AlgorithmResult;
    type IntoIter = std::slice::Iter<'a, AlgorithmResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.results.iter().enumerate() {
            writeln!(f, "{}. {:<14} {:.6} s", i + 1, r.name(), r.secs())?;
        }
        Ok(())
    }
}

pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Time all four algorithms on one stream seeded from the config.
    pub fn run(&self) -> Result<Ranking, HarnessError> {
        let mut src = SeededUniform::new(self.config.seed());
        let results = Algorithm::ALL
            .into_iter()
            .map(|algorithm| self.run_algorithm(algorithm, &mut src))
            .collect::<Result<Vec<_>, _>>()?;
        let ranking = Ranking::new(results);
        if let Some(best) = ranking.fastest() {
            tracing::info!(fastest = %best.name(), secs = best.secs(), "benchmark complete");
        }
        Ok(ranking)
    }

    /// Time one algorithm on a caller-supplied stream. Variates are discarded.
    pub fn run_algorithm<U: UniformSource + ?Sized>(
        &self,
        algorithm: Algorithm,
        src: &mut U,
    ) -> Result<AlgorithmResult, SampleError> {
        let n = self.config.samples();
        tracing::debug!(
            algorithm = %algorithm,
            samples = n,
            calls = algorithm.invocations(n),
            "starting run"
        );

        let start = Instant::now();
        algorithm.drive(src, n, self.config.max_attempts(), |x| {
            black_box(x);
        })?;
        let elapsed = start.elapsed();

        tracing::info!(algorithm = %algorithm, secs = elapsed.as_secs_f64(), "run complete");
        Ok(AlgorithmResult { algorithm, elapsed })
    }

    /// The variates `algorithm` produces from a fresh stream on the
    /// configured seed.
    pub fn generate(&self, algorithm: Algorithm) -> Result<Vec<f64>, SampleError> {
        let mut src = SeededUniform::new(self.config.seed());
        self.generate_from(algorithm, &mut src)
    }

    pub fn generate_from<U: UniformSource + ?Sized>(
        &self,
        algorithm: Algorithm,
        src: &mut U,
    ) -> Result<Vec<f64>, SampleError> {
        let n = self.config.samples();
        let mut out = Vec::with_capacity(algorithm.variates(n));
        algorithm.drive(src, n, self.config.max_attempts(), |x| out.push(x))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniform_rs::ReplayUniform;

    fn result(algorithm: Algorithm, ms: u64) -> AlgorithmResult {
        AlgorithmResult {
            algorithm,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_ranking_sorted() {
        let ranking = Ranking::new(vec![
            result(Algorithm::BoxMuller, 30),
            result(Algorithm::Polar, 40),
            result(Algorithm::InverseCdf, 10),
            result(Algorithm::AcceptReject, 90),
        ]);
        let names: Vec<_> = ranking.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["inverse_cdf", "box_muller", "polar", "accept_reject"]);
        assert_eq!(ranking.fastest().unwrap().algorithm(), Algorithm::InverseCdf);
        assert_eq!(ranking.slowest().unwrap().algorithm(), Algorithm::AcceptReject);
        assert_eq!(ranking.get("polar").unwrap().elapsed(), Duration::from_millis(40));
        assert!(ranking.get("ziggurat").is_none());
    }

    #[test]
    fn test_ranking_ties_keep_order() {
        let ranking = Ranking::new(vec![
            result(Algorithm::Polar, 5),
            result(Algorithm::BoxMuller, 5),
        ]);
        assert_eq!(
            ranking.to_secs(),
            vec![("polar", 0.005), ("box_muller", 0.005)]
        );
    }

    #[test]
    fn test_ranking_display() {
        let ranking = Ranking::new(vec![result(Algorithm::InverseCdf, 1500)]);
        assert_eq!(ranking.to_string(), "1. inverse_cdf    1.500000 s\n");
    }

    #[test]
    fn test_new_validates() {
        let config = BenchConfig::default();
        assert!(Harness::new(config).is_ok());
    }

    #[test]
    fn test_cap_error_propagates() {
        let config = BenchConfig::builder()
            .samples(2)
            .max_attempts(3)
            .build()
            .unwrap();
        let harness = Harness::new(config).unwrap();
        let mut src = ReplayUniform::cycle(vec![0.9, 0.9]);
        let err = harness.run_algorithm(Algorithm::Polar, &mut src).unwrap_err();
        assert_eq!(
            err,
            SampleError::RejectionCapExceeded {
                algorithm: "polar",
                attempts: 3
            }
        );
    }

    #[test]
    fn test_generate_small() {
        let config = BenchConfig::builder().samples(9).build().unwrap();
        let harness = Harness::new(config).unwrap();
        assert_eq!(harness.generate(Algorithm::BoxMuller).unwrap().len(), 8);
        assert_eq!(harness.generate(Algorithm::AcceptReject).unwrap().len(), 9);
    }
}
