//! Trace-keeping sources for replaying exact draw sequences in tests.

use crate::UniformSource;

/// Forwards draws from an inner source and records each one.
pub struct RecordingUniform<U> {
    inner: U,
    trace: Vec<f64>,
}

impl<U: UniformSource> RecordingUniform<U> {
    pub fn new(inner: U) -> Self {
        Self {
            inner,
            trace: Vec::new(),
        }
    }

    /// Every value returned so far, in draw order
    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Forget the recorded draws, keeping the inner stream position
    pub fn clear(&mut self) {
        self.trace.clear();
    }

    pub fn into_parts(self) -> (U, Vec<f64>) {
        (self.inner, self.trace)
    }
}

impl<U: UniformSource> UniformSource for RecordingUniform<U> {
    #[inline]
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        let u = self.inner.next_uniform(low, high);
        self.trace.push(u);
        u
    }
}

/// Returns the values of a fixed trace verbatim. The requested range is only
/// checked in debug builds. Panics once a non-cycling trace is exhausted.
pub struct ReplayUniform {
    draws: Vec<f64>,
    pos: usize,
    cycle: bool,
}

impl ReplayUniform {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
            cycle: false,
        }
    }

    /// Replay `draws` forever
    pub fn cycle(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "cannot cycle an empty trace");
        Self {
            draws,
            pos: 0,
            cycle: true,
        }
    }

    /// Number of draws handed out so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        if self.cycle {
            usize::MAX
        } else {
            self.draws.len() - self.pos
        }
    }
}

impl UniformSource for ReplayUniform {
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        let idx = if self.cycle {
            self.pos % self.draws.len()
        } else {
            self.pos
        };
        let Some(&u) = self.draws.get(idx) else {
            panic!(
                "replay trace exhausted after {} draws",
                self.draws.len()
            );
        };
        debug_assert!(
            u > low && u < high,
            "replayed draw {} outside ({}, {})",
            u,
            low,
            high
        );
        self.pos += 1;
        u
    }
}
