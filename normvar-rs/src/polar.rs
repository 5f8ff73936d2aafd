//! Marsaglia-Bray polar method.
//!
//! Rejection on the unit disc, no trigonometry. The number of uniform draws
//! per pair is unbounded (expected 2 / (pi / 4) ~ 2.55), so this method cannot
//! be driven by a quasi-random sequence that needs a fixed draw count.

use crate::error::SampleError;
use uniform_rs::UniformSource;

pub const NAME: &str = "polar";

/// One draw-test step on a point of the square `(-1, 1)^2`.
///
/// Returns `None` outside the unit disc and at the origin, where `ln(s) / s`
/// is undefined.
#[inline]
pub fn accept(u1: f64, u2: f64) -> Option<(f64, f64)> {
    let s = u1 * u1 + u2 * u2;
    if s > 1.0 || s == 0.0 {
        return None;
    }
    let w = ((-2.0 * s.ln()) / s).sqrt();
    Some((u1 * w, u2 * w))
}

#[inline]
pub fn pair<U: UniformSource + ?Sized>(src: &mut U) -> (f64, f64) {
    loop {
        let u1 = src.symmetric();
        let u2 = src.symmetric();
        if let Some(p) = accept(u1, u2) {
            return p;
        }
    }
}

/// Like [`pair`] but gives up after `max_attempts` rejected points.
pub fn try_pair<U: UniformSource + ?Sized>(
    src: &mut U,
    max_attempts: usize,
) -> Result<(f64, f64), SampleError> {
    for _ in 0..max_attempts {
        let u1 = src.symmetric();
        let u2 = src.symmetric();
        if let Some(p) = accept(u1, u2) {
            return Ok(p);
        }
    }
    Err(SampleError::RejectionCapExceeded {
        algorithm: NAME,
        attempts: max_attempts,
    })
}
