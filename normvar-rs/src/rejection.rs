//! Acceptance-rejection with a Laplace(0, 1) proposal.
//!
//! The envelope constant is [`LAPLACE_BOUND`](crate::consts::LAPLACE_BOUND),
//! about 1.32 proposals per accepted variate. Each proposal costs three
//! uniform draws whether or not it is accepted, and the number of proposals is
//! unbounded.

use crate::error::SampleError;
use uniform_rs::UniformSource;

pub const NAME: &str = "accept_reject";

/// One proposal: magnitude `-ln(u1)`, accepted when
/// `u2 <= exp(-(x - 1)^2 / 2)`, negated when `u3 <= 0.5`.
#[inline]
pub fn accept(u1: f64, u2: f64, u3: f64) -> Option<f64> {
    let x = -u1.ln();
    let d = x - 1.0;
    if u2 > (-0.5 * d * d).exp() {
        return None;
    }
    Some(if u3 <= 0.5 { -x } else { x })
}

#[inline]
pub fn sample<U: UniformSource + ?Sized>(src: &mut U) -> f64 {
    loop {
        let u1 = src.unit();
        let u2 = src.unit();
        let u3 = src.unit();
        if let Some(x) = accept(u1, u2, u3) {
            return x;
        }
    }
}

/// Like [`sample`] but gives up after `max_attempts` rejected proposals.
pub fn try_sample<U: UniformSource + ?Sized>(
    src: &mut U,
    max_attempts: usize,
) -> Result<f64, SampleError> {
    for _ in 0..max_attempts {
        let u1 = src.unit();
        let u2 = src.unit();
        let u3 = src.unit();
        if let Some(x) = accept(u1, u2, u3) {
            return Ok(x);
        }
    }
    Err(SampleError::RejectionCapExceeded {
        algorithm: NAME,
        attempts: max_attempts,
    })
}
