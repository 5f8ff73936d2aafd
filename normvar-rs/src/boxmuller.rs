use crate::consts::TWO_PI;
use uniform_rs::UniformSource;

pub const NAME: &str = "box_muller";

/// Map two uniforms to two independent standard normals.
///
/// `u1` must be strictly positive; `SeededUniform` never returns 0.
#[inline]
pub fn transform(u1: f64, u2: f64) -> (f64, f64) {
    let r = (-2.0 * u1.ln()).sqrt();
    let (sin, cos) = (TWO_PI * u2).sin_cos();
    (r * cos, r * sin)
}

/// Draw two uniforms and return a pair of standard normals.
#[inline]
pub fn pair<U: UniformSource + ?Sized>(src: &mut U) -> (f64, f64) {
    let u1 = src.unit();
    let u2 = src.unit();
    transform(u1, u2)
}
