use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;

pub const DEFAULT_SAMPLES: usize = 1_000_000;

/// Beasley-Springer-Moro central-region numerator coefficients.
pub const BSM_A: [f64; 4] = [
    2.50662823884,
    -18.61500062529,
    41.39119773534,
    -25.44106049637,
];

/// Central-region denominator coefficients (leading 1 implied).
pub const BSM_B: [f64; 4] = [
    -8.47351093090,
    23.08336743743,
    -21.06224101826,
    3.13082909833,
];

/// Tail coefficients, a polynomial in `ln(-ln(r))`.
pub const BSM_C: [f64; 9] = [
    0.3374754822726147,
    0.9761690190917186,
    0.1607979714918209,
    0.0276438810333863,
    0.0038405729373609,
    0.0003951896511919,
    0.0000321767881768,
    0.0000002888167364,
    0.0000003960315187,
];

/// `|u - 0.5|` below this uses the central rational approximation.
pub const BSM_CENTRAL: f64 = 0.42;

/// sup f/g for the standard normal f over the Laplace(0, 1) density g,
/// `sqrt(2e / pi)`.
pub const LAPLACE_BOUND: f64 = 1.315489246958914;
