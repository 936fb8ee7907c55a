/// The three fixed rational maps and their divisors.
/// Operation order matches the canonical notation so the interpreted
/// path reproduces these bit for bit.

/// r1(x) = 57/x - 8 + x.
#[inline]
pub fn r1(x: f64) -> f64 {
    57.0 / x - 8.0 + x
}

#[inline]
pub fn r1_denominator(x: f64) -> f64 {
    x
}

/// r2(x) = (10 + x) / (74 - 6x).
#[inline]
pub fn r2(x: f64) -> f64 {
    (10.0 + x) / (74.0 - 6.0 * x)
}

#[inline]
pub fn r2_denominator(x: f64) -> f64 {
    74.0 - 6.0 * x
}

/// r3(x) = (54 + x) / (3x) - 8.
#[inline]
pub fn r3(x: f64) -> f64 {
    (54.0 + x) / (3.0 * x) - 8.0
}

#[inline]
pub fn r3_denominator(x: f64) -> f64 {
    3.0 * x
}
