/// Seeded sampling of starting values.
/// Note: uses `bevy_prng::WyRand` behind a `RefCell` so callers can share one
/// stream across closures, the same way a test harness threads a seed.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use std::cell::RefCell;

use crate::error::SampleError;

/// Fresh generator from a `u64` seed.
pub fn seeded(seed: u64) -> RefCell<WyRand> {
    RefCell::new(WyRand::from_seed(seed.to_le_bytes()))
}

/// Uniform in [0, 1) with 53 bits.
#[inline]
pub fn unit(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform in [lo, hi).
#[inline]
pub fn uniform(rng: &RefCell<WyRand>, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * unit(rng)
}

/// Draw budget per requested value before `initials` gives up.
pub const MAX_DRAWS_PER_VALUE: u64 = 10_000;

/// `n` starting values in [lo, hi), each at least `margin` away from every pole in `avoid`.
///
/// Fails up front when the poles' bands leave nothing of the range, and after
/// `MAX_DRAWS_PER_VALUE * n` draws when what is left is too thin to hit.
/// `lo == hi` is the single point `lo`.
pub fn initials(
    rng: &RefCell<WyRand>,
    n: usize,
    lo: f64,
    hi: f64,
    avoid: &[f64],
    margin: f64,
) -> Result<Vec<f64>, SampleError> {
    if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
        return Err(SampleError::InvalidRange { lo, hi });
    }
    if lo == hi {
        return if admissible(lo, avoid, margin) {
            Ok(vec![lo; n])
        } else {
            Err(SampleError::NoAdmissibleValue { lo, hi, margin })
        };
    }
    if first_admissible(lo, hi, avoid, margin).is_none() {
        return Err(SampleError::NoAdmissibleValue { lo, hi, margin });
    }

    let budget = MAX_DRAWS_PER_VALUE.saturating_mul(n as u64);
    let mut out = Vec::with_capacity(n);
    let mut draws = 0u64;
    while out.len() < n {
        if draws == budget {
            return Err(SampleError::Exhausted { draws, found: out.len(), wanted: n });
        }
        draws += 1;
        let x = uniform(rng, lo, hi);
        if admissible(x, avoid, margin) {
            out.push(x);
        }
    }
    Ok(out)
}

#[inline]
fn admissible(x: f64, avoid: &[f64], margin: f64) -> bool {
    avoid.iter().all(|p| (x - p).abs() >= margin)
}

/// Smallest point of [lo, hi) outside every open band (p - margin, p + margin).
fn first_admissible(lo: f64, hi: f64, avoid: &[f64], margin: f64) -> Option<f64> {
    let mut bands: Vec<(f64, f64)> = avoid.iter().map(|p| (p - margin, p + margin)).collect();
    bands.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut cursor = lo;
    for (start, end) in bands {
        if start >= cursor {
            break;
        }
        cursor = cursor.max(end);
    }
    (cursor < hi).then_some(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a = seeded(7);
        let b = seeded(7);
        for _ in 0..16 {
            assert_eq!(unit(&a).to_bits(), unit(&b).to_bits());
        }
    }

    #[test]
    fn initials_respect_range_and_margin() {
        let rng = seeded(42);
        let xs = initials(&rng, 200, -20.0, 20.0, &[0.0, 37.0 / 3.0], 0.5).unwrap();
        assert_eq!(xs.len(), 200);
        for x in xs {
            assert!((-20.0..20.0).contains(&x));
            assert!(x.abs() >= 0.5 && (x - 37.0 / 3.0).abs() >= 0.5);
        }
    }

    #[test]
    fn fully_covered_range_is_rejected_up_front() {
        let rng = seeded(1);
        assert_eq!(
            initials(&rng, 1, -0.1, 0.1, &[0.0], 1.0),
            Err(SampleError::NoAdmissibleValue { lo: -0.1, hi: 0.1, margin: 1.0 })
        );
        // Overlapping bands chained across the whole range.
        assert!(matches!(
            initials(&rng, 3, 0.0, 3.0, &[0.5, 1.5, 2.5], 0.6),
            Err(SampleError::NoAdmissibleValue { .. })
        ));
    }

    #[test]
    fn point_range_yields_the_point_or_fails() {
        let rng = seeded(1);
        assert_eq!(
            initials(&rng, 1, 0.0, 0.0, &[0.0], 0.5),
            Err(SampleError::NoAdmissibleValue { lo: 0.0, hi: 0.0, margin: 0.5 })
        );
        assert_eq!(initials(&rng, 2, 3.0, 3.0, &[0.0], 0.5), Ok(vec![3.0, 3.0]));
    }

    #[test]
    fn measure_zero_gap_exhausts_the_budget() {
        // Bands (-1, 0) and (0, 1) leave only -1 and 0 admissible.
        let rng = seeded(9);
        assert_eq!(
            initials(&rng, 2, -1.0, 1.0, &[-0.5, 0.5], 0.5),
            Err(SampleError::Exhausted { draws: 2 * MAX_DRAWS_PER_VALUE, found: 0, wanted: 2 })
        );
    }

    #[test]
    fn inverted_or_infinite_range_is_invalid() {
        let rng = seeded(1);
        assert!(matches!(
            initials(&rng, 1, 2.0, 1.0, &[], 0.0),
            Err(SampleError::InvalidRange { .. })
        ));
        assert!(matches!(
            initials(&rng, 1, 0.0, f64::INFINITY, &[], 0.0),
            Err(SampleError::InvalidRange { .. })
        ));
    }
}
