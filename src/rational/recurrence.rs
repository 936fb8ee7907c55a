use std::fmt;

use crate::mobius::Mobius;
use crate::rational::forms::{r1, r1_denominator, r2, r2_denominator, r3, r3_denominator};

/// One step of a recurrence.
///
/// `apply` is the IEEE path. `checked_apply` returns `None` when a divisor
/// would be zero for this input, and must otherwise agree with `apply`
/// bit for bit.
pub trait Recurrence {
    fn apply(&self, x: f64) -> f64;
    fn checked_apply(&self, x: f64) -> Option<f64>;
}

/// The fixed maps a program variant can be built around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rational {
    /// 57/x - 8 + x
    R1,
    /// (10 + x) / (74 - 6x)
    R2,
    /// (54 + x) / (3x) - 8
    R3,
}

impl Rational {
    pub const ALL: [Rational; 3] = [Rational::R1, Rational::R2, Rational::R3];

    pub fn name(self) -> &'static str {
        match self {
            Rational::R1 => "r1",
            Rational::R2 => "r2",
            Rational::R3 => "r3",
        }
    }

    /// Canonical text in the `expr` notation (variable `x`).
    pub fn notation(self) -> &'static str {
        match self {
            Rational::R1 => "57 / x - 8 + x",
            Rational::R2 => "(10 + x) / (74 - 6 * x)",
            Rational::R3 => "(54 + x) / (3 * x) - 8",
        }
    }

    #[inline]
    pub fn denominator(self, x: f64) -> f64 {
        match self {
            Rational::R1 => r1_denominator(x),
            Rational::R2 => r2_denominator(x),
            Rational::R3 => r3_denominator(x),
        }
    }

    /// Linear-fractional form, when the map has one.
    /// r1 is quadratic over linear and has none.
    pub fn as_mobius(self) -> Option<Mobius> {
        match self {
            Rational::R1 => None,
            Rational::R2 => Some(Mobius::new(1.0, 10.0, -6.0, 74.0)),
            // (54 + x)/(3x) - 8 = (54 - 23x)/(3x)
            Rational::R3 => Some(Mobius::new(-23.0, 54.0, 3.0, 0.0)),
        }
    }
}

impl Recurrence for Rational {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        match self {
            Rational::R1 => r1(x),
            Rational::R2 => r2(x),
            Rational::R3 => r3(x),
        }
    }

    #[inline]
    fn checked_apply(&self, x: f64) -> Option<f64> {
        if self.denominator(x) == 0.0 {
            None
        } else {
            Some(self.apply(x))
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x) = {}", self.name(), self.notation())
    }
}
