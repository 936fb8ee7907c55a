//! Möbius maps: x ↦ (a·x + b) / (c·x + d).
//!
//! Composition of Möbius maps is the product of their 2×2 coefficient
//! matrices, so n applications collapse into one matrix power computed by
//! repeated squaring. Coefficients are defined only up to a common factor;
//! every product is rescaled by its largest magnitude so long powers stay
//! inside f64 range.
//!
//! Results agree with the step-by-step loop up to rounding, not bit for bit.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mobius {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Mobius {
    pub const IDENTITY: Mobius = Mobius { a: 1.0, b: 0.0, c: 0.0, d: 1.0 };

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.a * x + self.b) / (self.c * x + self.d)
    }

    /// `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &Mobius) -> Mobius {
        Mobius {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
        .normalized()
    }

    /// The map applied `n` times.
    pub fn pow(&self, mut n: u64) -> Mobius {
        let mut acc = Mobius::IDENTITY;
        let mut base = self.normalized();
        while n > 0 {
            if n & 1 == 1 {
                acc = base.compose(&acc);
            }
            base = base.compose(&base);
            n >>= 1;
        }
        acc
    }

    /// Closed-form counterpart of `evaluate(initial, iterations, |x| self.apply(x))`.
    pub fn evaluate_fast(&self, initial: f64, iterations: u64) -> f64 {
        self.pow(iterations).apply(initial)
    }

    fn normalized(self) -> Mobius {
        let scale = self.a.abs().max(self.b.abs()).max(self.c.abs()).max(self.d.abs());
        if scale > 0.0 && scale.is_finite() {
            Mobius {
                a: self.a / scale,
                b: self.b / scale,
                c: self.c / scale,
                d: self.d / scale,
            }
        } else {
            self
        }
    }
}
