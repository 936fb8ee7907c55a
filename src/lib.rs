/*!
`recurrence_eval` — a minimal, pure evaluator for fixed rational recurrences.

What it does
- Repeats a single step `x_{t+1} = f(x_t)` exactly `n` times from `x₀`.
- Ships three fixed rational maps (`r1`, `r2`, `r3`) and a tiny textual
  notation for them that is parsed and interpreted as a second path.
- Offers a checked loop that stops on a zero denominator, and an O(log n)
  Möbius shortcut for the linear-fractional maps.

How to use (call surface only)
- Pick a starting value `x₀` (the historical default is [`DEFAULT_INITIAL`]).
- Pick a map: any `Fn(f64) -> f64`, a [`rational::Rational`], or a parsed
  [`expr::Expr`].
- Call `evaluate(x₀, n, f) -> f64`, or `evaluate_checked(x₀, n, &r)` to turn a
  zero denominator into an [`EvalError`].

What it does NOT do
- No early exit at fixed points, no precision beyond `f64`, no parallelism.
*/

use tracing::warn;

pub use error::{EvalError, ParseError, SampleError};
pub use rational::{Rational, Recurrence};

/// Starting value used when a caller has no opinion.
pub const DEFAULT_INITIAL: f64 = 0.0;

/// Plain iteration: x_{t+1} = f(x_t), `iterations` times.
///
/// IEEE-754 semantics throughout: a zero denominator yields ±inf or NaN,
/// which then flows through the remaining steps.
#[inline]
pub fn evaluate<F>(initial: f64, iterations: u64, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut x = initial;
    for _ in 0..iterations {
        x = f(x);
    }
    x
}

/// Same loop, but a zero denominator at any step is an error instead of inf/NaN.
pub fn evaluate_checked<R>(initial: f64, iterations: u64, recurrence: &R) -> Result<f64, EvalError>
where
    R: Recurrence + ?Sized,
{
    let mut x = initial;
    for step in 0..iterations {
        x = match recurrence.checked_apply(x) {
            Some(next) => next,
            None => {
                warn!(step, value = x, "zero denominator");
                return Err(EvalError::DivisionByZero { step, value: x });
            }
        };
    }
    Ok(x)
}

pub mod driver;
pub mod error;
pub mod expr;
pub mod mobius;
pub mod observe;
pub mod rational;
pub mod sampling;
