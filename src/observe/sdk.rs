// src/observe/sdk.rs

//! # Observer SDK
//!
//! Same loop as [`crate::evaluate`], but every step is shown to a list of
//! **observers** so you can watch a run without touching the math.
//!
//! ## What an observer may do
//! - Look at `(step, before, after)` for each step, in order.
//! - Keep whatever private state it needs (first NaN, last fixed point, …).
//!
//! ## What an observer may NOT do
//! - Change the value. The loop owns `x`; observers only see copies.
//! - Stop the loop. The count is fixed; a fixed point or a NaN does not end
//!   the run early.
//!
//! ## Outcome
//! `evaluate_observed` returns an [`Outcome`]: the final value, the number
//! of steps taken, and the first step whose output was non-finite (if any).
//! Read anything richer back out of your own observers after the call.
//!
//! ## Adding an observer
//! Implement [`Observer::on_step`]; everything else has a default. See
//! `watch.rs` for the built-ins.

/// A passive view on each step of a run.
pub trait Observer {
    /// Called after step `step` (0-based) mapped `before` to `after`.
    fn on_step(&mut self, _step: u64, _before: f64, _after: f64) {}

    /// Called once after the last step.
    fn on_finish(&mut self, _iters: u64, _value: f64) {}
}

/// Result of an observed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub value: f64,
    pub iters: u64,
    pub first_non_finite: Option<u64>,
}

impl Outcome {
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// x_{t+1} = f(x_t) with observers attached.
pub fn evaluate_observed<F>(
    initial: f64,
    iterations: u64,
    f: F,
    observers: &mut [&mut dyn Observer],
) -> Outcome
where
    F: Fn(f64) -> f64,
{
    let mut x = initial;
    let mut first_non_finite = None;
    for step in 0..iterations {
        let next = f(x);
        if first_non_finite.is_none() && !next.is_finite() {
            first_non_finite = Some(step);
        }
        for o in observers.iter_mut() {
            o.on_step(step, x, next);
        }
        x = next;
    }
    for o in observers.iter_mut() {
        o.on_finish(iterations, x);
    }
    Outcome { value: x, iters: iterations, first_non_finite }
}
