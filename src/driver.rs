// src/driver.rs

//! Run driver: the compiled-in program variants and a chunked outer loop.
//!
//! There are two variants, picked at build time:
//! - default: `r1` from `x₀ = 1`, ten million steps;
//! - `variant-long`: `r3` from `x₀ = 1`, ten billion steps.
//!
//! Long runs are cut into chunks so progress can be logged between them.
//! Chunking never changes the result: each chunk starts from the previous
//! chunk's output, and step indices in errors are global.

use tracing::{debug, info};

use crate::error::EvalError;
use crate::rational::Rational;
use crate::evaluate_checked;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    pub recurrence: Rational,
    pub initial: f64,
    pub iterations: u64,
    /// Steps per progress chunk (0 = one chunk).
    pub chunk: u64,
}

impl RunConfig {
    pub const fn short() -> Self {
        Self { recurrence: Rational::R1, initial: 1.0, iterations: 10_000_000, chunk: 1_000_000 }
    }

    pub const fn long() -> Self {
        Self {
            recurrence: Rational::R3,
            initial: 1.0,
            iterations: 10_000_000_000,
            chunk: 100_000_000,
        }
    }
}

impl Default for RunConfig {
    #[cfg(not(feature = "variant-long"))]
    fn default() -> Self {
        Self::short()
    }

    #[cfg(feature = "variant-long")]
    fn default() -> Self {
        Self::long()
    }
}

/// One slice of the outer loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub start: u64,
    pub len: u64,
}

/// Standard outer loop: feeds each chunk's output into the next.
pub fn run_in_chunks<F, E>(mut value: f64, total: u64, chunk: u64, mut step: F) -> Result<f64, E>
where
    F: FnMut(f64, Chunk) -> Result<f64, E>,
{
    let size = if chunk == 0 { total.max(1) } else { chunk };
    let mut start = 0u64;
    while start < total {
        let len = size.min(total - start);
        value = step(value, Chunk { start, len })?;
        start += len;
        debug!(done = start, total, value, "chunk finished");
    }
    Ok(value)
}

/// Runs a variant on the checked path.
pub fn run(cfg: &RunConfig) -> Result<f64, EvalError> {
    info!(
        recurrence = %cfg.recurrence,
        initial = cfg.initial,
        iterations = cfg.iterations,
        "starting run"
    );
    let value = run_in_chunks(cfg.initial, cfg.iterations, cfg.chunk, |x, c| {
        evaluate_checked(x, c.len, &cfg.recurrence).map_err(|e| e.offset(c.start))
    })?;
    info!(value, "run finished");
    Ok(value)
}
