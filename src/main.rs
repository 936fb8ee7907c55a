//! Runs the compiled-in recurrence variant and prints the final value.
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see per-chunk progress.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use recurrence_eval::driver::{self, RunConfig};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    report(&RunConfig::default(), &mut io::stdout().lock())
}

/// One line with the final value, or an error and nothing written.
fn report<W: Write>(cfg: &RunConfig, out: &mut W) -> Result<()> {
    let value = driver::run(cfg).with_context(|| format!("evaluating {}", cfg.recurrence))?;
    writeln!(out, "{value}")?;
    Ok(())
}
