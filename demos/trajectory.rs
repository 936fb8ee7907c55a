// demos/trajectory.rs
// Run with:
//   RUST_LOG=trace cargo run --example trajectory

use recurrence_eval::expr::Expr;
use recurrence_eval::observe::{
    FixedPointWatch, NonFiniteWatch, Observer, TraceLog, evaluate_observed,
};
use recurrence_eval::{Rational, Recurrence};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let steps = 200;

    println!("== Fixed recurrences from x0 = 1, {steps} steps ==");
    for r in Rational::ALL {
        let mut fp = FixedPointWatch::default();
        let mut nf = NonFiniteWatch::default();
        let mut log = TraceLog::every(50);
        let watchers: &mut [&mut dyn Observer] = &mut [&mut fp, &mut nf, &mut log];
        let out = evaluate_observed(1.0, steps, |x| r.apply(x), watchers);

        println!("{r}");
        println!("  final       -> {}", out.value);
        println!("  fixed point -> {:?}", fp.first);
        println!("  non-finite  -> {:?}", nf.first);
        if let Some(m) = r.as_mobius() {
            println!("  mobius 1e10 -> {}", m.evaluate_fast(1.0, 10_000_000_000));
        }
    }

    println!("== Historical spelling of r1, folded ==");
    match Expr::parse("(((54 + 3) / n) - (4 * 2)) + n") {
        Ok(e) => {
            println!("  parsed  -> {e}");
            println!("  reduced -> {}", e.reduce());
        }
        Err(err) => println!("  parse error: {err}"),
    }
}
