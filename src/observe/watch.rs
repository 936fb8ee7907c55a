//! Built-in observers.

use tracing::trace;

use crate::observe::sdk::Observer;

/// Records the first step whose output is inf or NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonFiniteWatch {
    pub first: Option<(u64, f64)>,
}

impl Observer for NonFiniteWatch {
    fn on_step(&mut self, step: u64, _before: f64, after: f64) {
        if self.first.is_none() && !after.is_finite() {
            self.first = Some((step, after));
        }
    }
}

/// Records the first step where f(x) == x. The run keeps going.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPointWatch {
    pub first: Option<(u64, f64)>,
}

impl Observer for FixedPointWatch {
    fn on_step(&mut self, step: u64, before: f64, after: f64) {
        if self.first.is_none() && before == after {
            self.first = Some((step, after));
        }
    }
}

/// Emits a `trace!` event every `every` steps and on finish.
#[derive(Clone, Copy, Debug)]
pub struct TraceLog {
    pub every: u64,
    pub emitted: u64,
}

impl TraceLog {
    pub fn every(every: u64) -> Self {
        Self { every: every.max(1), emitted: 0 }
    }
}

impl Observer for TraceLog {
    fn on_step(&mut self, step: u64, before: f64, after: f64) {
        if step % self.every == 0 {
            trace!(step, before, after, "step");
            self.emitted += 1;
        }
    }

    fn on_finish(&mut self, iters: u64, value: f64) {
        trace!(iters, value, "finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::sdk::evaluate_observed;
    use crate::rational::r1;

    #[test]
    fn watches_report_first_events_only() {
        let mut nf = NonFiniteWatch::default();
        let mut fp = FixedPointWatch::default();
        let mut log = TraceLog::every(4);
        // 0 -> inf -> inf -> ...; inf is also a fixed point of r1 after the first step.
        let out = evaluate_observed(0.0, 10, r1, &mut [&mut nf, &mut fp, &mut log]);

        assert_eq!(out.first_non_finite, Some(0));
        assert_eq!(nf.first, Some((0, f64::INFINITY)));
        assert_eq!(fp.first, Some((1, f64::INFINITY)));
        assert_eq!(log.emitted, 3); // steps 0, 4, 8
        assert_eq!(out.value, f64::INFINITY);
    }
}
