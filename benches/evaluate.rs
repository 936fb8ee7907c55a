//! Loop throughput: native maps, interpreted notation, and the Möbius shortcut.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use recurrence_eval::expr::Expr;
use recurrence_eval::{Rational, Recurrence, evaluate};
use std::hint::black_box;

const STEPS: u64 = 100_000;

fn bench_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("native");
    group.throughput(Throughput::Elements(STEPS));

    for r in Rational::ALL {
        group.bench_with_input(BenchmarkId::new("evaluate", r.name()), &r, |b, r| {
            b.iter(|| evaluate(black_box(1.0), STEPS, |x| r.apply(x)))
        });
    }

    group.finish();
}

fn bench_interpreted(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpreted");
    group.throughput(Throughput::Elements(STEPS));

    for r in Rational::ALL {
        let e = Expr::parse(r.notation()).expect("canonical notation parses");
        group.bench_with_input(BenchmarkId::new("evaluate", r.name()), &e, |b, e| {
            b.iter(|| evaluate(black_box(1.0), STEPS, |x| e.apply(x)))
        });
    }

    group.finish();
}

fn bench_mobius(c: &mut Criterion) {
    let mut group = c.benchmark_group("mobius");

    for r in [Rational::R2, Rational::R3] {
        let m = r.as_mobius().expect("linear-fractional");
        group.bench_with_input(BenchmarkId::new("evaluate_fast", r.name()), &m, |b, m| {
            b.iter(|| m.evaluate_fast(black_box(1.0), black_box(10_000_000_000)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_native, bench_interpreted, bench_mobius);
criterion_main!(benches);
