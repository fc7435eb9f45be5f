//! Benchmarks for the comparison/record hot path.

use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};

use minicheck::{Aggregator, CheckEq, Render};

fn equality_bench(c: &mut Criterion) {
    c.bench_function("check_eq_i64", |b| {
        b.iter(|| black_box(7_i64).check_eq(&black_box(7_i64)))
    });
    c.bench_function("check_eq_f64_near", |b| {
        b.iter(|| black_box(1.0_f64).check_eq(&black_box(1.00001_f64)))
    });
}

fn render_bench(c: &mut Criterion) {
    c.bench_function("render_f64", |b| {
        b.iter(|| black_box(3.141592653589793_f64).render())
    });
    c.bench_function("render_str", |b| b.iter(|| black_box("abcdef").render()));
}

fn record_bench(c: &mut Criterion) {
    // Null sink: measures compare + render + count without terminal I/O.
    let aggregator = Aggregator::with_sink(Box::new(io::sink()));
    c.bench_function("record_pass_i64", |b| {
        b.iter(|| aggregator.check(&black_box(7_i64), &black_box(7_i64)))
    });
    c.bench_function("record_fail_str", |b| {
        b.iter(|| aggregator.check(&black_box("abc"), &black_box("cde")))
    });
}

criterion_group!(benches, equality_bench, render_bench, record_bench);
criterion_main!(benches);
