//! Filter Benchmarks
//!
//! Criterion benchmarks for every filter primitive, plus the cost of going
//! through a `FilterSlot` instead of a concrete type.

use criterion::{Criterion, criterion_group, criterion_main};
use ctrlkit_filters::prelude::*;
use std::hint::black_box;

fn bench_low_pass(c: &mut Criterion) {
    let mut lp = LowPass::default();
    c.bench_function("low_pass", |b| b.iter(|| lp.update(black_box(0.5))));
}

fn bench_moving_average(c: &mut Criterion) {
    let mut avg = MovingAverage::<10>::new();
    c.bench_function("moving_average_10", |b| {
        b.iter(|| avg.update(black_box(0.5)))
    });
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    let mut med5 = Median::<5>::new();
    let mut med15 = Median::<15>::new();
    let mut x = 0.0_f32;
    group.bench_function("window_5", |b| {
        b.iter(|| {
            x = (x + 0.37) % 3.0;
            med5.update(black_box(x))
        })
    });
    group.bench_function("window_15", |b| {
        b.iter(|| {
            x = (x + 0.37) % 3.0;
            med15.update(black_box(x))
        })
    });
    group.finish();
}

fn bench_kalman(c: &mut Criterion) {
    let mut kf = Kalman::default();
    c.bench_function("kalman", |b| b.iter(|| kf.update(black_box(0.5))));
}

fn bench_butterworth(c: &mut Criterion) {
    let mut bw = Butterworth::default();
    c.bench_function("butterworth", |b| b.iter(|| bw.update(black_box(0.5))));
}

fn bench_slew_rate(c: &mut Criterion) {
    let mut sl = SlewRateLimiter::per_tick(0.01);
    let mut target = 1.0_f32;
    c.bench_function("slew_rate", |b| {
        b.iter(|| {
            target = -target;
            sl.update(black_box(target))
        })
    });
}

fn bench_limit_average(c: &mut Criterion) {
    let mut la = LimitAverage::<10>::default();
    c.bench_function("limit_average_10", |b| {
        b.iter(|| la.update(black_box(0.5)))
    });
}

fn bench_dyn_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let mut concrete = Butterworth::default();
    let mut slot = FilterSlot::new(Butterworth::default());
    let mut empty = FilterSlot::empty();
    group.bench_function("concrete", |b| b.iter(|| concrete.update(black_box(0.5))));
    group.bench_function("slot", |b| b.iter(|| slot.apply(black_box(0.5))));
    group.bench_function("empty_slot", |b| b.iter(|| empty.apply(black_box(0.5))));
    group.finish();
}

criterion_group!(
    benches,
    bench_low_pass,
    bench_moving_average,
    bench_median,
    bench_kalman,
    bench_butterworth,
    bench_slew_rate,
    bench_limit_average,
    bench_dyn_dispatch
);
criterion_main!(benches);
