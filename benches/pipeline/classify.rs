//! Benchmarks for directory path classification.

use std::hint::black_box;

use criterion::Criterion;
use saavy_presence::presence::classify;

pub fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/classify");

    group.bench_function("floor_and_wing", |b| b.iter(|| classify(black_box("notman:third:east"))));
    group.bench_function("cafe", |b| b.iter(|| classify(black_box("notman:cafe"))));
    group.bench_function("unrecognized", |b| {
        b.iter(|| classify(black_box("notman:basement:plant-room:north")))
    });

    group.finish();
}
