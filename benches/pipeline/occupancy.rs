//! Benchmarks for occupancy recount from a directory snapshot.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_presence::presence::{recompute_counts, SiteLayout};

use super::populated_site;

pub fn bench_occupancy(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/occupancy");
    let layout = SiteLayout::default();

    // Lookup cost, not set size, should dominate
    for per_wing in [0, 10, 1000] {
        let site = populated_site(per_wing);
        group.bench_with_input(BenchmarkId::new("recount", per_wing), &per_wing, |b, _| {
            b.iter(|| recompute_counts(black_box(&layout), black_box(&site)))
        });
    }

    group.finish();
}
