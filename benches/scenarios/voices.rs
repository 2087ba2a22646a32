//! Benchmarks for the event and drone voices.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_presence::{
    graph::node::{GraphNode, RenderCtx},
    sonify::notes::{C2, C4},
    voices,
};

use crate::BLOCK_SIZES;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let high = RenderCtx::from_note(48_000.0, C4, 1.0);
    let low = RenderCtx::from_note(48_000.0, C2, 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // AM sine pair under an envelope
        let mut appearance = voices::appearance();
        appearance.note_on(&high);
        group.bench_with_input(BenchmarkId::new("appearance", size), &size, |b, _| {
            b.iter(|| appearance.render_block(black_box(&mut buffer), black_box(&high)))
        });

        // Same with squares
        let mut disappearance = voices::disappearance();
        disappearance.note_on(&low);
        group.bench_with_input(BenchmarkId::new("disappearance", size), &size, |b, _| {
            b.iter(|| disappearance.render_block(black_box(&mut buffer), black_box(&low)))
        });

        // Pitch glide into a feedback delay: the most expensive event voice
        let mut displacement = voices::displacement();
        displacement.note_on(&low);
        group.bench_with_input(BenchmarkId::new("displacement", size), &size, |b, _| {
            b.iter(|| displacement.render_block(black_box(&mut buffer), black_box(&low)))
        });

        let mut drone = voices::drone();
        drone.note_on(&low);
        group.bench_with_input(BenchmarkId::new("drone", size), &size, |b, _| {
            b.iter(|| drone.render_block(black_box(&mut buffer), black_box(&low)))
        });
    }

    group.finish();
}
