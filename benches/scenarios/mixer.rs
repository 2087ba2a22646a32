//! Benchmarks for the full mixer: four drones plus event voices.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_presence::{
    engine,
    presence::Zone,
    sonify::{notes::C3, ToneEngine, VoiceId},
    Config,
};

use crate::BLOCK_SIZES;

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");
    let config = Config::default();

    for &size in BLOCK_SIZES {
        let mut data = vec![0.0f32; size * 2];

        // Quiet building: drones only
        let (_handle, mut idle) = engine::channel(&config, 48_000.0);
        group.bench_with_input(BenchmarkId::new("drones_only", size), &size, |b, _| {
            b.iter(|| idle.render_interleaved(black_box(&mut data), 2))
        });

        // Busy building: every event voice retriggered and every level
        // moved on each block
        let (mut handle, mut busy) = engine::channel(&config, 48_000.0);
        group.bench_with_input(BenchmarkId::new("all_voices", size), &size, |b, _| {
            b.iter(|| {
                for voice in VoiceId::ALL {
                    handle.trigger(voice, C3, 0.125);
                }
                for zone in Zone::ALL {
                    handle.set_level(zone, -12.0);
                }
                busy.render_interleaved(black_box(&mut data), 2)
            })
        });
    }

    group.finish();
}
