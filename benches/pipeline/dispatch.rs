//! Benchmarks for handling one event end to end (minus the audio).

use std::{collections::VecDeque, hint::black_box};

use criterion::Criterion;
use saavy_presence::{
    engine::EngineMessage,
    presence::{DirectoryTracker, PresenceEvent},
    Dispatcher,
};

use super::populated_site;

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/dispatch");
    let site = populated_site(20);
    let mut engine: VecDeque<EngineMessage> = VecDeque::with_capacity(16);

    let mut dispatcher = Dispatcher::default();
    let appearance = PresenceEvent::appearance("notman:second:west");
    group.bench_function("appearance", |b| {
        b.iter(|| {
            engine.clear();
            dispatcher.handle(black_box(&appearance), &site, &mut engine)
        })
    });

    let keep_alive = PresenceEvent::keep_alive("notman:second:west");
    group.bench_function("keep_alive", |b| {
        b.iter(|| dispatcher.handle(black_box(&keep_alive), &site, &mut engine))
    });

    // Tracker + dispatcher, as the event thread does it
    let mut tracker = DirectoryTracker::new();
    let moves = [
        PresenceEvent::appearance("notman:first:west").with_device("a"),
        PresenceEvent::displacement("notman:first:east").with_device("a"),
        PresenceEvent::displacement("notman:third:centre").with_device("a"),
        PresenceEvent::disappearance("notman:third:centre").with_device("a"),
    ];
    group.bench_function("tracked_sequence", |b| {
        b.iter(|| {
            for event in &moves {
                tracker.apply(event);
                engine.clear();
                dispatcher.handle(black_box(event), &tracker, &mut engine);
            }
        })
    });

    group.finish();
}
