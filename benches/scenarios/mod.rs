//! Benchmarks for real-world audio scenarios.

mod mixer;
mod voices;

pub use mixer::bench_mixer;
pub use voices::bench_voices;
