//! Benchmarks for the event path: parse, count, dispatch.

mod classify;
mod dispatch;
mod occupancy;

pub use classify::bench_classify;
pub use dispatch::bench_dispatch;
pub use occupancy::bench_occupancy;

use std::collections::{HashMap, HashSet};

/// A directory map with `per_wing` devices in every wing and the cafe.
pub fn populated_site(per_wing: usize) -> HashMap<String, HashSet<String>> {
    let mut dirs = HashMap::new();
    let mut next = 0;
    let mut fill = |path: String| {
        let devices = (0..per_wing)
            .map(|_| {
                next += 1;
                format!("dev-{next}")
            })
            .collect();
        dirs.insert(path, devices);
    };

    fill("notman:cafe".to_string());
    for floor in ["first", "second", "third"] {
        for wing in ["west", "centre", "east"] {
            fill(format!("notman:{floor}:{wing}"));
        }
    }
    dirs
}
