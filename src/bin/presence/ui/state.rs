//! Shared state types for UI communication
//!
//! Everything here is `Copy`, so updates cross the ring buffer from the
//! event thread without allocating.

use saavy_presence::{
    dispatch::{Dispatched, EventStats},
    presence::{event::EventKind, location::Location, occupancy::ZoneCounts, Zone},
};

/// Static state sent once at startup.
#[derive(Clone, Debug)]
pub struct UiStateInit {
    pub root: String,
    pub tempo_bpm: f32,
    /// Note length as written in the config (`16n`).
    pub note: String,
    pub sample_rate: f32,
    pub channels: usize,
    pub base_db: f32,
    pub multiplier_db: f32,
}

/// One dispatched event, for the recent-events log.
#[derive(Clone, Copy, Debug)]
pub struct EventRecord {
    /// Sequence number in the feed (1-based).
    pub seq: u64,
    pub kind: EventKind,
    pub location: Location,
    /// Note played, if the floor was recognized.
    pub note: Option<u8>,
}

impl EventRecord {
    pub fn from_dispatched(seq: u64, d: &Dispatched) -> Self {
        Self {
            seq,
            kind: d.kind,
            location: d.location,
            note: d.trigger.map(|t| t.note),
        }
    }
}

/// Dynamic state after each event (Copy, no allocations).
#[derive(Clone, Copy, Debug)]
pub struct UiStateUpdate {
    pub counts: ZoneCounts,
    pub levels: [f32; Zone::COUNT],
    pub stats: EventStats,
    /// Devices the tracker currently knows about.
    pub devices: usize,
    /// Feed lines that failed to parse.
    pub bad_lines: u64,
    /// Engine messages lost to a full queue.
    pub dropped: u64,
    pub last: Option<EventRecord>,
    pub feed_done: bool,
}
