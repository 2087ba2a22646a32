//! Where people are.
//!
//! Presence events name the receiver that heard a device by its directory
//! path. This module turns those paths into floors and wings, keeps the
//! directory → devices map that the tracking service maintains, and counts
//! occupancy per zone from it.

/// Presence events and their kinds.
pub mod event;
/// Directory path parsing: floors, wings and the site layout.
pub mod location;
/// Per-zone occupancy counts.
pub mod occupancy;
/// Read-only access to directory device sets.
pub mod snapshot;
/// Directory map maintained from the event stream.
pub mod tracker;

pub use event::{EventKind, PresenceEvent};
pub use location::{classify, Location, SiteLayout, Wing, Zone};
pub use occupancy::{recompute_counts, ZoneCounts};
pub use snapshot::DirectorySnapshot;
pub use tracker::DirectoryTracker;
