//! Event dispatch - one presence event through the sonification pipeline.
//!
//! For every event, in this order:
//!
//! 1. classify the receiver directory into floor and wing
//! 2. play the event's note (if it has one)
//! 3. recount occupancy from the directory snapshot
//! 4. recompute and apply all four floor levels
//!
//! Keep-alives stop before step 1: they neither sound nor change counts.

use tracing::{debug, trace};

use crate::{
    config::Config,
    presence::{
        event::{EventKind, PresenceEvent},
        location::{Location, SiteLayout, Zone},
        occupancy::{recompute_counts, ZoneCounts},
        snapshot::DirectorySnapshot,
    },
    sonify::{
        ambient::{AmbientLevels, AmbientParams},
        duration::Duration,
        trigger::{trigger_for, Trigger},
        ToneEngine,
    },
};

/// Running totals of what the dispatcher has seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    pub appearances: u64,
    pub displacements: u64,
    pub disappearances: u64,
    pub keep_alives: u64,
    /// Events whose floor wasn't recognized and so played nothing.
    pub unplaced: u64,
}

impl EventStats {
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Appearance => self.appearances += 1,
            EventKind::Displacement => self.displacements += 1,
            EventKind::Disappearance => self.disappearances += 1,
            EventKind::KeepAlive => self.keep_alives += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.appearances + self.displacements + self.disappearances + self.keep_alives
    }
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatched {
    pub kind: EventKind,
    pub location: Location,
    /// The note that was played, if any.
    pub trigger: Option<Trigger>,
    /// Whether counts and levels were recomputed.
    pub recounted: bool,
}

/// Sonification state for one site, owned by the event loop.
///
/// Holds the constants of the mapping and the latest counts and levels.
/// The directory snapshot and the audio engine are borrowed per call.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    layout: SiteLayout,
    ambient: AmbientParams,
    note_secs: f32,
    counts: ZoneCounts,
    levels: AmbientLevels,
    stats: EventStats,
}

impl Dispatcher {
    pub fn new(layout: SiteLayout, ambient: AmbientParams, note: Duration, tempo_bpm: f32) -> Self {
        Self {
            layout,
            ambient,
            note_secs: note.to_seconds(tempo_bpm),
            counts: ZoneCounts::default(),
            levels: AmbientLevels::silent(&ambient),
            stats: EventStats::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.layout(),
            config.ambient,
            config.note_duration,
            config.tempo_bpm,
        )
    }

    /// Run one event through the pipeline.
    pub fn handle<S, E>(&mut self, event: &PresenceEvent, snapshot: &S, engine: &mut E) -> Dispatched
    where
        S: DirectorySnapshot + ?Sized,
        E: ToneEngine + ?Sized,
    {
        self.stats.record(event.kind);

        match event.kind {
            EventKind::KeepAlive => {
                return Dispatched {
                    kind: event.kind,
                    location: event.location(),
                    trigger: None,
                    recounted: false,
                };
            }
            EventKind::Appearance | EventKind::Displacement | EventKind::Disappearance => {}
        }

        let location = event.location();
        debug!(
            kind = event.kind.name(),
            directory = %event.receiver_directory,
            zone = location.zone_index(),
            wing = location.wing_index(),
            "presence event"
        );

        let trigger = trigger_for(event.kind, location);
        match trigger {
            Some(t) => engine.trigger(t.voice, t.note, self.note_secs),
            None => {
                self.stats.unplaced += 1;
                debug!(directory = %event.receiver_directory, "unrecognized floor, not sonified");
            }
        }

        self.refresh(snapshot, engine);

        Dispatched {
            kind: event.kind,
            location,
            trigger,
            recounted: true,
        }
    }

    /// Recount occupancy and push all four floor levels to the engine.
    ///
    /// Also used once at startup so the drones begin at the right level.
    pub fn refresh<S, E>(&mut self, snapshot: &S, engine: &mut E)
    where
        S: DirectorySnapshot + ?Sized,
        E: ToneEngine + ?Sized,
    {
        self.counts = recompute_counts(&self.layout, snapshot);
        self.levels = AmbientLevels::from_counts(&self.counts, &self.ambient);

        for (zone, level) in self.levels.iter() {
            engine.set_level(zone, level);
        }

        trace!(
            counts = ?self.counts.per_zone(),
            total = self.counts.total(),
            levels = ?self.levels.as_array(),
            "occupancy recomputed"
        );
    }

    pub fn counts(&self) -> &ZoneCounts {
        &self.counts
    }

    pub fn levels(&self) -> &AmbientLevels {
        &self.levels
    }

    pub fn level(&self, zone: Zone) -> f32 {
        self.levels.get(zone)
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Length of every event note, in seconds.
    pub fn note_secs(&self) -> f32 {
        self.note_secs
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presence::location::Wing, sonify::trigger::VoiceId};
    use std::collections::HashMap;

    #[derive(Default)]
    struct Recorder {
        triggers: Vec<(VoiceId, u8, f32)>,
        levels: Vec<(Zone, f32)>,
    }

    impl ToneEngine for Recorder {
        fn trigger(&mut self, voice: VoiceId, note: u8, duration_secs: f32) {
            self.triggers.push((voice, note, duration_secs));
        }

        fn set_level(&mut self, zone: Zone, level_db: f32) {
            self.levels.push((zone, level_db));
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            SiteLayout::new("root"),
            AmbientParams::default(),
            Duration::SIXTEENTH,
            120.0,
        )
    }

    #[test]
    fn appearance_triggers_then_applies_all_levels() {
        let mut d = dispatcher();
        let mut engine = Recorder::default();
        let snapshot = HashMap::from([("root:first:east".to_string(), 1usize)]);

        let out = d.handle(&PresenceEvent::appearance("root:first:east"), &snapshot, &mut engine);

        assert!(out.recounted);
        assert_eq!(engine.triggers, vec![(VoiceId::Appearance(Wing::East), 52, 0.125)]);
        assert_eq!(engine.levels.len(), Zone::COUNT);
        assert_eq!(d.counts().zone(Zone::First), 1);
        assert!(d.level(Zone::First) > d.level(Zone::Cafe));
    }

    #[test]
    fn keep_alive_does_nothing() {
        let mut d = dispatcher();
        let mut engine = Recorder::default();
        let snapshot = HashMap::from([("root:cafe".to_string(), 3usize)]);

        let out = d.handle(&PresenceEvent::keep_alive("root:cafe"), &snapshot, &mut engine);

        assert!(!out.recounted);
        assert!(engine.triggers.is_empty());
        assert!(engine.levels.is_empty());
        assert_eq!(d.counts().total(), 0, "keep-alive must not recount");
        assert_eq!(d.stats().keep_alives, 1);
    }

    #[test]
    fn unrecognized_floor_is_silent_but_recounts() {
        let mut d = dispatcher();
        let mut engine = Recorder::default();
        let snapshot = HashMap::from([("root:cafe".to_string(), 2usize)]);

        let out = d.handle(&PresenceEvent::disappearance("root:attic:west"), &snapshot, &mut engine);

        assert_eq!(out.trigger, None);
        assert!(engine.triggers.is_empty());
        assert_eq!(engine.levels.len(), Zone::COUNT);
        assert_eq!(d.counts().zone(Zone::Cafe), 2);
        assert_eq!(d.stats().unplaced, 1);
    }

    #[test]
    fn only_keep_alive_skips_the_recount() {
        let snapshot = HashMap::from([("root:second:west".to_string(), 1usize)]);

        for kind in EventKind::ALL {
            let mut d = dispatcher();
            let mut engine = Recorder::default();
            let out = d.handle(&PresenceEvent::new(kind, "root:second:west"), &snapshot, &mut engine);

            let expect_recount = kind != EventKind::KeepAlive;
            assert_eq!(out.recounted, expect_recount, "{kind:?}");
            assert_eq!(out.recounted, kind.changes_occupancy(), "{kind:?}");
            assert_eq!(engine.levels.len(), if expect_recount { Zone::COUNT } else { 0 }, "{kind:?}");
            assert_eq!(engine.triggers.len(), usize::from(expect_recount), "{kind:?}");
        }
    }

    #[test]
    fn note_length_follows_tempo() {
        let d = Dispatcher::new(
            SiteLayout::default(),
            AmbientParams::default(),
            Duration::EIGHTH,
            60.0,
        );
        assert!((d.note_secs() - 0.5).abs() < 1e-6);
    }
}
