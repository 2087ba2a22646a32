//! Turning presence into sound.
//!
//! Two independent mappings live here. [`trigger`] picks a voice and pitch
//! for each discrete event; [`ambient`] turns per-zone occupancy into a
//! loudness for each floor's drone. Neither keeps state: both are functions
//! of their inputs and a few constant tables.
//!
//! Whatever actually makes the sound implements [`ToneEngine`].

/// Ambient drone level per floor from occupancy share.
pub mod ambient;
/// Rational note lengths and transport notation (`16n`).
pub mod duration;
/// Named note numbers used by the pitch tables.
pub mod notes;
/// Voice and pitch selection for discrete events.
pub mod trigger;

pub use ambient::{AmbientLevels, AmbientParams};
pub use duration::Duration;
pub use trigger::{trigger_for, Trigger, VoiceId};

use crate::presence::location::Zone;

/// The two capabilities the sonification core needs from an audio backend.
pub trait ToneEngine {
    /// Play `note` on `voice` for `duration_secs`. Fire and forget.
    fn trigger(&mut self, voice: VoiceId, note: u8, duration_secs: f32);

    /// Set a floor drone's output level in dB. Last write wins.
    fn set_level(&mut self, zone: Zone, level_db: f32);
}

impl<T: ToneEngine + ?Sized> ToneEngine for &mut T {
    fn trigger(&mut self, voice: VoiceId, note: u8, duration_secs: f32) {
        (**self).trigger(voice, note, duration_secs)
    }

    fn set_level(&mut self, zone: Zone, level_db: f32) {
        (**self).set_level(zone, level_db)
    }
}
