/*
Discrete Event Sounds
=====================

Each movement event plays one short note. Which voice plays it says WHAT
happened; the pitch says WHERE (which floor); the pan says which wing.

  event          voice                        pitch by floor (cafe → third)
  ─────────────  ───────────────────────────  ─────────────────────────────
  appearance     AM sine, panned by wing      C3  E3  G3  C4
  displacement   membrane + echo, centred     C2  E2  G2  C3
  disappearance  AM square, panned by wing    C2  E2  G2  C3
  keep-alive     (silent)

Displacement and disappearance share pitches an octave below appearance;
they're told apart by timbre. Cafe events always take the centre voice: the
cafe has no wings and classification reports it as centre.

The pitch tables are indexed by `Zone`, not by a raw integer, so an event
whose floor wasn't recognized has no way to reach them. `trigger_for` simply
returns `None` for it.
*/

use crate::{
    presence::{
        event::EventKind,
        location::{Location, Wing, Zone},
    },
    sonify::{
        duration::Duration,
        notes::{C2, C3, C4, E2, E3, G2, G3},
    },
};

pub const APPEARANCE_NOTES: [u8; Zone::COUNT] = [C3, E3, G3, C4];
pub const DISPLACEMENT_NOTES: [u8; Zone::COUNT] = [C2, E2, G2, C3];
pub const DISAPPEARANCE_NOTES: [u8; Zone::COUNT] = [C2, E2, G2, C3];

/// Default length of every event note.
pub const NOTE_DURATION: Duration = Duration::SIXTEENTH;

/// An addressable instrument for discrete events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceId {
    Appearance(Wing),
    Displacement,
    Disappearance(Wing),
}

impl VoiceId {
    pub const COUNT: usize = 2 * Wing::COUNT + 1;

    pub const ALL: [VoiceId; VoiceId::COUNT] = [
        VoiceId::Appearance(Wing::West),
        VoiceId::Appearance(Wing::Centre),
        VoiceId::Appearance(Wing::East),
        VoiceId::Displacement,
        VoiceId::Disappearance(Wing::West),
        VoiceId::Disappearance(Wing::Centre),
        VoiceId::Disappearance(Wing::East),
    ];

    /// Dense slot number, matching the order of [`VoiceId::ALL`].
    pub const fn slot(self) -> usize {
        match self {
            VoiceId::Appearance(wing) => wing.index(),
            VoiceId::Displacement => Wing::COUNT,
            VoiceId::Disappearance(wing) => Wing::COUNT + 1 + wing.index(),
        }
    }

    /// Stereo position of the voice's panner.
    pub const fn pan(self) -> f32 {
        match self {
            VoiceId::Appearance(wing) | VoiceId::Disappearance(wing) => wing.pan(),
            VoiceId::Displacement => 0.0,
        }
    }
}

/// One note to play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub voice: VoiceId,
    pub note: u8,
    pub duration: Duration,
}

/// Pick voice and pitch for an event, or `None` when it makes no sound.
///
/// Silent cases: keep-alives, and any event whose floor is unrecognized.
pub fn trigger_for(kind: EventKind, location: Location) -> Option<Trigger> {
    let zone = location.zone?;
    let z = zone.index();

    let (voice, note) = match kind {
        EventKind::Appearance => (VoiceId::Appearance(location.wing), APPEARANCE_NOTES[z]),
        EventKind::Displacement => (VoiceId::Displacement, DISPLACEMENT_NOTES[z]),
        EventKind::Disappearance => (VoiceId::Disappearance(location.wing), DISAPPEARANCE_NOTES[z]),
        EventKind::KeepAlive => return None,
    };

    Some(Trigger {
        voice,
        note,
        duration: NOTE_DURATION,
    })
}
