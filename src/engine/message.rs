use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::{
    presence::location::Zone,
    sonify::{trigger::VoiceId, ToneEngine},
};

/// Control message from the event thread to the audio thread.
///
/// `Copy` and fixed-size so it can cross a lock-free ring buffer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineMessage {
    Trigger {
        voice: VoiceId,
        note: u8,
        duration_secs: f32,
    },
    SetLevel {
        zone: Zone,
        level_db: f32,
    },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<EngineMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<EngineMessage> {
    fn pop(&mut self) -> Option<EngineMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline queue: lets a dispatcher drive a mixer on one thread (tests,
/// bounces) without a ring buffer.
impl MessageReceiver for VecDeque<EngineMessage> {
    fn pop(&mut self) -> Option<EngineMessage> {
        self.pop_front()
    }
}

impl ToneEngine for VecDeque<EngineMessage> {
    fn trigger(&mut self, voice: VoiceId, note: u8, duration_secs: f32) {
        self.push_back(EngineMessage::Trigger {
            voice,
            note,
            duration_secs,
        });
    }

    fn set_level(&mut self, zone: Zone, level_db: f32) {
        self.push_back(EngineMessage::SetLevel { zone, level_db });
    }
}
