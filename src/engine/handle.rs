use rtrb::{Consumer, Producer, RingBuffer};
use tracing::warn;

use crate::{
    engine::message::EngineMessage,
    presence::location::Zone,
    sonify::{trigger::VoiceId, ToneEngine},
};

/// Sending half of the engine: lives on the event thread.
///
/// Never blocks. If the audio thread falls behind and the queue fills up,
/// the message is dropped and counted; the next level update supersedes a
/// lost one anyway.
pub struct EngineHandle {
    tx: Producer<EngineMessage>,
    dropped: u64,
}

impl EngineHandle {
    /// Create a handle and the consumer to give to the [`Mixer`](super::Mixer).
    pub fn channel(capacity: usize) -> (Self, Consumer<EngineMessage>) {
        let (tx, rx) = RingBuffer::<EngineMessage>::new(capacity);
        (Self { tx, dropped: 0 }, rx)
    }

    /// Messages lost to a full queue so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn send(&mut self, msg: EngineMessage) {
        if self.tx.push(msg).is_err() {
            self.dropped += 1;
            warn!(?msg, dropped = self.dropped, "audio queue full, message dropped");
        }
    }
}

impl ToneEngine for EngineHandle {
    fn trigger(&mut self, voice: VoiceId, note: u8, duration_secs: f32) {
        self.send(EngineMessage::Trigger {
            voice,
            note,
            duration_secs,
        });
    }

    fn set_level(&mut self, zone: Zone, level_db: f32) {
        self.send(EngineMessage::SetLevel { zone, level_db });
    }
}
