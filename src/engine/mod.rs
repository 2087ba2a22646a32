//! The audio side: control messages in, interleaved samples out.
//!
//! [`EngineHandle`] is the [`ToneEngine`](crate::sonify::ToneEngine) the
//! event thread talks to; [`Mixer`] runs in the audio callback. They are
//! joined by a lock-free SPSC queue, so neither side ever blocks on the
//! other.

#[cfg(feature = "rtrb")]
mod handle;
pub mod message;
mod mixer;
pub mod strip;

#[cfg(feature = "rtrb")]
pub use handle::EngineHandle;
pub use message::{EngineMessage, MessageReceiver};
pub use mixer::Mixer;

#[cfg(feature = "rtrb")]
use crate::config::Config;

/// Build a connected handle/mixer pair for a device running at `sample_rate`.
#[cfg(feature = "rtrb")]
pub fn channel(config: &Config, sample_rate: f32) -> (EngineHandle, Mixer<rtrb::Consumer<EngineMessage>>) {
    let (handle, rx) = EngineHandle::channel(config.audio.queue_size);
    let mixer = Mixer::new(rx, sample_rate, &config.audio, config.ambient.base_db);
    (handle, mixer)
}
