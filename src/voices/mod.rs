//! The instruments behind each sound.
//!
//! Each voice is a ready-to-use node graph. Event voices respond to note
//! on/off; the drone runs continuously.
//!
//! ```ignore
//! use saavy_presence::voices;
//!
//! let arrival = voices::appearance();
//! let departure = voices::disappearance();
//! let movement = voices::displacement();
//! let floor = voices::drone();
//! ```

mod appearance;
mod disappearance;
mod displacement;
mod drone;

pub use appearance::appearance;
pub use disappearance::disappearance;
pub use displacement::displacement;
pub use drone::{drone, AUTOPAN_RATES_HZ, DRONE_NOTES};

use crate::{graph::GraphNode, sonify::trigger::VoiceId};

/// Build the instrument that plays `voice`.
pub fn for_voice(voice: VoiceId) -> Box<dyn GraphNode> {
    match voice {
        VoiceId::Appearance(_) => Box::new(appearance()),
        VoiceId::Displacement => Box::new(displacement()),
        VoiceId::Disappearance(_) => Box::new(disappearance()),
    }
}
