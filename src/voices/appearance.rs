//! Appearance voice - someone arrived.
//!
//! A soft amplitude-modulated sine. The modulator runs at three times the
//! carrier, adding a faint bell-like shimmer above the note without making it
//! bright. One copy of this voice sits at each wing's pan position.
//!
//! # How It Works
//!
//! 1. Sine carrier at the note pitch
//! 2. Sine modulator at 3× pitch, shifted to 0..1 so it scales the carrier
//! 3. 100 ms attack and decay: a gentle swell rather than a click
//! 4. Half-second release lets short notes ring out

use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode};

/// Harmonicity of the AM modulator relative to the note.
pub(crate) const AM_HARMONICITY: f32 = 3.0;

/// Create an appearance voice.
pub fn appearance() -> impl GraphNode {
    OscNode::sine()
        .amplify(OscNode::sine().with_harmonicity(AM_HARMONICITY).unipolar())
        .amplify(EnvNode::adsr(0.1, 0.1, 1.0, 0.5))
}
