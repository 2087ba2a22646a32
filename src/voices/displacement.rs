//! Displacement voice - someone moved between receivers.
//!
//! A membrane-style drum: a sine that starts two octaves above the note and
//! drops onto it, with a long release, fed into a quarter-second echo. Only
//! one displacement voice exists and it sits in the centre; movement is
//! heard as a soft thump and its repeats rather than as a place.
//!
//! # How It Works
//!
//! 1. Sine oscillator with a fast 2-octave pitch drop (the "thump")
//! 2. 100 ms attack, 100 ms decay to almost nothing, 2 s release
//! 3. 250 ms feedback delay; the echoes keep the voice active after release

use crate::graph::{
    delay::DelayNode, envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode,
};

/// Create a displacement voice.
pub fn displacement() -> impl GraphNode {
    OscNode::sine()
        .with_pitch_drop(2.0, 0.05)
        .amplify(EnvNode::adsr(0.1, 0.1, 0.01, 2.0))
        .through(DelayNode::new(250.0, 0.3, 0.5))
}
