//! Disappearance voice - someone left.
//!
//! The same amplitude-modulation patch as [`super::appearance`], built from
//! square waves. It plays an octave lower and sounds hollow and reedy, so a
//! departure is easy to tell from an arrival on the same floor.

use super::appearance::AM_HARMONICITY;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode};

/// Square waves are loud next to sines; pull them back to sit in the mix.
const SQUARE_TRIM: f32 = 0.35;

/// Create a disappearance voice.
pub fn disappearance() -> impl GraphNode {
    OscNode::square()
        .with_level(SQUARE_TRIM)
        .amplify(OscNode::square().with_harmonicity(AM_HARMONICITY).unipolar())
        .amplify(EnvNode::adsr(0.1, 0.1, 1.0, 0.5))
}
