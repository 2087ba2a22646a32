//! Floor drone - the continuous tone behind each floor.
//!
//! An amplitude-modulated sine whose modulator runs at the same pitch as the
//! carrier, giving a slow, breathing tone. Drones never stop; the mixer sets
//! their loudness from occupancy and pans each one with its own LFO.

use crate::{
    graph::{extensions::NodeExt, oscillator::OscNode, GraphNode},
    sonify::notes::{C2, C3, E2, G2},
};

/// Create a drone. Its pitch comes from the note it is rendered with.
pub fn drone() -> impl GraphNode {
    OscNode::sine().amplify(OscNode::sine().unipolar())
}

/// Drone pitch per floor, cafe to third floor.
pub const DRONE_NOTES: [u8; 4] = [C2, E2, G2, C3];

/// Auto-pan rate in Hz per floor, cafe to third floor.
pub const AUTOPAN_RATES_HZ: [f32; 4] = [0.25, 0.5, 1.0, 2.0];
