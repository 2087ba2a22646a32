//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once constructed and realtime-safe,
//! so they can live inside voices on the audio thread. They stay focused on
//! signal math; the graph layer adds note events and composition.

/// Circular delay line with feedback.
pub mod delay;
/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Decibel conversion, pan law and smoothing.
pub mod gain;
/// Oscillator waveforms and noise sources.
pub mod oscillator;

pub use envelope::EnvelopeState;
