//! Composable building blocks for the instruments.
//!
//! Graph nodes wrap the DSP primitives with note events and block-based
//! rendering. The `extensions` module adds `.amplify()` and `.through()` so
//! the voices in [`crate::voices`] read as signal chains.

/// Multiply two signals together (envelope or amplitude modulation).
pub mod amplify;
/// Feedback echo.
pub mod delay;
/// Envelope generator node exposing ADSR state.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.through()`).
pub mod extensions;
/// Low frequency oscillators for auto-panning.
pub mod lfo;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use extensions::NodeExt;
pub use node::{GraphNode, RenderCtx};
