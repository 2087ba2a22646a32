use crate::sonify::notes::midi_note_to_freq;

/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
/// - velocity: Intensity (0.0-1.0)
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub velocity: f32,
}

impl RenderCtx {
    /// Create context from a MIDI note number (event triggers, drones)
    pub fn from_note(sample_rate: f32, note: u8, velocity: f32) -> Self {
        Self {
            sample_rate,
            frequency: midi_note_to_freq(note),
            velocity,
        }
    }

    /// Create context from a frequency in Hz (LFOs, tests)
    pub fn from_freq(sample_rate: f32, frequency: f32, velocity: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            velocity,
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes render mono blocks and respond to note events.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    fn note_on(&mut self, _ctx: &RenderCtx) {}

    /// Triggered when a note is released
    fn note_off(&mut self, _ctx: &RenderCtx) {}

    fn get_envelope_level(&self) -> Option<f32> {
        None
    }

    /// Check if this node is still producing sound
    ///
    /// Used by the mixer to skip silent voices.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn get_envelope_level(&self) -> Option<f32> {
        (**self).get_envelope_level()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
