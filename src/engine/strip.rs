use crate::{
    dsp::gain::{pan_gains, Smoother},
    graph::{
        lfo::LfoNode,
        node::{GraphNode, RenderCtx},
    },
    presence::location::Zone,
    sonify::trigger::VoiceId,
    voices,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    Idle,      // Nothing sounding
    Held,      // Gate open, counting down to note-off
    Releasing, // Gate closed, envelope tail still audible
}

/// One event voice with a fixed pan position.
///
/// Monophonic: a new trigger restarts the graph on the new note, cutting
/// off whatever was still ringing.
pub struct EventStrip {
    voice: VoiceId,
    graph: Box<dyn GraphNode>,
    note: u8,
    state: StripState,
    gate_remaining: usize,
    sample_rate: f32,
    gains: (f32, f32),
}

impl EventStrip {
    pub fn new(voice: VoiceId, sample_rate: f32) -> Self {
        Self {
            voice,
            graph: voices::for_voice(voice),
            note: 0,
            state: StripState::Idle,
            gate_remaining: 0,
            sample_rate,
            gains: pan_gains(voice.pan()),
        }
    }

    pub fn start(&mut self, note: u8, duration_secs: f32) {
        self.note = note;
        self.state = StripState::Held;
        self.gate_remaining = ((duration_secs.max(0.0) * self.sample_rate).round() as usize).max(1);

        let ctx = RenderCtx::from_note(self.sample_rate, note, 1.0);
        self.graph.note_on(&ctx);
    }

    pub fn release(&mut self) {
        if self.state == StripState::Held {
            self.state = StripState::Releasing;
            let ctx = RenderCtx::from_note(self.sample_rate, self.note, 1.0);
            self.graph.note_off(&ctx);
        }
    }

    /// Render one mono block. Returns false (and leaves `out` untouched)
    /// when idle.
    pub fn render(&mut self, out: &mut [f32]) -> bool {
        if self.state == StripState::Idle {
            return false;
        }
        let ctx = RenderCtx::from_note(self.sample_rate, self.note, 1.0);

        // Sample-accurate note-off: split the block at the gate boundary
        if self.state == StripState::Held && self.gate_remaining < out.len() {
            let (held, released) = out.split_at_mut(self.gate_remaining);
            self.graph.render_block(held, &ctx);
            self.release();
            self.graph.render_block(released, &ctx);
        } else {
            self.graph.render_block(out, &ctx);
            if self.state == StripState::Held {
                self.gate_remaining -= out.len();
            }
        }

        if self.state == StripState::Releasing && !self.graph.is_active() {
            self.state = StripState::Idle;
        }
        true
    }

    pub fn voice(&self) -> VoiceId {
        self.voice
    }

    pub fn state(&self) -> StripState {
        self.state
    }

    pub fn is_sounding(&self) -> bool {
        self.state != StripState::Idle
    }

    /// Equal-power `(left, right)` gains for this strip's position.
    pub fn gains(&self) -> (f32, f32) {
        self.gains
    }
}

/// One floor's drone: always playing, level from occupancy, auto-panned.
pub struct DroneStrip {
    zone: Zone,
    graph: Box<dyn GraphNode>,
    panner: LfoNode,
    level: Smoother,
    note: u8,
    sample_rate: f32,
}

impl DroneStrip {
    pub fn new(zone: Zone, sample_rate: f32, initial_gain: f32, smoothing: f32) -> Self {
        let note = voices::DRONE_NOTES[zone.index()];
        let mut graph: Box<dyn GraphNode> = Box::new(voices::drone());
        graph.note_on(&RenderCtx::from_note(sample_rate, note, 1.0));

        Self {
            zone,
            graph,
            panner: LfoNode::sine(voices::AUTOPAN_RATES_HZ[zone.index()]),
            level: Smoother::new(initial_gain, smoothing),
            note,
            sample_rate,
        }
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.level.set_target(gain);
    }

    /// Render the drone into `out` and its pan position into `pan`.
    ///
    /// The level ramps linearly across the block from where the smoother
    /// was to where it is now, so there are no steps at block edges. With
    /// no smoothing the new level holds for the whole block.
    pub fn render(&mut self, out: &mut [f32], pan: &mut [f32]) {
        let ctx = RenderCtx::from_note(self.sample_rate, self.note, 1.0);
        self.graph.render_block(out, &ctx);
        self.panner.render_block(pan, &ctx);

        let previous = self.level.current();
        let to = self.level.advance(out.len(), self.sample_rate);
        let from = if self.level.is_instant() { to } else { previous };
        let step = (to - from) / out.len().max(1) as f32;
        for (i, sample) in out.iter_mut().enumerate() {
            *sample *= from + step * (i + 1) as f32;
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn gain(&self) -> f32 {
        self.level.current()
    }

    pub fn target_gain(&self) -> f32 {
        self.level.target()
    }

    /// Left/right gains for one pan sample.
    #[inline]
    pub fn pan_at(position: f32) -> (f32, f32) {
        pan_gains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presence::location::Wing, sonify::notes::C3};

    #[test]
    fn gate_closes_inside_the_block() {
        let mut strip = EventStrip::new(VoiceId::Appearance(Wing::West), 48_000.0);
        strip.start(C3, 0.01);
        assert_eq!(strip.state(), StripState::Held);

        let mut buf = vec![0.0; 1024];
        assert!(strip.render(&mut buf));
        assert_eq!(strip.state(), StripState::Releasing);
    }

    #[test]
    fn returns_to_idle_after_tail() {
        let mut strip = EventStrip::new(VoiceId::Disappearance(Wing::East), 48_000.0);
        strip.start(C3, 0.125);
        let mut buf = vec![0.0; 1024];
        for _ in 0..60 {
            strip.render(&mut buf);
        }
        assert_eq!(strip.state(), StripState::Idle);
        assert!(!strip.render(&mut buf));
    }

    #[test]
    fn idle_strip_renders_nothing() {
        let mut strip = EventStrip::new(VoiceId::Displacement, 48_000.0);
        let mut buf = vec![7.0; 64];
        assert!(!strip.render(&mut buf));
        assert!(buf.iter().all(|&s| s == 7.0));
    }

    #[test]
    fn pan_follows_wing() {
        let west = EventStrip::new(VoiceId::Appearance(Wing::West), 48_000.0).gains();
        let east = EventStrip::new(VoiceId::Appearance(Wing::East), 48_000.0).gains();
        assert!(west.0 > 0.99 && west.1 < 0.01);
        assert!(east.1 > 0.99 && east.0 < 0.01);
    }

    #[test]
    fn unsmoothed_level_applies_from_the_first_sample() {
        let mut drone = DroneStrip::new(Zone::Cafe, 48_000.0, 1.0, 0.0);
        drone.set_gain(0.0);
        let mut out = vec![0.0; 512];
        let mut pan = vec![0.0; 512];
        drone.render(&mut out, &mut pan);

        assert!(out.iter().all(|&s| s == 0.0));
        assert_eq!(drone.gain(), 0.0);
    }

    #[test]
    fn drone_level_ramps() {
        let mut drone = DroneStrip::new(Zone::First, 48_000.0, 0.0, 0.05);
        drone.set_gain(0.5);
        let mut out = vec![0.0; 512];
        let mut pan = vec![0.0; 512];
        drone.render(&mut out, &mut pan);

        assert!(drone.gain() > 0.0 && drone.gain() < 0.5);
        assert_eq!(drone.target_gain(), 0.5);
        assert!(pan.iter().all(|p| (-1.0..=1.0).contains(p)));
    }
}
