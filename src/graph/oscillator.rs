use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{GraphNode, RenderCtx};

/*
Oscillator Node
===============

Wraps an `OscillatorBlock` and decides what frequency it runs at:

  default          the note's frequency from RenderCtx
  with_harmonicity the note's frequency × ratio; an AM modulator at 3× the
                   carrier puts sidebands at 2× and 4×, a bell-ish shimmer
  with_pitch_drop  starts `octaves` above the note and glides down onto it,
                   which is what makes a membrane/drum sound "thump"

`unipolar()` shifts the output from [-1, 1] to [0, 1]. Use it when the node
is the modulator in an amplitude-modulation pair, so the carrier is scaled
rather than ring-modulated:

  // AM synth: sine carrier, sine modulator at 3×
  OscNode::sine()
      .amplify(OscNode::sine().with_harmonicity(3.0).unipolar())
      .amplify(EnvNode::adsr(0.1, 0.1, 0.3, 0.3))
*/

pub struct OscNode {
    osc: OscillatorBlock,
    harmonicity: f32,
    unipolar: bool,
    level: f32,
    /// Glide: starting multiplier (2^octaves) and time constant in seconds.
    pitch_drop: Option<(f32, f32)>,
    /// Current glide multiplier, decays toward 1.0 after note_on.
    sweep: f32,
}

impl OscNode {
    fn new(osc: OscillatorBlock) -> Self {
        Self {
            osc,
            harmonicity: 1.0,
            unipolar: false,
            level: 1.0,
            pitch_drop: None,
            sweep: 1.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorBlock::sine())
    }

    pub fn square() -> Self {
        Self::new(OscillatorBlock::square())
    }

    /// Run at `ratio` times the note frequency.
    pub fn with_harmonicity(mut self, ratio: f32) -> Self {
        self.harmonicity = ratio;
        self
    }

    /// Output in [0, 1] instead of [-1, 1].
    pub fn unipolar(mut self) -> Self {
        self.unipolar = true;
        self
    }

    /// Scale the output by a fixed gain.
    pub fn with_level(mut self, level: f32) -> Self {
        self.level = level;
        self
    }

    /// Start each note `octaves` above pitch and glide down with time
    /// constant `decay` seconds.
    pub fn with_pitch_drop(mut self, octaves: f32, decay: f32) -> Self {
        self.pitch_drop = Some((2.0_f32.powf(octaves), decay.max(1e-4)));
        self
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let base = ctx.frequency * self.harmonicity;

        match self.pitch_drop {
            None => {
                for sample in out.iter_mut() {
                    *sample = self.osc.next_sample(base, ctx.sample_rate);
                }
            }
            Some((_, decay)) => {
                // Per-sample decay toward 1.0: sweep = 1 + (sweep - 1) * k
                let k = (-1.0 / (decay * ctx.sample_rate)).exp();
                for sample in out.iter_mut() {
                    *sample = self.osc.next_sample(base * self.sweep, ctx.sample_rate);
                    self.sweep = 1.0 + (self.sweep - 1.0) * k;
                }
            }
        }

        if self.unipolar {
            for sample in out.iter_mut() {
                *sample = 0.5 * (*sample + 1.0);
            }
        }
        if self.level != 1.0 {
            for sample in out.iter_mut() {
                *sample *= self.level;
            }
        }
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.osc.reset();
        if let Some((start, _)) = self.pitch_drop {
            self.sweep = start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::from_note(sample_rate, 69, 1.0);
        let mut osc = OscNode::sine();

        let mut buffer = vec![0.0f32; 128];
        osc.render_block(&mut buffer, &ctx);

        let expected = (TAU * 440.0 * 12.0 / sample_rate).sin();
        assert!((buffer[12] - expected).abs() < 1e-4, "expected {expected}, got {}", buffer[12]);
    }

    #[test]
    fn unipolar_is_non_negative() {
        let ctx = RenderCtx::from_freq(48_000.0, 300.0, 1.0);
        let mut osc = OscNode::sine().with_harmonicity(3.0).unipolar();
        let mut buffer = vec![0.0f32; 1024];
        osc.render_block(&mut buffer, &ctx);

        assert!(buffer.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn pitch_drop_settles_on_note() {
        let ctx = RenderCtx::from_freq(48_000.0, 100.0, 1.0);
        let mut osc = OscNode::square().with_pitch_drop(2.0, 0.01);
        osc.note_on(&ctx);

        // First 10 ms: four times the pitch means far more zero crossings
        let mut early = vec![0.0f32; 480];
        osc.render_block(&mut early, &ctx);
        let mut settle = vec![0.0f32; 48_000];
        osc.render_block(&mut settle, &ctx);
        let mut late = vec![0.0f32; 480];
        osc.render_block(&mut late, &ctx);

        let crossings = |b: &[f32]| b.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(crossings(&early) > crossings(&late));
        assert!(crossings(&late) <= 3, "100 Hz over 10 ms is one cycle");
    }
}
