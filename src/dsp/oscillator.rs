use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Phase-Accumulator Oscillator
============================

Phase runs from 0.0 to 1.0 and wraps once per cycle. Each sample it advances
by `frequency / sample_rate`, and the waveform maps phase to amplitude:

    sine      sin(2π·phase)
    square    +1 for the first half of the cycle, -1 for the second

Both are bipolar in [-1, 1]. The square is not band-limited and aliases at
high pitches, which the notes used here (C2 to C4, ×3 for modulators)
don't reach.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Square,
}

pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    /// Restart the cycle, so retriggered notes begin identically.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Produce one sample at `frequency` and advance the phase.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let value = match self.waveform {
            OscillatorWaveform::Sine => (TAU * self.phase).sin(),
            OscillatorWaveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        };

        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();
        value
    }

    /// Fill `out` at the context's frequency.
    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(ctx.frequency, ctx.sample_rate);
        }
    }
}
