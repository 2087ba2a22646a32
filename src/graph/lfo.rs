use crate::{
    dsp::oscillator::OscillatorBlock,
    graph::node::{GraphNode, RenderCtx},
};

/*
LFO (Low Frequency Oscillator)
==============================

An oscillator at a fixed sub-audio rate, used to move a parameter over time
rather than to be heard. It ignores the note frequency in RenderCtx.

The floor drones use one each as an auto-panner: the LFO output (-1..1) is
the drone's stereo position, so each floor slowly sweeps left and right at
its own rate (0.25, 0.5, 1 and 2 Hz from cafe to third) and the four never
line up for long.
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    frequency: f32,
}

impl LfoNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            *sample = self.osc.next_sample(self.frequency, ctx.sample_rate);
        }
    }
}
