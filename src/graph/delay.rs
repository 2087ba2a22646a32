use crate::{
    dsp::delay::DelayLine,
    graph::node::{GraphNode, RenderCtx},
};

/// Repeats below this level are treated as silence.
const TAIL_FLOOR: f32 = 1e-3;

/// Feedback echo. Stays active after its input stops for as long as the
/// repeats take to fall below `TAIL_FLOOR`.
pub struct DelayNode {
    delay_line: DelayLine,
    delay_ms: f32,
    feedback: f32,
    wet: f32,
    /// Samples since the input last carried signal.
    quiet_samples: usize,
    sample_rate: f32,
}

impl DelayNode {
    pub fn new(delay_ms: f32, feedback: f32, wet: f32) -> Self {
        Self {
            delay_line: DelayLine::new(),
            delay_ms,
            feedback: feedback.clamp(0.0, 0.95),
            wet,
            quiet_samples: usize::MAX,
            sample_rate: 48_000.0,
        }
    }

    fn delay_samples(&self, sample_rate: f32) -> usize {
        ((self.delay_ms / 1000.0) * sample_rate) as usize
    }

    fn tail_samples(&self, sample_rate: f32) -> usize {
        let repeats = if self.feedback > 0.0 {
            (TAIL_FLOOR.ln() / self.feedback.ln()).ceil() as usize + 1
        } else {
            1
        };
        repeats * self.delay_samples(sample_rate)
    }
}

impl GraphNode for DelayNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.sample_rate = ctx.sample_rate;
        if out.iter().any(|s| s.abs() > TAIL_FLOOR) {
            self.quiet_samples = 0;
        } else {
            self.quiet_samples = self.quiet_samples.saturating_add(out.len());
        }

        let delay_samples = self.delay_samples(ctx.sample_rate);
        self.delay_line
            .render(out, delay_samples, self.feedback, self.wet);

        if self.quiet_samples != usize::MAX && self.quiet_samples > self.tail_samples(ctx.sample_rate) {
            // Fully decayed: clear residue so a later note starts clean.
            self.delay_line.reset();
            self.quiet_samples = usize::MAX;
        }
    }

    fn is_active(&self) -> bool {
        self.quiet_samples != usize::MAX && self.quiet_samples < self.tail_samples(self.sample_rate)
    }
}
