use crate::MAX_DELAY_SAMPLES;

/// Circular delay line with feedback, for echoes.
///
/// Output is `dry + wet * delayed`; the delayed signal is fed back into the
/// line scaled by `feedback`, so each repeat is quieter than the last.
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    pub fn new() -> Self {
        Self {
            buffer: vec![0.0; MAX_DELAY_SAMPLES],
            write_pos: 0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, input: f32, delay_samples: usize, feedback: f32, wet: f32) -> f32 {
        let delay_samples = delay_samples.clamp(1, MAX_DELAY_SAMPLES - 1);
        let read_pos = (self.write_pos + MAX_DELAY_SAMPLES - delay_samples) % MAX_DELAY_SAMPLES;
        let delayed = self.buffer[read_pos];

        self.buffer[self.write_pos] = input + delayed * feedback;
        self.write_pos = (self.write_pos + 1) % MAX_DELAY_SAMPLES;

        input + delayed * wet
    }

    pub fn render(&mut self, buffer: &mut [f32], delay_samples: usize, feedback: f32, wet: f32) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, delay_samples, feedback, wet);
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

impl Default for DelayLine {
    fn default() -> Self {
        Self::new()
    }
}
