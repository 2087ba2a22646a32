//! Gain staging: decibels, stereo panning and parameter smoothing.

use std::f32::consts::FRAC_PI_4;

/// Decibels to linear amplitude. -6 dB ≈ 0.5, -18 dB ≈ 0.126.
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Equal-power pan law.
///
/// `position` runs from -1.0 (left) to 1.0 (right). Returns `(left, right)`
/// gains whose squares always sum to 1, so a sound keeps its loudness as it
/// moves across the field. Centre is -3 dB on each side.
#[inline]
pub fn pan_gains(position: f32) -> (f32, f32) {
    let angle = (position.clamp(-1.0, 1.0) + 1.0) * FRAC_PI_4;
    (angle.cos(), angle.sin())
}

/// One-pole smoother, so level changes ramp instead of stepping.
#[derive(Debug, Clone, Copy)]
pub struct Smoother {
    current: f32,
    target: f32,
    time_constant: f32,
}

impl Smoother {
    pub fn new(initial: f32, time_constant: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            time_constant: time_constant.max(0.0),
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// A zero time constant: every new target applies at once.
    pub fn is_instant(&self) -> bool {
        self.time_constant == 0.0
    }

    /// Move toward the target by one block of `frames` samples.
    pub fn advance(&mut self, frames: usize, sample_rate: f32) -> f32 {
        if self.time_constant == 0.0 {
            self.current = self.target;
        } else {
            let elapsed = frames as f32 / sample_rate;
            let coeff = 1.0 - (-elapsed / self.time_constant).exp();
            self.current += (self.target - self.current) * coeff;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decibels() {
        assert_relative_eq!(db_to_gain(0.0), 1.0);
        assert_relative_eq!(db_to_gain(-20.0), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn pan_is_equal_power() {
        for pos in [-1.0, -0.3, 0.0, 0.5, 1.0] {
            let (l, r) = pan_gains(pos);
            assert_relative_eq!(l * l + r * r, 1.0, epsilon = 1e-6);
        }
        let (l, r) = pan_gains(-1.0);
        assert_relative_eq!(l, 1.0, epsilon = 1e-6);
        assert!(r.abs() < 1e-6);
        let (l, r) = pan_gains(0.0);
        assert_relative_eq!(l, r, epsilon = 1e-6);
    }

    #[test]
    fn smoother_converges() {
        let mut s = Smoother::new(0.0, 0.01);
        for _ in 0..100 {
            s.advance(480, 48_000.0);
        }
        assert_eq!(s.current(), 0.0);
        s.set_target(1.0);
        let first = s.advance(480, 48_000.0);
        assert!(first > 0.0 && first < 1.0);
        for _ in 0..100 {
            s.advance(480, 48_000.0);
        }
        assert_relative_eq!(s.current(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_time_constant_jumps() {
        let mut s = Smoother::new(0.0, 0.0);
        assert!(s.is_instant());
        assert!(!Smoother::new(0.0, 0.01).is_instant());
        s.set_target(0.5);
        assert_eq!(s.advance(1, 48_000.0), 0.5);
    }
}
