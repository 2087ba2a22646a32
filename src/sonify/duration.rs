use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Musical note duration represented as a rational fraction of a whole note.
/// Operations keep exact ratios; floats appear only in `to_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    /// Numerator: how many parts
    pub numerator: u32,
    /// Denominator: of what size (4 = quarter, 8 = eighth, etc.)
    pub denominator: u32,
}

impl Duration {
    pub const WHOLE: Duration = Duration::of(1);
    pub const HALF: Duration = Duration::of(2);
    pub const QUARTER: Duration = Duration::of(4);
    pub const EIGHTH: Duration = Duration::of(8);
    pub const SIXTEENTH: Duration = Duration::of(16);
    pub const THIRTY_SECOND: Duration = Duration::of(32);

    /// `1/subdivision` of a whole note.
    pub const fn of(subdivision: u32) -> Self {
        Duration {
            numerator: 1,
            denominator: subdivision,
        }
    }

    /// Apply a dot: multiply duration by 3/2 (increases by 50%)
    pub const fn dotted(self) -> Self {
        Duration {
            numerator: self.numerator * 3,
            denominator: self.denominator * 2,
        }
        .reduce()
    }

    /// Three notes in the time of two: multiply by 2/3.
    pub const fn triplet(self) -> Self {
        Duration {
            numerator: self.numerator * 2,
            denominator: self.denominator * 3,
        }
        .reduce()
    }

    /// Reduce the fraction to lowest terms using GCD
    pub const fn reduce(self) -> Self {
        let gcd = const_gcd(self.numerator, self.denominator);
        Duration {
            numerator: self.numerator / gcd,
            denominator: self.denominator / gcd,
        }
    }

    /// Length in seconds at `bpm` quarter notes per minute.
    ///
    /// A whole note is four beats, so at 120 BPM a sixteenth lasts 0.125 s.
    pub fn to_seconds(self, bpm: f32) -> f32 {
        let whole_note_secs = 4.0 * 60.0 / bpm;
        whole_note_secs * self.numerator as f32 / self.denominator as f32
    }
}

/// Compute greatest common divisor (Euclidean algorithm)
const fn const_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note duration `{0}`: expected e.g. `4n`, `16n`, `8n.` or `8t`")]
pub struct ParseDurationError(String);

/// Transport notation: `<subdivision>n`, optionally followed by `.` (dotted)
/// or preceded by `t` in place of `n` (triplet). `16n`, `4n.`, `8t`.
impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDurationError(s.to_string());
        let trimmed = s.trim();

        let (body, dotted) = match trimmed.strip_suffix('.') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let (digits, triplet) = if let Some(digits) = body.strip_suffix('n') {
            (digits, false)
        } else if let Some(digits) = body.strip_suffix('t') {
            (digits, true)
        } else {
            return Err(err());
        };

        let subdivision: u32 = digits.parse().map_err(|_| err())?;
        if !subdivision.is_power_of_two() || subdivision > 64 {
            return Err(err());
        }

        let mut duration = Duration::of(subdivision);
        if dotted {
            duration = duration.dotted();
        }
        if triplet {
            duration = duration.triplet();
        }
        Ok(duration)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
