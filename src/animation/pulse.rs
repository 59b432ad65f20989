//! Global size pulse.
//!
//! A pure function of elapsed time that scales every object uniformly.
//! Raising the sine to the sixth power gives narrow, infrequent peaks over
//! long flat troughs: a heartbeat accent rather than a smooth breathing.

use crate::options::PulseOptions;

/// Peak extra scale of the default pulse.
pub const DEFAULT_AMPLITUDE: f64 = 0.3;
/// Milliseconds per radian of the default pulse's inner sine.
pub const DEFAULT_TIME_DIVISOR: f64 = 100.0;
/// Power applied to the default pulse's sine.
pub const DEFAULT_EXPONENT: i32 = 6;

/// Scale multiplier at `elapsed_ms` with the default pulse shape:
/// `1 + 0.3 * sin(elapsed_ms / 100)^6`, always in `[1.0, 1.3]`.
#[inline]
#[must_use]
pub fn compute_scale(elapsed_ms: f64) -> f64 {
    Pulse::DEFAULT.evaluate(elapsed_ms)
}

/// Parameters of `1 + amplitude * sin(t / time_divisor)^exponent`.
///
/// Holds no state between calls; evaluating out of order or skipping
/// frames cannot corrupt anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Peak extra scale on top of 1.0.
    pub amplitude: f64,
    /// Milliseconds per radian of the inner sine.
    pub time_divisor: f64,
    /// Even power applied to the sine.
    pub exponent: i32,
}

impl Pulse {
    /// The stock heartbeat pulse.
    pub const DEFAULT: Pulse = Pulse {
        amplitude: DEFAULT_AMPLITUDE,
        time_divisor: DEFAULT_TIME_DIVISOR,
        exponent: DEFAULT_EXPONENT,
    };

    /// Build from user options.
    #[must_use]
    pub fn from_options(options: &PulseOptions) -> Self {
        Self {
            amplitude: options.amplitude,
            time_divisor: options.time_divisor,
            exponent: options.exponent,
        }
    }

    /// Scale multiplier at `elapsed_ms`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, elapsed_ms: f64) -> f64 {
        if self.time_divisor == 0.0 {
            return 1.0;
        }
        1.0 + self.amplitude * (elapsed_ms / self.time_divisor).sin().powi(self.exponent)
    }

    /// Distance between two peaks in milliseconds.
    ///
    /// Even powers fold the negative half of the sine onto the positive
    /// one, halving the period of the inner sine.
    #[must_use]
    pub fn period_ms(&self) -> f64 {
        let sine_period = std::f64::consts::TAU * self.time_divisor.abs();
        if self.exponent % 2 == 0 {
            sine_period / 2.0
        } else {
            sine_period
        }
    }
}

impl Default for Pulse {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
