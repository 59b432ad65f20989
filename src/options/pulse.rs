use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Shape of the global size pulse: `1 + amplitude * sin(t / time_divisor)^exponent`.
pub struct PulseOptions {
    /// Peak extra scale on top of 1.0.
    pub amplitude: f64,
    /// Milliseconds per radian of the inner sine.
    pub time_divisor: f64,
    /// Even power applied to the sine. Higher values sharpen the pulse.
    pub exponent: i32,
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            amplitude: 0.3,
            time_divisor: 100.0,
            exponent: 6,
        }
    }
}
