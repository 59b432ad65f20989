use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Orbit dynamics and projection parameters.
pub struct CameraOptions {
    /// Radius of the horizontal circle the eye travels on.
    pub orbit_radius: f64,
    /// Speed gained per frame while the accelerate key is held.
    pub accel_step: f64,
    /// Speed lost per frame while coasting.
    pub decay_step: f64,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            orbit_radius: 2000.0,
            accel_step: 0.005,
            decay_step: 0.020,
            fovy: 60.0,
            znear: 1.0,
            zfar: 10_000.0,
        }
    }
}

impl CameraOptions {
    /// Reject step sizes and radii that would break the speed invariants.
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (name, step) in [
            ("camera.accel_step", self.accel_step),
            ("camera.decay_step", self.decay_step),
        ] {
            if !step.is_finite() || step <= 0.0 {
                return Err(format!("{name} must be positive, got {step}"));
            }
        }
        if !self.orbit_radius.is_finite() {
            return Err(format!(
                "camera.orbit_radius must be finite, got {}",
                self.orbit_radius
            ));
        }
        Ok(())
    }
}
