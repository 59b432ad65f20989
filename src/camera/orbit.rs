//! Orbit speed/angle integration.
//!
//! The whole camera motion has one degree of freedom: the angle on a
//! horizontal circle around the origin. Each frame the speed is updated in
//! one of three regimes and then added to the angle:
//!
//! | regime        | condition                    | speed update          |
//! |---------------|------------------------------|-----------------------|
//! | accelerating  | accelerate key held          | `+ accel_step`, no cap|
//! | coasting      | key released, speed `> 0`    | `- decay_step`, `>= 0`|
//! | idle          | key released, speed `== 0`   | stays exactly `0`     |

use glam::{DVec3, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Speed gained per frame while accelerating.
pub const ACCEL_STEP: f64 = 0.005;
/// Speed lost per frame while coasting.
pub const DECAY_STEP: f64 = 0.020;
/// Radius of the eye's circle.
pub const ORBIT_RADIUS: f64 = 2000.0;

/// Coasting speeds at or below this are snapped to exactly zero so float
/// residue from repeated accel/decay steps cannot leave a creeping orbit.
const SPEED_EPSILON: f64 = 1e-9;

/// Which speed update a frame applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitRegime {
    /// Speed grew by the accel step.
    Accelerating,
    /// Speed shrank by the decay step (clamped at zero).
    Coasting,
    /// Speed was already zero and stays there.
    Idle,
}

/// Step sizes and radius of the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDynamics {
    /// Speed gained per frame while accelerating.
    pub accel_step: f64,
    /// Speed lost per frame while coasting.
    pub decay_step: f64,
    /// Radius of the eye's circle.
    pub radius: f64,
}

impl Default for OrbitDynamics {
    fn default() -> Self {
        Self {
            accel_step: ACCEL_STEP,
            decay_step: DECAY_STEP,
            radius: ORBIT_RADIUS,
        }
    }
}

/// Owns the orbit angle and speed and places the camera from them.
#[derive(Debug, Clone)]
pub struct OrbitController {
    angle: f64,
    speed: f64,
    dynamics: OrbitDynamics,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl OrbitController {
    /// Controller at rest at angle 0 (eye on `+Z`).
    #[must_use]
    pub fn new(dynamics: OrbitDynamics) -> Self {
        let defaults = CameraOptions::default();
        Self {
            angle: 0.0,
            speed: 0.0,
            dynamics,
            fovy: defaults.fovy,
            znear: defaults.znear,
            zfar: defaults.zfar,
        }
    }

    /// Controller at rest configured from user options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            ..Self::new(OrbitDynamics {
                accel_step: options.accel_step,
                decay_step: options.decay_step,
                radius: options.orbit_radius,
            })
        }
    }

    /// Start from the given speed instead of rest. Negative speeds are
    /// clamped to zero.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    /// Current orbit angle in radians (unbounded, not wrapped).
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current orbit speed in radians per frame. Never negative.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Step sizes and radius in use.
    #[must_use]
    pub fn dynamics(&self) -> OrbitDynamics {
        self.dynamics
    }

    /// Advance one frame: update speed from `accelerating`, then add the
    /// new speed to the angle.
    pub fn advance(&mut self, accelerating: bool) -> OrbitRegime {
        let regime = if accelerating {
            self.speed = (self.speed + self.dynamics.accel_step).max(0.0);
            OrbitRegime::Accelerating
        } else if self.speed > 0.0 {
            let next = self.speed - self.dynamics.decay_step;
            self.speed = if next <= SPEED_EPSILON { 0.0 } else { next };
            OrbitRegime::Coasting
        } else {
            self.speed = 0.0;
            OrbitRegime::Idle
        };
        self.angle += self.speed;
        regime
    }

    /// Eye position: `(R sin θ, 0, R cos θ)`.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(
            self.dynamics.radius * sin,
            0.0,
            self.dynamics.radius * cos,
        )
    }

    /// Camera looking from [`eye`](Self::eye) at the origin with `+Y` up.
    ///
    /// The aspect ratio is left at 1.0; draw contexts that know their
    /// viewport override it.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye().as_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitDynamics::default())
    }
}
