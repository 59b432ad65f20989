//! Camera system: an eye that orbits the world origin on a horizontal
//! circle, driven by a single speed value.

/// Perspective camera and its shader uniform.
pub mod core;
/// Orbit speed/angle integration and eye placement.
pub mod orbit;

pub use self::core::{Camera, CameraUniform};
pub use orbit::{OrbitController, OrbitDynamics, OrbitRegime};
