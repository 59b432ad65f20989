//! Read-only queries on [`OrbitEngine`] for hosts and diagnostics.

use super::OrbitEngine;
use crate::camera::{Camera, OrbitController};
use crate::options::Options;
use crate::scene::ObjectRegistry;

impl OrbitEngine {
    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The object population, in render order.
    #[must_use]
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Orbit angle and speed.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// Camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.orbit.camera()
    }

    /// Size multiplier computed by the last tick (1.0 before the first).
    #[must_use]
    pub fn size_scale(&self) -> f32 {
        self.size_scale
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
