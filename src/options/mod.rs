//! Centralized scene/camera/display options with TOML preset support.
//!
//! Every tweakable constant of the visualization (population, orbit
//! dynamics, pulse shape, frame pacing, keybindings) is consolidated here.
//! Options serialize to/from TOML so a preset can override any subset.

mod camera;
mod display;
mod keybindings;
mod pulse;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use pulse::PulseOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::PolyorbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Object population and placement.
    pub scene: SceneOptions,
    /// Orbit dynamics and projection.
    pub camera: CameraOptions,
    /// Size pulse shape.
    pub pulse: PulseOptions,
    /// Frame pacing and wireframe appearance.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Values that parse but cannot drive the scene (non-finite spread,
    /// non-positive orbit steps, an empty size range) are rejected as
    /// [`PolyorbitError::OptionsParse`].
    pub fn from_toml(content: &str) -> Result<Self, PolyorbitError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| PolyorbitError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Check every section for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), PolyorbitError> {
        self.scene
            .validate()
            .and_then(|()| self.camera.validate())
            .map_err(PolyorbitError::OptionsParse)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PolyorbitError> {
        let content =
            std::fs::read_to_string(path).map_err(PolyorbitError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PolyorbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PolyorbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PolyorbitError::Io)?;
        }
        std::fs::write(path, content).map_err(PolyorbitError::Io)
    }
}
