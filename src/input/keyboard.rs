use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// accelerate = "Space"
/// toggle_fullscreen = "KeyF"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Held to speed up the camera orbit.
    Accelerate,
    /// Switch the host window in and out of fullscreen.
    ToggleFullscreen,
    /// Remove the most recent object. The population is fixed, so this
    /// is accepted and ignored.
    DeleteLast,
}
