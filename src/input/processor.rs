//! Converts raw key events into input state and host requests.
//!
//! The `InputProcessor` owns the only piece of input state the frame loop
//! reads (whether the accelerate key is held) and the key-binding map.
//! The frame loop never reads ambient flags: the host asks the processor
//! for [`InputState`] and passes it into
//! [`OrbitEngine::tick`](crate::engine::OrbitEngine::tick) explicitly.

use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;

/// Snapshot of the input state consumed by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    /// Whether the accelerate key is currently held.
    pub accelerating: bool,
}

/// Requests the processor forwards untouched to the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Enter or leave fullscreen.
    ToggleFullscreen,
}

/// Converts raw key events into [`InputState`] changes and
/// [`HostAction`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(HostAction::ToggleFullscreen) =
///     input.handle_key("KeyF", true)
/// {
///     toggle_fullscreen(&window);
/// }
/// engine.tick(elapsed_ms, input.state().accelerating, &mut ctx);
/// ```
pub struct InputProcessor {
    state: InputState,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::default(),
            key_bindings,
        }
    }

    /// Current input state.
    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Process a key press (`pressed = true`) or release.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format (`"Space"`,
    /// `"KeyF"`). Unbound keys are ignored.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<HostAction> {
        let action = self.key_bindings.lookup(key)?;
        match action {
            KeyAction::Accelerate => {
                if self.state.accelerating != pressed {
                    log::debug!("accelerate {}", if pressed { "on" } else { "off" });
                }
                self.state.accelerating = pressed;
                None
            }
            KeyAction::ToggleFullscreen if pressed => {
                Some(HostAction::ToggleFullscreen)
            }
            KeyAction::DeleteLast if !pressed => {
                log::debug!("delete key ignored: object population is fixed");
                None
            }
            KeyAction::ToggleFullscreen | KeyAction::DeleteLast => None,
        }
    }

    /// Drop any held keys, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.state = InputState::default();
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
