//! Input handling: key actions and the processor that turns raw key
//! events into input state and host requests.

/// Bindable key actions.
pub mod keyboard;
/// Converts raw key events into input state and host requests.
pub mod processor;

pub use keyboard::KeyAction;
pub use processor::{HostAction, InputProcessor, InputState};
