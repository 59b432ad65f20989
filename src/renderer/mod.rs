//! Turning the object population into draw calls.
//!
//! [`FrameRenderer`] walks the objects once per frame and talks to a
//! [`DrawContext`]. Two contexts ship with the crate: the headless
//! [`CommandRecorder`] and the wgpu-backed [`LineBatch`] owned by
//! [`WireframeRenderer`].

pub mod color;
pub mod context;
pub mod frame;
pub mod primitives;
pub mod wireframe;

pub use color::{Color, Palette};
pub use context::{CommandRecorder, DrawCommand, DrawContext};
pub use frame::FrameRenderer;
pub use primitives::WirePrimitive;
pub use wireframe::{LineBatch, LineVertex, WireframeRenderer};
