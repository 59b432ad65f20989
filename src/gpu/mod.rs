//! GPU plumbing for the wireframe pass.
//!
//! Device and surface setup, the depth target, the per-frame vertex
//! stream and pipeline boilerplate.

/// Shared wgpu pipeline/binding helpers.
pub mod pipeline_helpers;
/// Device, queue, window surface and depth buffer.
pub mod render_context;
/// Depth render target.
pub mod texture;
/// Vertex buffer refilled every frame.
pub mod vertex_stream;
