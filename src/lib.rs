// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in Cargo.toml; these are the ones that must also
// hold for doc builds and non-cargo tooling.

// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on exact values and unwrap freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Wireframe boxes and spheres orbited by an accelerating camera, on wgpu.
//!
//! Twenty randomly placed shapes pulse in size while a camera circles the
//! origin. Holding the accelerate key spins the camera up; releasing it
//! lets the orbit coast to a stop.
//!
//! # Key entry points
//!
//! - [`engine::OrbitEngine`] - the per-frame driver (`tick`)
//! - [`renderer::DrawContext`] - the drawing surface frames are issued to
//! - [`options::Options`] - runtime configuration (scene, camera, pulse,
//!   display, key bindings)
//! - `Viewer` - a ready-made winit window (feature `viewer`)
//!
//! # Architecture
//!
//! Each tick computes the pulse scale from elapsed time, advances the orbit
//! controller by one step, then walks the [`scene::ObjectRegistry`] and
//! issues line, box and sphere draws. The GPU backend
//! ([`renderer::WireframeRenderer`]) expands those draws into one colored
//! line list and draws it in a single pass. Tests run the same frames
//! against [`renderer::CommandRecorder`] without a GPU.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::OrbitEngine;
pub use error::PolyorbitError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
