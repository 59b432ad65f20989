//! The object registry: a fixed population of boxes and spheres.
//!
//! Objects are created once at startup and never change afterwards. The
//! renderer borrows them read-only for the duration of a frame.

mod object;
mod registry;

pub use object::{OrbitObject, Shape, ShapeKind};
pub use registry::{ObjectRegistry, RawObject};
