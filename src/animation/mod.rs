//! Frame-to-frame animation.
//!
//! The only animated quantity is the global size pulse; it is recomputed
//! from wall-clock time every frame and carries no state.

pub mod pulse;

pub use pulse::{compute_scale, Pulse};
