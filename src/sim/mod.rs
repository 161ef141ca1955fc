//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches input
//! devices, windows or clocks:
//! - One tick per call, `1 / frame_rate` seconds each
//! - Integer geometry for collision, sub-pixel ball position
//! - Clamping instead of range errors

pub mod geometry;
pub mod state;
pub mod tick;
pub mod vector;

pub use geometry::{Interval, Rect, intervals_overlap, rects_intersect};
pub use state::{Ball, GameState, Paddle};
pub use tick::{GameEvent, tick};
pub use vector::{Scalar, add_tuples, scale_tuple};
