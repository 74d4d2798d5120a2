//! Geometry core for swipeable cards
//!
//! A [`FrameGeometry`] is a snapshot of a card taken when a drag begins. It
//! turns touch deltas into positions, rotation and scroll progress, and turns
//! a release into either a recenter target or an off-screen exit target.
//! Nothing here animates or listens to input; callers feed it numbers.

mod error;
mod frame;
mod position;

pub use error::GeometryError;
pub use frame::FrameGeometry;
pub use position::{Direction, ExitPosition, RecenterPosition, TouchZone, UpdatePosition};
pub use swipecard_graphics::Point;

pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::frame::FrameGeometry;
    pub use crate::position::{
        Direction, ExitPosition, RecenterPosition, TouchZone, UpdatePosition,
    };
    pub use swipecard_graphics::{Point, Rect, Size};
}
