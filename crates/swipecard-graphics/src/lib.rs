//! Pure math/data for swipecard
//!
//! This crate contains the point, size, rect and unit types shared by the
//! geometry core and the gesture tracker.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
