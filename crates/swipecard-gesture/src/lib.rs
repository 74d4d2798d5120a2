//! Swipe tracking for cards
//!
//! [`SwipeTracker`] sits between a pointer event source and the pure
//! geometry in `swipecard-core`: it tells taps from drags, picks the rotation
//! sign from where the card was grabbed, and decides on release whether the
//! card leaves the screen or springs back.

mod config;
pub mod gesture_constants;
mod pointer;
mod tracker;

pub use config::SwipeConfig;
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use tracker::{SwipeAction, SwipeListener, SwipeTracker};

pub use swipecard_core::{Direction, ExitPosition, GeometryError, RecenterPosition, UpdatePosition};
pub use swipecard_graphics::{Point, Rect, Size};
