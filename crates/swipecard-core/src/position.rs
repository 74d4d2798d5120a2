//! Value types produced by [`FrameGeometry`](crate::FrameGeometry).

use crate::GeometryError;

/// Side of the viewport a card leaves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Commit rule for a release: a fully saturated scroll progress picks the
    /// side, anything inside the neutral zone does not commit.
    pub fn from_scroll_progress(progress: f32) -> Option<Direction> {
        if progress <= -1.0 {
            Some(Direction::Left)
        } else if progress >= 1.0 {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = GeometryError;

    /// Accepts `-1` for left and `1` for right.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            other => Err(GeometryError::UnsupportedDirection(other)),
        }
    }
}

/// Half of the card a touch landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchZone {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdatePosition {
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
    /// Normalized progress through the neutral zone, in `[-1, 1]`.
    pub scroll_progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecenterPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitPosition {
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
}
