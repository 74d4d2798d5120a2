//! Frame snapshot and the drag/release math built on it.

use swipecard_graphics::{Point, Rect};

use crate::{Direction, ExitPosition, GeometryError, RecenterPosition, TouchZone, UpdatePosition};

/// Fraction of the parent width where the neutral zone starts.
const LEFT_BORDER_FRACTION: f32 = 0.25;
/// Fraction of the parent width where the neutral zone ends.
const RIGHT_BORDER_FRACTION: f32 = 0.75;

/// Snapshot of a card taken at the start of a drag.
///
/// Every method is a pure function of the snapshot and its arguments, so a
/// single instance can answer any number of move and release queries for
/// the gesture it was created for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    start_x: f32,
    start_y: f32,
    height: f32,
    width: f32,
    parent_width: f32,
    left_border: f32,
    right_border: f32,
}

impl FrameGeometry {
    /// Captures the frame at `initial_position` with the given size inside a
    /// container `parent_width` wide.
    ///
    /// No validation happens here. A zero `parent_width` makes rotation and
    /// exit rotation non-finite; use [`FrameGeometry::try_new`] to reject it.
    pub fn new(initial_position: Point, height: f32, width: f32, parent_width: f32) -> Self {
        Self {
            start_x: initial_position.x,
            start_y: initial_position.y,
            height,
            width,
            parent_width,
            left_border: parent_width * LEFT_BORDER_FRACTION,
            right_border: parent_width * RIGHT_BORDER_FRACTION,
        }
    }

    /// Validating variant of [`FrameGeometry::new`].
    pub fn try_new(
        initial_position: Point,
        height: f32,
        width: f32,
        parent_width: f32,
    ) -> Result<Self, GeometryError> {
        if !initial_position.is_finite()
            || !height.is_finite()
            || !width.is_finite()
            || !parent_width.is_finite()
        {
            return Err(GeometryError::NonFiniteInput);
        }
        if parent_width <= 0.0 {
            return Err(GeometryError::NonPositiveParentWidth(parent_width));
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeDimension { width, height });
        }
        Ok(Self::new(initial_position, height, width, parent_width))
    }

    /// Snapshots a laid-out frame. The rect must be measured before any drag
    /// transform is applied to it.
    pub fn from_rect(frame: Rect, parent_width: f32) -> Result<Self, GeometryError> {
        Self::try_new(frame.origin(), frame.height, frame.width, parent_width)
    }

    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn parent_width(&self) -> f32 {
        self.parent_width
    }

    pub fn left_border(&self) -> f32 {
        self.left_border
    }

    pub fn right_border(&self) -> f32 {
        self.right_border
    }

    /// Which half of the card a touch at `touch_y` (relative to the card's
    /// top edge) landed in.
    pub fn classify_touch(&self, touch_y: f32) -> TouchZone {
        if touch_y < self.height / 2.0 {
            TouchZone::Top
        } else {
            TouchZone::Bottom
        }
    }

    /// Position, rotation and progress for a drag of `(dx, dy)` from the
    /// snapshot position.
    pub fn compute_update(&self, dx: f32, dy: f32, rotation_factor: f32) -> UpdatePosition {
        UpdatePosition {
            x: self.start_x + dx,
            y: self.start_y + dy,
            rotation_degrees: 2.0 * rotation_factor * dx / self.parent_width,
            scroll_progress: self.compute_scroll_progress(dx),
        }
    }

    /// How far the card's center has travelled through the neutral zone,
    /// in `[-1, 1]`.
    ///
    /// A center past either border saturates to `-1` or `1` whatever the
    /// drag direction. Inside the zone a moving card maps linearly from `-1`
    /// at the left border to `1` at the right border, and an undragged card
    /// reports `0`. For a card resting off the zone midpoint the value jumps
    /// at `dx == 0`.
    pub fn compute_scroll_progress(&self, dx: f32) -> f32 {
        let center_x = self.start_x + dx + self.width / 2.0;
        let half_range = (self.right_border - self.left_border) / 2.0;

        if center_x < self.left_border {
            -1.0
        } else if center_x > self.right_border {
            1.0
        } else if dx > 0.0 {
            1.0 - (self.right_border - center_x) / half_range
        } else if dx < 0.0 {
            (center_x - self.left_border) / half_range - 1.0
        } else {
            0.0
        }
    }

    pub fn recenter_position(&self) -> RecenterPosition {
        RecenterPosition {
            x: self.start_x,
            y: self.start_y,
        }
    }

    /// Off-screen target for a card released at `current` and leaving
    /// towards `direction`.
    ///
    /// The exit point continues the line from the snapshot position through
    /// `current`, and sits far enough past the edge that the rotated card is
    /// fully hidden. Fails when that line is vertical.
    pub fn exit_position(
        &self,
        current: Point,
        direction: Direction,
        rotation_factor: f32,
    ) -> Result<ExitPosition, GeometryError> {
        let overshoot = rotation_width_offset(self.width, rotation_factor);
        let exit_x = match direction {
            Direction::Left => -self.width - overshoot,
            Direction::Right => self.parent_width + overshoot,
        };
        let exit_y = self.linear_exit_y(current, exit_x)?;
        let rotation_degrees =
            2.0 * rotation_factor * (self.width - self.start_x) / self.parent_width;

        log::trace!(
            "exit {direction:?} from ({}, {}) -> ({exit_x}, {exit_y}) at {rotation_degrees} deg",
            current.x,
            current.y
        );

        Ok(ExitPosition {
            x: exit_x,
            y: exit_y,
            rotation_degrees,
        })
    }

    fn linear_exit_y(&self, current: Point, exit_x: f32) -> Result<f32, GeometryError> {
        // Bitwise so that -0.0 and 0.0 count as different heights.
        if current.y.to_bits() == self.start_y.to_bits() {
            return Ok(self.start_y);
        }
        if current.x == self.start_x {
            return Err(GeometryError::VerticalTrajectory { x: current.x });
        }

        let slope = (current.y - self.start_y) / (current.x - self.start_x);
        Ok(self.start_y + slope * (exit_x - self.start_x))
    }
}

/// Extra horizontal room a card of `width` needs once rotated by
/// `2 * rotation_factor` degrees.
fn rotation_width_offset(width: f32, rotation_factor: f32) -> f32 {
    width / (2.0 * rotation_factor).to_radians().cos() - width
}

#[cfg(test)]
#[path = "tests/frame_geometry_tests.rs"]
mod tests;
