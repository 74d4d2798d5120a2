use swipecard_graphics::Dp;

use crate::gesture_constants::{BASE_ROTATION_DEGREES, DRAG_THRESHOLD};

/// Tuning knobs for a [`SwipeTracker`](crate::SwipeTracker).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Rotation factor passed to the geometry for top-half grabs. Bottom-half
    /// grabs use the negated value.
    pub rotation_degrees: f32,
    pub drag_threshold: Dp,
    /// Pixels per dp of the display the events come from.
    pub density: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            rotation_degrees: BASE_ROTATION_DEGREES,
            drag_threshold: Dp(DRAG_THRESHOLD),
            density: 1.0,
        }
    }
}

impl SwipeConfig {
    pub fn with_rotation_degrees(mut self, rotation_degrees: f32) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn drag_threshold_px(&self) -> f32 {
        self.drag_threshold.to_px(self.density)
    }
}
