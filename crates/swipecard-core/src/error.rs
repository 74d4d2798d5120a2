//! Errors reported by the validating geometry entry points.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// The container was measured with zero or negative width.
    NonPositiveParentWidth(f32),
    /// The frame was measured with a negative width or height.
    NegativeDimension { width: f32, height: f32 },
    /// A position, size or parent width was NaN or infinite.
    NonFiniteInput,
    /// The drag moved straight up or down, so no exit line can be fitted.
    VerticalTrajectory { x: f32 },
    /// An integer direction other than `-1` (left) or `1` (right).
    UnsupportedDirection(i32),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonPositiveParentWidth(width) => {
                write!(f, "parent width must be positive, got {width}")
            }
            GeometryError::NegativeDimension { width, height } => {
                write!(f, "frame dimensions must be non-negative, got {width}x{height}")
            }
            GeometryError::NonFiniteInput => {
                write!(f, "frame snapshot contains a non-finite value")
            }
            GeometryError::VerticalTrajectory { x } => {
                write!(f, "vertical drag at x={x} has no exit slope")
            }
            GeometryError::UnsupportedDirection(value) => {
                write!(f, "unsupported exit direction {value}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
