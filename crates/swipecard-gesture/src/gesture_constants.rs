//! Shared gesture constants for swipe handling.
//!
//! # DPI Considerations
//!
//! The drag threshold is in density-independent pixels and is scaled by
//! [`SwipeConfig::density`](crate::SwipeConfig) before it is compared with
//! pointer positions.

/// Drag threshold (touch slop) in dp.
///
/// If the pointer moves more than this distance from the press position the
/// card starts following it and a release is no longer a click.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Rotation factor, in degrees, handed to the geometry when none is configured.
///
/// A card dragged across the full container width tilts by twice this value.
pub const BASE_ROTATION_DEGREES: f32 = 15.0;
