//! Container geometry: position and size in page pixels.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Smallest width the container may shrink to.
pub const MIN_WIDTH: f64 = 150.0;
/// Smallest height the container may shrink to.
pub const MIN_HEIGHT: f64 = 100.0;

/// Width used when nothing else is configured.
pub const DEFAULT_WIDTH: f64 = 600.0;
/// Height used when nothing else is configured.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// The container's bounding box.
///
/// `position` is the top-left corner (`x` = left, `y` = top). Position is
/// unconstrained; size is kept at or above the configured minimum by the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub position: Point,
    pub size: Size,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

impl FrameGeometry {
    /// Create a new geometry.
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Bounding rectangle in page coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// The built-in minimum size (150x100).
pub fn default_min_size() -> Size {
    Size::new(MIN_WIDTH, MIN_HEIGHT)
}

/// Clamp each axis of `size` independently to at least `min`.
///
/// A NaN component resolves to the minimum.
pub fn clamp_size(size: Size, min: Size) -> Size {
    Size::new(size.width.max(min.width), size.height.max(min.height))
}
