//! Pointer input normalization for mouse and touch events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::widget::FrameHandle;

/// Coordinates carried by a host pointer event.
///
/// Mouse and pen events carry their own client coordinates; touch events
/// carry the list of active touch points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse(Point),
    Touch(Vec<Point>),
}

impl PointerSource {
    /// A mouse-style source at `(x, y)`.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self::Mouse(Point::new(x, y))
    }

    /// A touch source with the given active touch points.
    pub fn touch(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Touch(points.into_iter().collect())
    }

    /// Resolve to a single coordinate.
    ///
    /// Touch input uses its first touch point. A touch event with no active
    /// points (e.g. `touchend`) has no position.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Mouse(point) => Some(*point),
            Self::Touch(points) => points.first().copied(),
        }
    }
}

/// Pointer event routed to a frame controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Press on one of the frame's interactive regions.
    Down {
        target: FrameHandle,
        source: PointerSource,
    },
    /// Movement anywhere while a gesture holds capture.
    Move { source: PointerSource },
    /// Release of the pointer.
    Up,
    /// The host aborted the gesture (e.g. `touchcancel`).
    Cancel,
}
