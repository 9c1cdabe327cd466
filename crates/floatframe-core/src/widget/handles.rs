//! Interactive regions of the frame.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::FrameGeometry;
use crate::session::GestureKind;

/// Height of the drag handle bar along the top edge, in pixels.
pub const HANDLE_HEIGHT: f64 = 28.0;
/// Side length of the square resize grip in the bottom-right corner.
pub const GRIP_SIZE: f64 = 16.0;

/// The region of the frame a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameHandle {
    /// Title bar; moves the frame.
    DragHandle,
    /// Bottom-right corner grip; resizes the frame.
    ResizeGrip,
}

impl FrameHandle {
    /// The gesture this handle starts.
    pub fn gesture(&self) -> GestureKind {
        match self {
            Self::DragHandle => GestureKind::Drag,
            Self::ResizeGrip => GestureKind::Resize,
        }
    }
}

/// Drag handle region: a bar across the top of the frame.
pub fn handle_rect(geometry: &FrameGeometry) -> Rect {
    let bounds = geometry.rect();
    Rect::new(
        bounds.x0,
        bounds.y0,
        bounds.x1,
        bounds.y0 + HANDLE_HEIGHT.min(bounds.height()),
    )
}

/// Resize grip region: a square inset into the bottom-right corner.
pub fn grip_rect(geometry: &FrameGeometry) -> Rect {
    let bounds = geometry.rect();
    Rect::new(bounds.x1 - GRIP_SIZE, bounds.y1 - GRIP_SIZE, bounds.x1, bounds.y1)
}

/// Find which handle (if any) is hit at the given point.
/// The grip wins where the two regions overlap.
pub fn hit_test(geometry: &FrameGeometry, point: Point) -> Option<FrameHandle> {
    if grip_rect(geometry).contains(point) {
        Some(FrameHandle::ResizeGrip)
    } else if handle_rect(geometry).contains(point) {
        Some(FrameHandle::DragHandle)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn geometry() -> FrameGeometry {
        FrameGeometry::new(Point::new(100.0, 50.0), Size::new(600.0, 400.0))
    }

    #[test]
    fn test_hit_handle_bar() {
        assert_eq!(
            hit_test(&geometry(), Point::new(300.0, 60.0)),
            Some(FrameHandle::DragHandle)
        );
    }

    #[test]
    fn test_hit_grip() {
        assert_eq!(
            hit_test(&geometry(), Point::new(695.0, 445.0)),
            Some(FrameHandle::ResizeGrip)
        );
    }

    #[test]
    fn test_content_area_is_not_a_handle() {
        assert_eq!(hit_test(&geometry(), Point::new(300.0, 250.0)), None);
        assert_eq!(hit_test(&geometry(), Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_handle_gestures() {
        assert_eq!(FrameHandle::DragHandle.gesture(), GestureKind::Drag);
        assert_eq!(FrameHandle::ResizeGrip.gesture(), GestureKind::Resize);
    }
}
