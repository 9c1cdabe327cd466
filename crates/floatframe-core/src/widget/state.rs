//! Frame state definitions.

use serde::{Deserialize, Serialize};

use crate::session::GestureKind;

/// The interaction state of the frame, mirrored to the host as a style marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The frame is being moved by its handle.
    Dragging,
    /// The frame is being resized from its grip.
    Resizing,
}

impl FrameState {
    /// CSS class toggled on the container while in this state.
    pub fn marker_class(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Dragging => Some("dragging"),
            Self::Resizing => Some("resizing"),
        }
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl From<GestureKind> for FrameState {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::Drag => Self::Dragging,
            GestureKind::Resize => Self::Resizing,
        }
    }
}
