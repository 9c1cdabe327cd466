//! Gesture sessions for drag and resize.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// The two gestures a frame supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// Origin geometry captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Moving the frame; position is the baseline.
    Drag { origin_position: Point },
    /// Resizing the frame; size is the baseline.
    Resize { origin_size: Size },
}

impl Gesture {
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Drag { .. } => GestureKind::Drag,
            Self::Resize { .. } => GestureKind::Resize,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Pointer released normally.
    Released,
    /// The host cancelled the gesture.
    Cancelled,
    /// No pointer activity within the gesture timeout.
    TimedOut,
    /// A new pointer-down arrived while this session was still open.
    Superseded,
}

/// State of one in-progress gesture.
///
/// Owns the capture token `C`; dropping the session releases the capture.
#[derive(Debug)]
pub struct ActiveSession<C> {
    gesture: Gesture,
    /// Pointer position at gesture start.
    start_point: Point,
    /// Most recent pointer position.
    current_point: Point,
    /// Time of the last pointer activity.
    last_activity: Instant,
    _capture: C,
}

impl<C> ActiveSession<C> {
    /// Start a session at `start_point`, holding `capture` until dropped.
    pub fn new(gesture: Gesture, start_point: Point, capture: C) -> Self {
        Self {
            gesture,
            start_point,
            current_point: start_point,
            last_activity: Instant::now(),
            _capture: capture,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn kind(&self) -> GestureKind {
        self.gesture.kind()
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn current_point(&self) -> Point {
        self.current_point
    }

    /// Record a new pointer position.
    pub fn update(&mut self, point: Point) {
        self.current_point = point;
        self.last_activity = Instant::now();
    }

    /// Get the cumulative pointer delta since gesture start.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Check whether `timeout` has elapsed since the last activity.
    pub fn is_stale(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_activity) >= timeout
    }
}
