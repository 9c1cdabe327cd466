//! In-memory sink implementation.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size};

use super::FrameSink;
use crate::dimensions::Dimensions;
use crate::session::GestureKind;
use crate::size_input::SizeFields;
use crate::widget::FrameState;

/// A single write made to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Position(Point),
    Size(Size),
    State(FrameState),
    Dimensions(Dimensions),
    Capture(GestureKind),
}

/// Capture token that counts its own release.
#[derive(Debug)]
pub struct CaptureToken {
    released: Rc<Cell<usize>>,
}

impl Drop for CaptureToken {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// Sink that records every write, for testing and headless use.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    position: Option<Point>,
    size: Option<Size>,
    state: FrameState,
    readout: Option<String>,
    fields: SizeFields,
    acquired: usize,
    released: Rc<Cell<usize>>,
}

impl RecordingSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write in order.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Forget recorded calls, keeping the latest values.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Last readout text written.
    pub fn readout(&self) -> Option<&str> {
        self.readout.as_deref()
    }

    /// Last size field values written.
    pub fn fields(&self) -> &SizeFields {
        &self.fields
    }

    /// Number of recorded dimension syncs.
    pub fn sync_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::Dimensions(_)))
            .count()
    }

    pub fn captures_acquired(&self) -> usize {
        self.acquired
    }

    pub fn captures_released(&self) -> usize {
        self.released.get()
    }
}

impl FrameSink for RecordingSink {
    type Capture = CaptureToken;

    fn apply_position(&mut self, position: Point) {
        self.position = Some(position);
        self.calls.push(SinkCall::Position(position));
    }

    fn apply_size(&mut self, size: Size) {
        self.size = Some(size);
        self.calls.push(SinkCall::Size(size));
    }

    fn set_state(&mut self, state: FrameState) {
        self.state = state;
        self.calls.push(SinkCall::State(state));
    }

    fn show_dimensions(&mut self, dimensions: Dimensions) {
        self.readout = Some(dimensions.readout());
        self.fields = dimensions.fields();
        self.calls.push(SinkCall::Dimensions(dimensions));
    }

    fn acquire_capture(&mut self, kind: GestureKind) -> CaptureToken {
        self.acquired += 1;
        self.calls.push(SinkCall::Capture(kind));
        CaptureToken {
            released: Rc::clone(&self.released),
        }
    }
}
