//! Output abstraction for frame geometry.

mod memory;

pub use memory::{CaptureToken, RecordingSink, SinkCall};

use kurbo::{Point, Size};

use crate::dimensions::Dimensions;
use crate::session::GestureKind;
use crate::widget::FrameState;

/// Trait for everything a frame controller writes to its host.
///
/// Implementations can target a DOM element, an immediate-mode UI, or an
/// in-memory recorder. Controllers never read geometry back from a sink.
pub trait FrameSink {
    /// Held for the duration of a gesture; dropping it releases input capture.
    type Capture;

    /// Move the container's top-left corner.
    fn apply_position(&mut self, position: Point);

    /// Resize the container.
    fn apply_size(&mut self, size: Size);

    /// Update the container's interaction state marker.
    fn set_state(&mut self, state: FrameState);

    /// Write the readout text and the two size fields.
    fn show_dimensions(&mut self, dimensions: Dimensions);

    /// Route all pointer movement to the frame until the returned token drops.
    fn acquire_capture(&mut self, kind: GestureKind) -> Self::Capture;
}
