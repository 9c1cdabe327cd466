//! FloatFrame Core Library
//!
//! Platform-agnostic interaction logic for a draggable, resizable frame
//! that hosts an embedded document viewer.

pub mod config;
pub mod controller;
pub mod dimensions;
pub mod geometry;
pub mod input;
pub mod navigation;
pub mod session;
pub mod sink;
pub mod size_input;
pub mod widget;

pub use config::{ConfigError, FrameConfig};
pub use controller::{FrameController, GestureError};
pub use dimensions::Dimensions;
pub use geometry::{FrameGeometry, MIN_HEIGHT, MIN_WIDTH, clamp_size};
pub use input::{PointerEvent, PointerSource};
pub use navigation::{ContentLoader, NavigationError, navigate, normalize_url};
pub use session::{EndReason, GestureKind};
pub use sink::{FrameSink, RecordingSink};
pub use size_input::{MAX_DIMENSION, SizeField, SizeFields, SizeInputError};
pub use widget::{FrameHandle, FrameState};
