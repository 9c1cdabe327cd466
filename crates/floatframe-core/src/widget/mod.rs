//! Frame widget state and interactive regions.
//!
//! This module describes the parts of the container that a host renders
//! and routes pointer input from:
//! - State markers (idle, dragging, resizing) used for styling
//! - The drag handle and the resize grip, with their hit regions
//!
//! The geometry itself stays pure data; hosts derive regions from it.

mod handles;
mod state;

pub use handles::{FrameHandle, GRIP_SIZE, HANDLE_HEIGHT, grip_rect, handle_rect, hit_test};
pub use state::FrameState;
