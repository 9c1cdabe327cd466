//! egui components for the FloatFrame widget.
//!
//! - **Frame**: the floating, draggable, resizable viewer frame
//! - **Controls**: URL bar and external size fields
//! - **Chrome**: viewer panel and docked toolbar frames
//! - **Layout**: section labels and separators

pub mod chrome;
pub mod controls;
pub mod frame;
pub mod layout;

pub use chrome::{panel_frame, toolbar_frame};
pub use controls::{size_controls, url_bar};
pub use frame::{EguiSink, FloatingFrame};
pub use layout::{section_label, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Width of the URL text field
    pub const URL_FIELD_WIDTH: f32 = 280.0;
    /// Width of each size text field
    pub const SIZE_FIELD_WIDTH: f32 = 56.0;
    /// Horizontal padding inside the toolbar
    pub const TOOLBAR_MARGIN_X: i8 = 12;
    /// Vertical padding inside the toolbar
    pub const TOOLBAR_MARGIN_Y: i8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Active gesture border (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Drag handle background
    pub const HANDLE_BG: Color32 = Color32::from_rgb(241, 243, 246);
    /// Validation error text
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
