//! Native host settings and per-pass layout.

use floatframe_core::{ConfigError, FrameConfig};
use floatframe_widgets::{FloatingFrame, size_controls, toolbar_frame, url_bar};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON settings file.
pub const CONFIG_ENV: &str = "FLOATFRAME_CONFIG";

/// Window and frame settings for the native host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    pub frame: FrameConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "FloatFrame".to_string(),
            width: 1024,
            height: 768,
            // Clear of the docked control bar.
            frame: FrameConfig {
                initial_position: Point::new(40.0, 72.0),
                ..FrameConfig::default()
            },
        }
    }
}

impl HostConfig {
    /// Parse and validate host settings.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.frame.validate()?;
        Ok(config)
    }

    /// Use the given settings if present and valid, defaults otherwise.
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring host settings: {}", e);
                Self::default()
            }
        }
    }
}

/// Lay out one egui pass: controls docked along the top, the frame floating
/// above the background.
pub fn render_ui(ctx: &egui::Context, frame: &mut FloatingFrame) {
    egui::TopBottomPanel::top("controls")
        .frame(toolbar_frame())
        .show(ctx, |ui| {
            url_bar(ui, frame);
            size_controls(ui, frame);
        });
    frame.show(ctx);
}
