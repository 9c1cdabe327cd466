//! Frame configuration.
//!
//! All fields have compiled-in defaults; hosts may override any subset
//! from JSON.

use std::time::Duration;

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{DEFAULT_HEIGHT, DEFAULT_WIDTH, default_min_size};
use crate::size_input::MAX_DIMENSION;

/// Default inactivity window after which a gesture is force-released.
pub const DEFAULT_GESTURE_TIMEOUT_MS: u64 = 15_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Minimum size must be positive and at most {max}px, got {width}x{height}", max = MAX_DIMENSION)]
    InvalidMinSize { width: f64, height: f64 },
    #[error("Initial size must be finite and at most {max}px, got {width}x{height}", max = MAX_DIMENSION)]
    InvalidInitialSize { width: f64, height: f64 },
    #[error("Gesture timeout must be greater than zero")]
    ZeroTimeout,
}

/// Tunables for a frame controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Lower bound for width and height.
    pub min_size: Size,
    /// Size applied at startup (clamped to `min_size`).
    pub initial_size: Size,
    /// Top-left corner at startup.
    pub initial_position: Point,
    /// Milliseconds without pointer activity before an active gesture is released.
    pub gesture_timeout_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            initial_size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            initial_position: Point::ZERO,
            gesture_timeout_ms: DEFAULT_GESTURE_TIMEOUT_MS,
        }
    }
}

impl FrameConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a usable frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = MAX_DIMENSION as f64;
        let min = self.min_size;
        if !(min.width > 0.0 && min.height > 0.0 && min.width <= max && min.height <= max) {
            return Err(ConfigError::InvalidMinSize {
                width: min.width,
                height: min.height,
            });
        }
        let initial = self.initial_size;
        if !(initial.width.is_finite() && initial.height.is_finite())
            || initial.width > max
            || initial.height > max
        {
            return Err(ConfigError::InvalidInitialSize {
                width: initial.width,
                height: initial.height,
            });
        }
        if self.gesture_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// The gesture inactivity timeout as a `Duration`.
    pub fn gesture_timeout(&self) -> Duration {
        Duration::from_millis(self.gesture_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MIN_HEIGHT, MIN_WIDTH};

    #[test]
    fn test_default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.min_size, Size::new(MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(config.initial_size, Size::new(600.0, 400.0));
        assert_eq!(config.gesture_timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FrameConfig::from_json(r#"{"initial_size": {"width": 800, "height": 500}}"#).unwrap();
        assert_eq!(config.initial_size, Size::new(800.0, 500.0));
        assert_eq!(config.min_size, default_min_size());
        assert_eq!(config.gesture_timeout_ms, DEFAULT_GESTURE_TIMEOUT_MS);
    }

    #[test]
    fn test_empty_json_object() {
        let config = FrameConfig::from_json("{}").unwrap();
        assert_eq!(config, FrameConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_min_size() {
        let result = FrameConfig::from_json(r#"{"min_size": {"width": 0, "height": 100}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidMinSize { .. })));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = FrameConfig::from_json(r#"{"gesture_timeout_ms": 0}"#);
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_rejects_oversized_initial_size() {
        let result =
            FrameConfig::from_json(r#"{"initial_size": {"width": 5000000000, "height": 400}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidInitialSize { .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = FrameConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
