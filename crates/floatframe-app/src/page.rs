//! Page wiring: element ids, the embedded JSON config, and URL parameters.

use floatframe_core::{ConfigError, FrameConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the optional `<script type="application/json">` block holding a [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "floatframe-config";

/// Query/hash parameter naming a page to load at startup.
pub const URL_PARAM: &str = "url";

/// Errors raised while binding to the page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No browser window available")]
    NoWindow,
    #[error("Element #{0} not found")]
    MissingElement(String),
    #[error("Element #{0} has the wrong type")]
    WrongElementType(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Ids of the page elements the shell binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// The container that moves and resizes.
    pub wrapper: String,
    pub drag_handle: String,
    pub resize_grip: String,
    /// Text readout of the current dimensions.
    pub dimensions: String,
    pub viewer: String,
    pub url_input: String,
    pub go_button: String,
    pub width_input: String,
    pub height_input: String,
    pub set_size_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            wrapper: "iframe-wrapper".to_string(),
            drag_handle: "drag-handle".to_string(),
            resize_grip: "resizer-br".to_string(),
            dimensions: "dimensions-display".to_string(),
            viewer: "main-iframe".to_string(),
            url_input: "url-input".to_string(),
            go_button: "go-button".to_string(),
            width_input: "set-width".to_string(),
            height_input: "set-height".to_string(),
            set_size_button: "set-size-button".to_string(),
        }
    }
}

/// Everything the shell reads from the page before mounting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub elements: ElementIds,
    pub frame: FrameConfig,
}

impl PageConfig {
    /// Parse and validate a page config.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(json)?;
        config.frame.validate()?;
        Ok(config)
    }

    /// Use the embedded config if present and valid, defaults otherwise.
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|json| !json.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring page config: {}", e);
                Self::default()
            }
        }
    }
}

/// Find the startup URL in a query string or hash.
/// Supports `?url=example.com` and `#url=example.com`; values are percent-decoded.
pub fn initial_url(search: &str, hash: &str) -> Option<String> {
    parse_url_param(search).or_else(|| parse_url_param(hash))
}

fn parse_url_param(s: &str) -> Option<String> {
    // Remove leading ? or #
    let s = s.trim_start_matches(['?', '#']);
    url::form_urlencoded::parse(s.as_bytes())
        .find(|(key, value)| *key == URL_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
