//! Parsing of the external width/height fields.

use std::fmt;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest width or height accepted from the size fields, in pixels.
pub const MAX_DIMENSION: i64 = 100_000;

/// Which of the two size fields a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeField {
    Width,
    Height,
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Rejected size-field input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SizeInputError {
    #[error("Please enter a {field}.")]
    Empty { field: SizeField },
    #[error("The {field} must be a number, got {value:?}.")]
    NotANumber { field: SizeField, value: String },
    #[error("The {field} must be at most {max}px, got {value}.")]
    TooLarge { field: SizeField, value: i64, max: i64 },
}

impl SizeInputError {
    /// The field that failed to parse.
    pub fn field(&self) -> SizeField {
        match self {
            Self::Empty { field }
            | Self::NotANumber { field, .. }
            | Self::TooLarge { field, .. } => *field,
        }
    }
}

/// Text contents of the width and height fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeFields {
    pub width: String,
    pub height: String,
}

impl SizeFields {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Parse both fields into a size (not yet clamped).
    pub fn parse(&self) -> Result<Size, SizeInputError> {
        parse_size_fields(&self.width, &self.height)
    }
}

/// Parse one field as an integer pixel count.
///
/// Whitespace is ignored and decimals truncate toward zero. Anything that
/// is not a finite number, or exceeds [`MAX_DIMENSION`], is rejected.
/// Small and negative values pass through; the controller clamps them.
pub fn parse_dimension(field: SizeField, raw: &str) -> Result<i64, SizeInputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SizeInputError::Empty { field });
    }
    let parsed = match value.parse::<i64>() {
        Ok(int) => int,
        Err(_) => match value.parse::<f64>() {
            Ok(float) if float.is_finite() => float.trunc() as i64,
            _ => {
                return Err(SizeInputError::NotANumber {
                    field,
                    value: value.to_string(),
                });
            }
        },
    };
    if parsed > MAX_DIMENSION {
        return Err(SizeInputError::TooLarge {
            field,
            value: parsed,
            max: MAX_DIMENSION,
        });
    }
    Ok(parsed)
}

/// Parse the width and height fields. Width is checked first.
pub fn parse_size_fields(width: &str, height: &str) -> Result<Size, SizeInputError> {
    let width = parse_dimension(SizeField::Width, width)?;
    let height = parse_dimension(SizeField::Height, height)?;
    Ok(Size::new(width as f64, height as f64))
}
