//! Dimensions readout derived from the container size.

use std::fmt;

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::size_input::SizeFields;

/// Container size in whole pixels, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Round a size to whole pixels.
    pub fn from_size(size: Size) -> Self {
        Self {
            width: size.width.round().max(0.0) as u32,
            height: size.height.round().max(0.0) as u32,
        }
    }

    /// Readout text, e.g. `W: 650px, H: 430px`.
    pub fn readout(&self) -> String {
        self.to_string()
    }

    /// Values for the external size fields.
    pub fn fields(&self) -> SizeFields {
        SizeFields::new(self.width.to_string(), self.height.to_string())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W: {}px, H: {}px", self.width, self.height)
    }
}
