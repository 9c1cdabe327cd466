//! FloatFrame application shells
//!
//! - **Browser**: binds the frame controller to page elements: inline
//!   styles on the wrapper, document-level capture during gestures, the
//!   size form, and the URL bar feeding the embedded iframe.
//! - **Native**: a winit window rendering the egui frame and controls.

pub mod page;

pub use page::{ElementIds, PageConfig, PageError};

#[cfg(not(target_arch = "wasm32"))]
pub mod host;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub mod native;

#[cfg(target_arch = "wasm32")]
mod capture;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
