//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core geometry engine to
//! JavaScript/TypeScript applications. It contains no geometry of its
//! own: every function converts arguments, calls the core, and
//! converts the result back.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for crop state
//! - `fit` - Boundary fitter, crop reconciler and reset bindings
//! - `view` - Image-to-view transform bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { reset_crop, fit_crop, JsViewState } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! let crop = reset_crop(image.width, image.height, 1.0);
//! const view = new JsViewState(crop, canvas.width, canvas.height,
//!                              image.width, image.height);
//! ```

use wasm_bindgen::prelude::*;

mod fit;
mod types;
mod view;

// Re-export public types
pub use fit::{crop_corners, fit_crop, fit_point, reset_crop};
pub use types::{JsCorner, JsCropState};
pub use view::{fit_transform, JsViewState};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
