//! WASM-compatible wrapper types for crop geometry.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Cropframe types, handling the conversion between Rust and JavaScript
//! data representations.

use cropframe_core::{Aspect, Corner, CropState};
use wasm_bindgen::prelude::*;

/// A crop rectangle wrapper for JavaScript.
///
/// Wraps the core `CropState`: center coordinates, extents and rotation
/// in image-pixel space. Instances are cheap value objects; every edit
/// function returns a new one rather than mutating in place.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct JsCropState {
    inner: CropState,
}

#[wasm_bindgen]
impl JsCropState {
    /// Create a crop state from center, extents and rotation.
    ///
    /// # Arguments
    /// * `x`, `y` - Center of the rectangle, image pixels
    /// * `width`, `height` - Full extents, must be positive
    /// * `angle` - Rotation in radians
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64, angle: f64) -> JsCropState {
        JsCropState {
            inner: CropState::new(x, y, width, height, angle),
        }
    }

    /// Get the center x coordinate
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Set the center x coordinate
    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, value: f64) {
        self.inner.x = value;
    }

    /// Get the center y coordinate
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Set the center y coordinate
    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, value: f64) {
        self.inner.y = value;
    }

    /// Get the crop width
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width
    }

    /// Set the crop width
    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, value: f64) {
        self.inner.width = value;
    }

    /// Get the crop height
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height
    }

    /// Set the crop height
    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, value: f64) {
        self.inner.height = value;
    }

    /// Get the rotation angle in radians
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        self.inner.angle
    }

    /// Set the rotation angle in radians
    #[wasm_bindgen(setter)]
    pub fn set_angle(&mut self, value: f64) {
        self.inner.angle = value;
    }
}

impl JsCropState {
    pub(crate) fn from_core(inner: CropState) -> Self {
        Self { inner }
    }

    pub(crate) fn to_core(&self) -> CropState {
        self.inner
    }
}

/// Corner identifier for JavaScript callers.
///
/// `A` is the top-left corner before rotation, proceeding clockwise;
/// `A`/`C` and `B`/`D` are diagonal pairs.
#[wasm_bindgen]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum JsCorner {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl JsCorner {
    pub(crate) fn to_core(self) -> Corner {
        match self {
            JsCorner::A => Corner::A,
            JsCorner::B => Corner::B,
            JsCorner::C => Corner::C,
            JsCorner::D => Corner::D,
        }
    }
}

/// Interpret an optional ratio from JavaScript as an aspect constraint.
///
/// `undefined`, non-finite and non-positive values all mean free-form;
/// the boundary sanitizes rather than asserting on untyped JS input.
pub(crate) fn aspect_from(ratio: Option<f64>) -> Aspect {
    match ratio {
        Some(value) if value.is_finite() && value > 0.0 => Aspect::ratio(value),
        _ => Aspect::Free,
    }
}
