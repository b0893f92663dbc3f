//! WASM bindings for crop fitting and reset.
//!
//! This module exposes the boundary fitter and crop reconciler to the
//! UI layer: corner drags, post-edit re-fitting, and the initial crop
//! for a freshly loaded image.

use crate::types::{aspect_from, JsCorner, JsCropState};
use cropframe_core::{
    corners as core_corners, fit_crop as core_fit_crop, fit_point as core_fit_point,
    reset_crop as core_reset_crop, Dimension, FitMode, Point,
};
use wasm_bindgen::prelude::*;

/// The initial crop for an image: centered, maximal, unrotated.
///
/// # Arguments
///
/// * `image_width`, `image_height` - Natural image size in pixels
/// * `aspect_ratio` - Optional width/height constraint; omitted,
///   non-finite or non-positive means free-form
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Largest centered square on a landscape image
/// const crop = reset_crop(1000, 500, 1.0);
/// ```
#[wasm_bindgen]
pub fn reset_crop(image_width: f64, image_height: f64, aspect_ratio: Option<f64>) -> JsCropState {
    let crop = core_reset_crop(
        Dimension::new(image_width, image_height),
        aspect_from(aspect_ratio),
    );
    JsCropState::from_core(crop)
}

/// Re-fit a crop against the image bounds after an edit.
///
/// Tries the preferred repair first: translating the rectangle back
/// inside (size kept) when `prefer_translate` is true, otherwise
/// shrinking it corner by corner. Whichever is preferred, the engine
/// falls back to the other when the preferred repair cannot produce a
/// valid crop. A crop that already fits is returned unchanged.
#[wasm_bindgen]
pub fn fit_crop(
    crop: &JsCropState,
    image_width: f64,
    image_height: f64,
    aspect_ratio: Option<f64>,
    prefer_translate: bool,
) -> JsCropState {
    let mode = if prefer_translate {
        FitMode::Translate
    } else {
        FitMode::Scale
    };
    let fitted = core_fit_crop(
        &crop.to_core(),
        Dimension::new(image_width, image_height),
        aspect_from(aspect_ratio),
        mode,
    );
    JsCropState::from_core(fitted)
}

/// Fit a dragged corner and derive the resulting crop.
///
/// `x`/`y` is the requested corner position in image space. The
/// returned crop keeps the corner inside the image, preserves the
/// aspect ratio if one is given, and never collapses.
#[wasm_bindgen]
pub fn fit_point(
    crop: &JsCropState,
    corner: JsCorner,
    x: f64,
    y: f64,
    image_width: f64,
    image_height: f64,
    aspect_ratio: Option<f64>,
) -> JsCropState {
    let fitted = core_fit_point(
        Point::new(x, y),
        corner.to_core(),
        &crop.to_core(),
        Dimension::new(image_width, image_height),
        aspect_from(aspect_ratio),
    );
    JsCropState::from_core(fitted)
}

/// The four image-space corners of a crop, as `{ x, y }` objects in
/// `A`, `B`, `C`, `D` order.
#[wasm_bindgen]
pub fn crop_corners(crop: &JsCropState) -> Result<JsValue, JsValue> {
    let corners = core_corners(&crop.to_core());
    serde_wasm_bindgen::to_value(&corners).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_free_uses_full_image() {
        let crop = reset_crop(1000.0, 500.0, None);
        assert_eq!(crop.x(), 500.0);
        assert_eq!(crop.y(), 250.0);
        assert_eq!(crop.width(), 1000.0);
        assert_eq!(crop.height(), 500.0);
        assert_eq!(crop.angle(), 0.0);
    }

    #[test]
    fn test_reset_square_on_landscape() {
        let crop = reset_crop(1000.0, 500.0, Some(1.0));
        assert_eq!(crop.width(), 500.0);
        assert_eq!(crop.height(), 500.0);
    }

    #[test]
    fn test_fit_crop_identity_for_valid_crop() {
        let crop = JsCropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
        let fitted = fit_crop(&crop, 1000.0, 500.0, None, true);
        assert_eq!(fitted.x(), 500.0);
        assert_eq!(fitted.width(), 400.0);
    }

    #[test]
    fn test_fit_crop_scale_shrinks_oversized() {
        let crop = JsCropState::new(550.0, 250.0, 1000.0, 500.0, 0.0);
        let fitted = fit_crop(&crop, 1000.0, 500.0, None, true);
        assert!(fitted.width() <= 1000.0);
    }

    #[test]
    fn test_fit_point_preserves_ratio() {
        let crop = JsCropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
        let fitted = fit_point(&crop, JsCorner::A, 250.0, 90.0, 1000.0, 500.0, Some(2.0));
        assert!((fitted.width() / fitted.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_ratio_is_treated_as_free() {
        let crop = JsCropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
        let fitted = fit_point(&crop, JsCorner::A, 200.0, 100.0, 1000.0, 500.0, Some(-1.0));
        // Free-form drag honors the request exactly
        assert!((fitted.width() - 500.0).abs() < 1e-9);
        assert!((fitted.height() - 250.0).abs() < 1e-9);
    }
}
