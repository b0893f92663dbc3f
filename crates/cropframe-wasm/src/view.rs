//! WASM bindings for the image-to-view mapping.
//!
//! The UI builds a `JsViewState` whenever the crop or viewport changes
//! and uses it to position the canvas drawing and to convert pointer
//! coordinates back into image space.

use crate::types::{aspect_from, JsCorner, JsCropState};
use cropframe_core::{fit_transform as core_fit_transform, Dimension, Point, ViewState};
use wasm_bindgen::prelude::*;

/// Build the affine transform that renders the crop centered, upright
/// and scaled to fit the viewport with a safety margin.
///
/// Returned as a plain `{ a, b, c, d, e, f }` object, directly usable
/// with `CanvasRenderingContext2D.setTransform`.
#[wasm_bindgen]
pub fn fit_transform(
    crop: &JsCropState,
    viewport_width: f64,
    viewport_height: f64,
) -> Result<JsValue, JsValue> {
    let transform = core_fit_transform(
        &crop.to_core(),
        Dimension::new(viewport_width, viewport_height),
    );
    serde_wasm_bindgen::to_value(&transform).map_err(Into::into)
}

/// A crop's mapping between image space and view space.
///
/// Holds the forward transform and its inverse, computed once at
/// construction. Rebuild it (do not mutate) whenever the crop or the
/// viewport changes.
#[wasm_bindgen]
pub struct JsViewState {
    inner: ViewState,
}

#[wasm_bindgen]
impl JsViewState {
    /// Build the view state for a crop, viewport and image.
    ///
    /// # Errors
    ///
    /// Throws when the fitted transform is degenerate: a zero-sized
    /// crop or viewport, typically before an image has finished
    /// loading. Callers treat that as "nothing to display yet".
    #[wasm_bindgen(constructor)]
    pub fn new(
        crop: &JsCropState,
        viewport_width: f64,
        viewport_height: f64,
        image_width: f64,
        image_height: f64,
    ) -> Result<JsViewState, JsError> {
        let inner = ViewState::new(
            &crop.to_core(),
            Dimension::new(viewport_width, viewport_height),
            Dimension::new(image_width, image_height),
        )
        .map_err(JsError::from)?;
        Ok(JsViewState { inner })
    }

    /// Map an image-space point to view space. Returns `[x, y]`.
    pub fn image_to_view(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.inner.image_to_view(Point::new(x, y));
        vec![p.x, p.y]
    }

    /// Map a view-space point to image space. Returns `[x, y]`.
    pub fn view_to_image(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.inner.view_to_image(Point::new(x, y));
        vec![p.x, p.y]
    }

    /// The forward transform as a `{ a, b, c, d, e, f }` object.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.transform()).map_err(Into::into)
    }

    /// Fit a corner dragged in view space.
    ///
    /// Converts the pointer position to image space and runs the
    /// boundary fitter, returning the resulting crop.
    pub fn fit_view_point(
        &self,
        x: f64,
        y: f64,
        corner: JsCorner,
        crop: &JsCropState,
        aspect_ratio: Option<f64>,
    ) -> JsCropState {
        let fitted = self.inner.fit_view_point(
            Point::new(x, y),
            corner.to_core(),
            &crop.to_core(),
            aspect_from(aspect_ratio),
        );
        JsCropState::from_core(fitted)
    }
}
