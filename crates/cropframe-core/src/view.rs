//! View transform: mapping image space onto a display surface.
//!
//! The engine never draws anything. It hands the rendering collaborator
//! a single affine transform under which the crop rectangle appears
//! centered in the viewport, upright (its rotation cancelled), and
//! scaled to fit with a safety margin.

use crate::fit::fit_point;
use crate::math::zero_if_nan;
use crate::transform::Transform;
use crate::types::{Aspect, Corner, CropState, Dimension, GeometryError, Point};

/// Fraction of the viewport the fitted crop may occupy.
///
/// Strictly below 1 so a crop that exactly fills the viewport does not
/// oscillate between "fits" and "overflows" across refits.
pub const VIEW_MARGIN: f64 = 0.9;

/// Build the transform that renders the crop centered and upright in
/// the viewport.
///
/// Construction order: translate the crop center to the origin, cancel
/// the crop rotation, move to the viewport center, then scale about the
/// viewport center so the crop fits with [`VIEW_MARGIN`] to spare.
///
/// A zero-sized crop or viewport (image still loading) produces a
/// degenerate zero-scale transform instead of NaN; it renders nothing
/// and refuses to invert.
pub fn fit_transform(crop: &CropState, viewport: Dimension) -> Transform {
    let scale = zero_if_nan(
        (viewport.width / crop.width).min(viewport.height / crop.height),
    ) * VIEW_MARGIN;

    Transform::translation(-crop.x, -crop.y)
        .then(Transform::rotation(-crop.angle))
        .then(Transform::scaling(scale))
        .then(Transform::translation(
            viewport.width / 2.0,
            viewport.height / 2.0,
        ))
}

/// Map an image-space point onto the display surface.
pub fn image_to_view(p: Point, transform: &Transform) -> Point {
    transform.apply(p)
}

/// Map a display-surface point back into image space.
///
/// Fails only for a degenerate (zero-scale) transform.
pub fn view_to_image(p: Point, transform: &Transform) -> Result<Point, GeometryError> {
    Ok(transform.invert()?.apply(p))
}

/// A crop's mapping between image space and view space, with the
/// inverse computed once up front.
///
/// Rebuilt (not mutated) whenever the crop or viewport changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    transform: Transform,
    inverse: Transform,
    viewport: Dimension,
    image: Dimension,
}

impl ViewState {
    /// Build the view state for a crop, viewport and image.
    ///
    /// Fails when the fitted transform is degenerate (zero-sized crop
    /// or viewport); callers treat that as "nothing to display yet".
    pub fn new(
        crop: &CropState,
        viewport: Dimension,
        image: Dimension,
    ) -> Result<ViewState, GeometryError> {
        let transform = fit_transform(crop, viewport);
        let inverse = transform.invert()?;
        Ok(ViewState {
            transform,
            inverse,
            viewport,
            image,
        })
    }

    /// The image-to-view transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Viewport size this state was fitted to.
    pub fn viewport(&self) -> Dimension {
        self.viewport
    }

    /// Image size this state was fitted to.
    pub fn image(&self) -> Dimension {
        self.image
    }

    /// Map an image-space point to view space.
    pub fn image_to_view(&self, p: Point) -> Point {
        self.transform.apply(p)
    }

    /// Map a view-space point to image space.
    pub fn view_to_image(&self, p: Point) -> Point {
        self.inverse.apply(p)
    }

    /// Fit a corner dragged in view space.
    ///
    /// Converts the candidate position to image space and runs the
    /// boundary fitter against this state's image bounds.
    pub fn fit_view_point(
        &self,
        requested: Point,
        corner: Corner,
        crop: &CropState,
        aspect: Aspect,
    ) -> CropState {
        fit_point(
            self.view_to_image(requested),
            corner,
            crop,
            self.image,
            aspect,
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: view mapping round-trips for any non-degenerate
        /// crop and viewport.
        #[test]
        fn prop_view_round_trip(
            cx in -500.0f64..=500.0,
            cy in -500.0f64..=500.0,
            w in 1.0f64..=2000.0,
            h in 1.0f64..=2000.0,
            angle in -std::f64::consts::PI..=std::f64::consts::PI,
            vw in 1.0f64..=2000.0,
            vh in 1.0f64..=2000.0,
            px in -1000.0f64..=1000.0,
            py in -1000.0f64..=1000.0,
        ) {
            let crop = CropState::new(cx, cy, w, h, angle);
            let t = fit_transform(&crop, Dimension::new(vw, vh));
            let p = Point::new(px, py);
            let back = view_to_image(image_to_view(p, &t), &t).unwrap();
            prop_assert!((back.x - p.x).abs() < 1e-5);
            prop_assert!((back.y - p.y).abs() < 1e-5);
        }
    }
}
