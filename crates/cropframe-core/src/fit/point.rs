//! The boundary fitter: constrained repositioning of a dragged corner.
//!
//! Given a corner being moved and its diagonal opposite, produce a new
//! crop whose moved corner stays inside the image, whose aspect ratio
//! (if any) is preserved, and whose extents never collapse.

use super::{nearest_point_in_bounds, shift_required, COORD_EPSILON};
use crate::math::{clamp, max_magnitude, midpoint, signs_match};
use crate::project::to_local;
use crate::types::{Aspect, Corner, CropState, Dimension, Point};

/// Collapse guard, in image pixels: free-aspect extents are floored to
/// this, and a ratio-constrained corner keeps at least this much
/// diagonal distance from its opposite.
pub const MIN_EXTENT: f64 = 1.0;

/// Direction components smaller than this are treated as axis-aligned
/// and skip their boundary pair, so axis-aligned aspect lines never
/// divide by zero.
const AXIS_EPSILON: f64 = 1e-12;

/// Fit a corner's requested position and derive the resulting crop.
///
/// `requested` is where the user wants corner `corner` to go, in image
/// space. The opposite corner is read from the current crop and stays
/// fixed except for the simultaneous-overflow correction below.
///
/// Steps:
/// 1. If the moved corner and its opposite both overflow the same
///    direction on an axis, translate both together by the larger
///    required shift first. Continuing to resize from the overflowing
///    side would otherwise invert or null the rectangle. This path is
///    rare in normal interaction.
/// 2. Free aspect: clamp the requested point per axis. Fixed ratio:
///    slide the point along the aspect line through the opposite
///    corner, restricted to the parameter interval where the line is
///    inside the image.
/// 3. Derive the crop from the fitted corner and the opposite corner:
///    center at the midpoint, extents from the local-frame projection,
///    angle unchanged. Extents are forced positive and floored at
///    [`MIN_EXTENT`].
pub fn fit_point(
    requested: Point,
    corner: Corner,
    crop: &CropState,
    image: Dimension,
    aspect: Aspect,
) -> CropState {
    let mut p = requested;
    let mut o = crate::project::corners(crop)[corner.opposite()];

    // Step 1: simultaneous overflow on an axis moves both points.
    let sp = shift_required(p, image);
    let so = shift_required(o, image);
    if sp.dx.abs() > COORD_EPSILON && so.dx.abs() > COORD_EPSILON && signs_match(sp.dx, so.dx) {
        let dx = max_magnitude(&[sp.dx, so.dx]);
        p.x += dx;
        o.x += dx;
    }
    if sp.dy.abs() > COORD_EPSILON && so.dy.abs() > COORD_EPSILON && signs_match(sp.dy, so.dy) {
        let dy = max_magnitude(&[sp.dy, so.dy]);
        p.y += dy;
        o.y += dy;
    }

    // Step 2: the permissible position for the moved corner.
    let mut floor_past_bounds = false;
    let fitted = match aspect {
        Aspect::Free => nearest_point_in_bounds(p, image),
        Aspect::Ratio(ratio) => {
            let dir = diagonal_direction(corner, ratio, crop.angle);
            let (lower, upper) = line_parameter_interval(o, dir, image);
            let hi = lower.max(upper);
            // Least-squares closest point on the line, then clamp into
            // the in-bounds interval and away from the opposite corner.
            // With the opposite corner within MIN_EXTENT of an edge the
            // floor wins over the interval; step 3 translates the pair
            // back inside.
            let t = clamp((p - o).dot(dir), lower.min(upper), hi).max(MIN_EXTENT);
            floor_past_bounds = t > hi;
            o + dir * t
        }
    };

    // Step 3: derive the crop from the diagonal. Extents come out
    // positive: the ratio branch keeps the corner at least MIN_EXTENT
    // along the diagonal, and the free branch floors each axis.
    let center = midpoint(fitted, o);
    let local = to_local(fitted, center, crop.angle);
    let raw_width = local.x.abs() * 2.0;
    let raw_height = local.y.abs() * 2.0;
    let derived = CropState::new(
        center.x,
        center.y,
        match aspect {
            Aspect::Free => raw_width.max(MIN_EXTENT),
            Aspect::Ratio(_) => raw_width,
        },
        match aspect {
            Aspect::Free => raw_height.max(MIN_EXTENT),
            Aspect::Ratio(_) => raw_height,
        },
        crop.angle,
    );

    // A collapse floor can push the corner pair just over a boundary:
    // the free floor when both points clamp onto the same edge, the
    // diagonal floor when it overrode the interval clamp above. Nudge
    // the pair back in so repeated repairs settle instead of creeping.
    let floored = match aspect {
        Aspect::Free => raw_width < MIN_EXTENT || raw_height < MIN_EXTENT,
        Aspect::Ratio(_) => floor_past_bounds,
    };
    if floored {
        let derived_corners = crate::project::corners(&derived);
        let sp = shift_required(derived_corners[corner], image);
        let so = shift_required(derived_corners[corner.opposite()], image);
        return derived.translated(
            max_magnitude(&[sp.dx, so.dx]),
            max_magnitude(&[sp.dy, so.dy]),
        );
    }
    derived
}

/// Unit direction of the aspect line from the opposite corner toward
/// the moved corner.
///
/// In the crop's local frame the diagonal toward `corner` runs along
/// `(sign_x * ratio, sign_y)`; rotating by the crop angle yields the
/// image-space direction. The sign table selects which of the two
/// diagonals this corner pair lies on.
fn diagonal_direction(corner: Corner, ratio: f64, angle: f64) -> Point {
    let (sx, sy) = corner.local_signs();
    let local = Point::new(sx * ratio, sy);
    let unit = local * (1.0 / local.length());
    let (sin, cos) = angle.sin_cos();
    Point::new(unit.x * cos - unit.y * sin, unit.x * sin + unit.y * cos)
}

/// Parameter interval `[lower, upper]` for which `origin + t * dir`
/// lies inside the image.
///
/// Each axis with a non-negligible direction component contributes a
/// boundary pair; axis-aligned directions leave the other axis
/// unconstrained. An origin outside the image can produce an inverted
/// interval, which the caller normalizes before clamping.
fn line_parameter_interval(origin: Point, dir: Point, image: Dimension) -> (f64, f64) {
    let mut lower = f64::NEG_INFINITY;
    let mut upper = f64::INFINITY;

    if dir.x.abs() > AXIS_EPSILON {
        let t1 = (0.0 - origin.x) / dir.x;
        let t2 = (image.width - 1.0 - origin.x) / dir.x;
        lower = lower.max(t1.min(t2));
        upper = upper.min(t1.max(t2));
    }
    if dir.y.abs() > AXIS_EPSILON {
        let t1 = (0.0 - origin.y) / dir.y;
        let t2 = (image.height - 1.0 - origin.y) / dir.y;
        lower = lower.max(t1.min(t2));
        upper = upper.min(t1.max(t2));
    }

    (lower, upper)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::project::corners;
    use proptest::prelude::*;

    fn corner_strategy() -> impl Strategy<Value = Corner> {
        prop_oneof![
            Just(Corner::A),
            Just(Corner::B),
            Just(Corner::C),
            Just(Corner::D),
        ]
    }

    proptest! {
        /// Property: with a fixed ratio the fitted crop preserves it.
        #[test]
        fn prop_aspect_preserved(
            corner in corner_strategy(),
            ratio in 0.25f64..=4.0,
            px in -1500.0f64..=1500.0,
            py in -1500.0f64..=1500.0,
        ) {
            let crop = CropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
            let image = Dimension::new(1000.0, 500.0);
            let next = fit_point(Point::new(px, py), corner, &crop, image, Aspect::ratio(ratio));
            prop_assert!((next.width / next.height - ratio).abs() < 1e-6 * ratio.max(1.0));
        }

        /// Property: extents stay positive no matter where the corner
        /// is dragged.
        #[test]
        fn prop_extents_positive(
            corner in corner_strategy(),
            px in -2000.0f64..=2000.0,
            py in -2000.0f64..=2000.0,
        ) {
            let crop = CropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
            let image = Dimension::new(1000.0, 500.0);
            let next = fit_point(Point::new(px, py), corner, &crop, image, Aspect::Free);
            prop_assert!(next.width > 0.0);
            prop_assert!(next.height > 0.0);
        }

        /// Property: the fitted corner of an unrotated crop lands
        /// inside the image.
        #[test]
        fn prop_fitted_corner_in_bounds(
            corner in corner_strategy(),
            ratio in 0.25f64..=4.0,
            px in -1500.0f64..=1500.0,
            py in -1500.0f64..=1500.0,
        ) {
            let crop = CropState::new(500.0, 250.0, 400.0, 200.0, 0.0);
            let image = Dimension::new(1000.0, 500.0);
            let next = fit_point(Point::new(px, py), corner, &crop, image, Aspect::ratio(ratio));
            let fitted = corners(&next)[corner];
            prop_assert!(fitted.x >= -1e-6 && fitted.x <= 999.0 + 1e-6);
            prop_assert!(fitted.y >= -1e-6 && fitted.y <= 499.0 + 1e-6);
        }

        /// Property: the fitted corner stays inside even for tiny
        /// crops hugging the image corner, where the collapse floor
        /// competes with the bounds.
        #[test]
        fn prop_fitted_corner_in_bounds_near_boundary(
            corner in corner_strategy(),
            ratio in 0.25f64..=4.0,
            cx in 990.0f64..=999.0,
            cy in 490.0f64..=499.0,
            extent in 0.1f64..=5.0,
            px in -1500.0f64..=1500.0,
            py in -1500.0f64..=1500.0,
        ) {
            let crop = CropState::new(cx, cy, extent * ratio, extent, 0.0);
            let image = Dimension::new(1000.0, 500.0);
            let next = fit_point(Point::new(px, py), corner, &crop, image, Aspect::ratio(ratio));
            let fitted = corners(&next)[corner];
            prop_assert!(fitted.x >= -1e-6 && fitted.x <= 999.0 + 1e-6);
            prop_assert!(fitted.y >= -1e-6 && fitted.y <= 499.0 + 1e-6);
            prop_assert!((next.width / next.height - ratio).abs() < 1e-6 * ratio.max(1.0));
        }
    }
}
