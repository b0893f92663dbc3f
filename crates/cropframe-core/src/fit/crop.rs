//! The crop reconciler: whole-rectangle re-fitting after an edit.
//!
//! Every edit (translate, rotate, resize, viewport change) ends with a
//! [`fit_crop`] call. The caller states which repair it prefers:
//! translating the rectangle back inside, or scaling it down corner by
//! corner. Whichever is preferred, the other is the fallback when the
//! preferred repair cannot produce a valid crop.
//!
//! The translate/scale fallback is a straight-line flow, not mutual
//! recursion: translate hands off to scale at most once per call, and
//! the scale repair is a bounded pass loop, so termination is by
//! construction.

use super::point::fit_point;
use super::{shift_required, Shift};
use crate::math::{max_magnitude, signs_match};
use crate::project::corners;
use crate::types::{Aspect, Corner, CropState, Dimension};
use serde::{Deserialize, Serialize};

/// Upper bound on sequential repair passes in the scale repair.
///
/// Each pass pulls every out-of-bounds corner strictly into the image;
/// benign states converge in one or two passes and degenerate ones are
/// cut off rather than looped on.
const MAX_SCALE_PASSES: usize = 8;

/// Which repair the reconciler should try first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitMode {
    /// Move the whole rectangle back inside, keeping its size.
    #[default]
    Translate,
    /// Shrink the rectangle corner by corner against its diagonals.
    Scale,
}

/// Re-fit a crop against the image bounds.
///
/// A crop that already fits is returned unchanged in either mode.
pub fn fit_crop(
    crop: &CropState,
    image: Dimension,
    aspect: Aspect,
    preferred: FitMode,
) -> CropState {
    match preferred {
        FitMode::Translate => fit_by_translate(*crop, image, aspect),
        FitMode::Scale => fit_by_scale(*crop, image, aspect),
    }
}

/// The initial crop for a freshly loaded image: centered, maximal,
/// unrotated.
///
/// Free aspect uses the image's own extents. A fixed ratio takes the
/// largest centered rectangle of that ratio, limited by whichever
/// image dimension binds.
pub fn reset_crop(image: Dimension, aspect: Aspect) -> CropState {
    let (width, height) = match aspect {
        Aspect::Free => (image.width, image.height),
        Aspect::Ratio(ratio) => {
            debug_assert!(
                ratio.is_finite() && ratio > 0.0,
                "aspect ratio must be a finite positive number"
            );
            if image.width / image.height > ratio {
                // Image is wider than the ratio: height binds.
                (image.height * ratio, image.height)
            } else {
                (image.width, image.width / ratio)
            }
        }
    };
    CropState::new(image.width / 2.0, image.height / 2.0, width, height, 0.0)
}

fn corner_shifts(crop: &CropState, image: Dimension) -> [Shift; 4] {
    let c = corners(crop);
    [
        shift_required(c[Corner::A], image),
        shift_required(c[Corner::B], image),
        shift_required(c[Corner::C], image),
        shift_required(c[Corner::D], image),
    ]
}

/// Whether two corners need opposing nonzero corrections on one axis,
/// i.e. the rectangle is wider or taller than the image and no
/// translation can fix it.
fn has_opposing_shifts(values: &[f64; 4]) -> bool {
    values.iter().any(|&a| {
        values.iter().any(|&b| {
            a.abs() > super::COORD_EPSILON && b.abs() > super::COORD_EPSILON && !signs_match(a, b)
        })
    })
}

fn fit_by_translate(crop: CropState, image: Dimension, aspect: Aspect) -> CropState {
    let shifts = corner_shifts(&crop, image);
    if shifts.iter().all(Shift::is_zero) {
        // Identity: already valid, never recurse.
        return crop;
    }

    let xs = shifts.map(|s| s.dx);
    let ys = shifts.map(|s| s.dy);
    if has_opposing_shifts(&xs) || has_opposing_shifts(&ys) {
        return fit_by_scale(crop, image, aspect);
    }

    let moved = crop.translated(max_magnitude(&xs), max_magnitude(&ys));

    // Translating along one axis can expose an overflow on the other;
    // re-verify and let the scale repair finish from the moved state.
    if corner_shifts(&moved, image).iter().all(Shift::is_zero) {
        moved
    } else {
        fit_by_scale(moved, image, aspect)
    }
}

/// Sequential constraint propagation: repair corners in the fixed
/// A, B, C, D order, recomputing all four after every repair.
fn fit_by_scale(crop: CropState, image: Dimension, aspect: Aspect) -> CropState {
    let mut crop = crop;
    for _ in 0..MAX_SCALE_PASSES {
        let mut repaired = false;
        for corner in Corner::ALL {
            let position = corners(&crop)[corner];
            if !shift_required(position, image).is_zero() {
                crop = fit_point(position, corner, &crop, image, aspect);
                repaired = true;
            }
        }
        if !repaired {
            break;
        }
    }
    crop
}


// ============================================================================
// Property-Based Tests
// ============================================================================
