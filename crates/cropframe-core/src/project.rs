//! Rectangle projection: crop state to image-space corners and back.
//!
//! The corner order is load-bearing. [`corners`] always emits `A` at
//! the pre-rotation top-left and proceeds clockwise, so `A`/`C` and
//! `B`/`D` are the two diagonals the boundary fitter works along.

use crate::types::{Corner, Corners, CropState, Point};

/// The four image-space corners of a crop rectangle.
///
/// Each local corner `(±w/2, ±h/2)` is rotated by `crop.angle` about
/// the origin and then translated to the crop center.
pub fn corners(crop: &CropState) -> Corners {
    let (sin, cos) = crop.angle.sin_cos();
    let hw = crop.width / 2.0;
    let hh = crop.height / 2.0;

    let project = |corner: Corner| {
        let (sx, sy) = corner.local_signs();
        let lx = sx * hw;
        let ly = sy * hh;
        Point::new(
            lx * cos - ly * sin + crop.x,
            lx * sin + ly * cos + crop.y,
        )
    };

    Corners([
        project(Corner::A),
        project(Corner::B),
        project(Corner::C),
        project(Corner::D),
    ])
}

/// Project an image-space point into a crop's local frame.
///
/// Translates by `-center`, then rotates by `-angle`. The result is
/// the point's position relative to the unrotated rectangle centered
/// at the origin; the boundary fitter reads width/height off it.
pub fn to_local(p: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = (-angle).sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(dx * cos - dy * sin, dx * sin + dy * cos)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
