//! Crop fitting: keeping the rectangle valid and inside the image.
//!
//! Two layers live here:
//!
//! 1. The boundary fitter ([`fit_point`]) repositions a single dragged
//!    corner along its aspect line and inside the image, then derives
//!    the resulting crop from the corner and its diagonal opposite.
//! 2. The reconciler ([`fit_crop`]) re-fits the whole rectangle after
//!    an edit, preferring one of two repairs (translate or scale) and
//!    falling back to the other when the preferred one cannot work.
//!
//! All functions are pure: they take the current state and return a
//! replacement, never mutating in place. Callers must feed each call
//! the latest returned state or corrections get lost.

mod crop;
mod point;

pub use crop::{fit_crop, reset_crop, FitMode};
pub use point::fit_point;

use crate::math::clamp;
use crate::types::{Dimension, Point};
use serde::{Deserialize, Serialize};

/// Coordinate differences below this are treated as zero.
///
/// Keeps floating noise from re-triggering repairs on an already
/// fitted crop.
pub(crate) const COORD_EPSILON: f64 = 1e-9;

/// Signed displacement that pulls a point back inside the image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shift {
    pub dx: f64,
    pub dy: f64,
}

impl Shift {
    /// Whether the shift is negligible on both axes.
    pub fn is_zero(&self) -> bool {
        self.dx.abs() < COORD_EPSILON && self.dy.abs() < COORD_EPSILON
    }
}

/// The displacement needed to pull `q` into `[0, w-1] x [0, h-1]`.
///
/// Zero on an axis when the point is already inside; otherwise the
/// minimal correction toward the violated boundary.
pub fn shift_required(q: Point, image: Dimension) -> Shift {
    fn axis(value: f64, max: f64) -> f64 {
        if value < 0.0 {
            -value
        } else if value > max {
            max - value
        } else {
            0.0
        }
    }

    Shift {
        dx: axis(q.x, image.width - 1.0),
        dy: axis(q.y, image.height - 1.0),
    }
}

/// Clamp each axis of `p` independently into the image bounds.
pub fn nearest_point_in_bounds(p: Point, image: Dimension) -> Point {
    Point::new(
        clamp(p.x, 0.0, image.width - 1.0),
        clamp(p.y, 0.0, image.height - 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_required_inside_is_zero() {
        let s = shift_required(Point::new(50.0, 50.0), Dimension::new(100.0, 100.0));
        assert_eq!(s, Shift { dx: 0.0, dy: 0.0 });
        assert!(s.is_zero());
    }

    #[test]
    fn test_shift_required_left_overflow() {
        let s = shift_required(Point::new(-5.0, 10.0), Dimension::new(100.0, 100.0));
        assert_eq!(s.dx, 5.0);
        assert_eq!(s.dy, 0.0);
    }

    #[test]
    fn test_shift_required_right_and_bottom_overflow() {
        let s = shift_required(Point::new(105.0, 120.0), Dimension::new(100.0, 100.0));
        assert_eq!(s.dx, 99.0 - 105.0);
        assert_eq!(s.dy, 99.0 - 120.0);
    }

    #[test]
    fn test_shift_boundary_points_are_inside() {
        let image = Dimension::new(100.0, 50.0);
        assert!(shift_required(Point::new(0.0, 0.0), image).is_zero());
        assert!(shift_required(Point::new(99.0, 49.0), image).is_zero());
    }

    #[test]
    fn test_nearest_point_in_bounds() {
        let image = Dimension::new(100.0, 50.0);
        let p = nearest_point_in_bounds(Point::new(-10.0, 60.0), image);
        assert_eq!(p, Point::new(0.0, 49.0));
        let q = nearest_point_in_bounds(Point::new(20.0, 30.0), image);
        assert_eq!(q, Point::new(20.0, 30.0));
    }
}
