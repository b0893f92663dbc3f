//! Immutable 2D affine transform.
//!
//! A point `(x, y)` maps to `(a*x + c*y + e, b*x + d*y + f)`, the
//! usual 2x3 column-major affine matrix, written out as six scalars
//! with no hidden mutable state. Transforms are built from the basic
//! constructors and chained with [`Transform::then`].

use crate::types::{GeometryError, Point};
use serde::{Deserialize, Serialize};

/// Determinants smaller than this are treated as non-invertible.
const DET_EPSILON: f64 = 1e-12;

/// A 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Translation by `(tx, ty)`.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    /// Rotation about the origin by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Uniform scale about the origin.
    pub fn scaling(scale: f64) -> Self {
        Self {
            a: scale,
            d: scale,
            ..Self::identity()
        }
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(self, next: Transform) -> Transform {
        Transform {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transform.
    ///
    /// Fails when the determinant is (near) zero, which happens for the
    /// sanitized degenerate transforms produced before an image or
    /// viewport has a real size.
    pub fn invert(&self) -> Result<Transform, GeometryError> {
        let det = self.determinant();
        if det.abs() < DET_EPSILON {
            return Err(GeometryError::NonInvertibleTransform);
        }
        Ok(Transform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_identity_maps_points_unchanged() {
        let p = Point::new(3.5, -2.0);
        assert_point_eq(Transform::identity().apply(p), p);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, -5.0);
        assert_point_eq(t.apply(Point::new(1.0, 1.0)), Point::new(11.0, -4.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let t = Transform::rotation(std::f64::consts::FRAC_PI_2);
        assert_point_eq(t.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_scaling() {
        let t = Transform::scaling(2.0);
        assert_point_eq(t.apply(Point::new(3.0, -1.0)), Point::new(6.0, -2.0));
    }

    #[test]
    fn test_then_applies_in_order() {
        // Translate then rotate is not rotate then translate
        let t = Transform::translation(1.0, 0.0).then(Transform::rotation(std::f64::consts::PI));
        assert_point_eq(t.apply(Point::new(0.0, 0.0)), Point::new(-1.0, 0.0));

        let u = Transform::rotation(std::f64::consts::PI).then(Transform::translation(1.0, 0.0));
        assert_point_eq(u.apply(Point::new(0.0, 0.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_invert_round_trips() {
        let t = Transform::translation(-50.0, 20.0)
            .then(Transform::rotation(0.7))
            .then(Transform::scaling(3.0))
            .then(Transform::translation(400.0, 300.0));
        let inv = t.invert().unwrap();
        let p = Point::new(123.0, -45.0);
        assert_point_eq(inv.apply(t.apply(p)), p);
        assert_point_eq(t.apply(inv.apply(p)), p);
    }

    #[test]
    fn test_invert_degenerate_fails() {
        let t = Transform::scaling(0.0);
        assert_eq!(t.invert(), Err(GeometryError::NonInvertibleTransform));
    }

    #[test]
    fn test_determinant() {
        assert!((Transform::scaling(2.0).determinant() - 4.0).abs() < 1e-12);
        assert!((Transform::rotation(1.2).determinant() - 1.0).abs() < 1e-12);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn transform_strategy() -> impl Strategy<Value = Transform> {
        (
            -100.0f64..=100.0,
            -100.0f64..=100.0,
            -std::f64::consts::PI..=std::f64::consts::PI,
            0.1f64..=10.0,
        )
            .prop_map(|(tx, ty, angle, scale)| {
                Transform::translation(tx, ty)
                    .then(Transform::rotation(angle))
                    .then(Transform::scaling(scale))
            })
    }

    proptest! {
        /// Property: applying a transform and its inverse round-trips.
        #[test]
        fn prop_invert_round_trip(
            t in transform_strategy(),
            x in -1000.0f64..=1000.0,
            y in -1000.0f64..=1000.0,
        ) {
            let inv = t.invert().unwrap();
            let p = Point::new(x, y);
            let q = inv.apply(t.apply(p));
            prop_assert!((q.x - p.x).abs() < 1e-6);
            prop_assert!((q.y - p.y).abs() < 1e-6);
        }

        /// Property: composition agrees with sequential application.
        #[test]
        fn prop_then_matches_sequential(
            t in transform_strategy(),
            u in transform_strategy(),
            x in -1000.0f64..=1000.0,
            y in -1000.0f64..=1000.0,
        ) {
            let p = Point::new(x, y);
            let composed = t.then(u).apply(p);
            let sequential = u.apply(t.apply(p));
            prop_assert!((composed.x - sequential.x).abs() < 1e-6);
            prop_assert!((composed.y - sequential.y).abs() < 1e-6);
        }
    }
}
