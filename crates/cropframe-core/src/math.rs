//! Scalar helpers shared by the geometry modules.
//!
//! Everything in here is a small pure function over `f64`. The crop math
//! deliberately never raises errors for degenerate numbers; transient
//! states (no image yet, zero-sized viewport) flow through `zero_if_nan`
//! and produce a harmless degenerate result instead of a crash.

use crate::types::Point;

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Clamp `value` into `[min, max]`.
///
/// `min > max` is a caller bug, not a runtime condition.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp called with inverted bounds");
    value.clamp(min, max)
}

/// Arithmetic mean of two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Sign of `value` as -1, 0 or 1.
///
/// NaN input is a caller bug; the result for NaN is unspecified.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Whether `a` and `b` point the same way, with zero matching either sign.
///
/// Used to tell apart "both corners overflow to the left" from "the
/// corners need opposing corrections" when repairing a crop.
pub fn signs_match(a: f64, b: f64) -> bool {
    a == 0.0 || b == 0.0 || (a > 0.0) == (b > 0.0)
}

/// The value with the greatest absolute magnitude.
///
/// Ties keep the earlier value (left fold). An empty slice yields 0.
pub fn max_magnitude(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .fold(0.0, |acc, v| if v.abs() > acc.abs() { v } else { acc })
}

/// Relative-epsilon float comparison.
///
/// True when `|a - b| < |max_magnitude(a, b)| * f64::EPSILON`. Not
/// suitable near zero (two exact zeros compare unequal) or at extreme
/// magnitudes; callers compare against known-nonzero references.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < max_magnitude(&[a, b]).abs() * f64::EPSILON
}

/// Substitute 0 for NaN or infinity.
///
/// Keeps degenerate layout math (division by a zero-sized viewport or
/// crop) from propagating NaN into downstream geometry.
pub fn zero_if_nan(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
