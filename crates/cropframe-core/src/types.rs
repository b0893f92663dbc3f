//! Core value types for the crop-geometry engine.
//!
//! Every type here is a plain value: edits replace state wholesale, the
//! engine never mutates geometry in place. Coordinates are `f64` image
//! pixels unless a function says otherwise.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Error types for geometry operations.
///
/// Almost nothing in the engine can fail: precondition violations are
/// programmer errors (debug-asserted) and degenerate transient numbers
/// are sanitized, not raised. The one genuinely fallible operation is
/// inverting a view transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The affine transform has a near-zero determinant and cannot map
    /// view coordinates back to image coordinates.
    #[error("transform is not invertible")]
    NonInvertibleTransform,
}

/// A 2D coordinate. The frame (image space vs. view space) is implied
/// by context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product, treating the point as a vector from the origin.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the vector from the origin.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Size of an image or viewport, in pixels.
///
/// Width and height must be positive for fitting to be meaningful; a
/// zero-sized dimension is the documented degenerate state before an
/// image has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The crop rectangle: center, extents and rotation in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropState {
    /// Center x, image pixels.
    pub x: f64,
    /// Center y, image pixels.
    pub y: f64,
    /// Full width, always positive.
    pub width: f64,
    /// Full height, always positive.
    pub height: f64,
    /// Rotation in radians.
    pub angle: f64,
}

impl CropState {
    pub fn new(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            angle,
        }
    }

    /// Center of the crop rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The same crop moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> CropState {
        CropState {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Aspect-ratio constraint for the crop rectangle.
///
/// Modeled as a sum type rather than a nullable number so the two
/// algorithmic branches in the boundary fitter stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Aspect {
    /// No constraint; corners move freely.
    #[default]
    Free,
    /// width / height locked to the given ratio.
    Ratio(f64),
}

impl Aspect {
    /// Create a fixed ratio constraint.
    ///
    /// A non-finite or non-positive ratio is a caller programming
    /// error, not a recoverable condition.
    pub fn ratio(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value > 0.0,
            "aspect ratio must be a finite positive number"
        );
        Aspect::Ratio(value)
    }

    /// The ratio value, if constrained.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Aspect::Free => None,
            Aspect::Ratio(v) => Some(v),
        }
    }
}

/// Identifies one corner of the crop rectangle.
///
/// `A` is the top-left corner before rotation; `B`, `C`, `D` proceed
/// clockwise. `A`/`C` form one diagonal and `B`/`D` the other; the
/// rest of the engine leans on that pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    A,
    B,
    C,
    D,
}

impl Corner {
    /// All corners in the fixed repair order.
    pub const ALL: [Corner; 4] = [Corner::A, Corner::B, Corner::C, Corner::D];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::A => Corner::C,
            Corner::B => Corner::D,
            Corner::C => Corner::A,
            Corner::D => Corner::B,
        }
    }

    /// Signs of this corner's local coordinates relative to the crop
    /// center, before rotation: `(sign of x, sign of y)`.
    ///
    /// Table-driven so diagonal orientation never goes through a
    /// switch on corner names.
    pub fn local_signs(self) -> (f64, f64) {
        match self {
            Corner::A => (-1.0, -1.0),
            Corner::B => (1.0, -1.0),
            Corner::C => (1.0, 1.0),
            Corner::D => (-1.0, 1.0),
        }
    }

    fn index(self) -> usize {
        match self {
            Corner::A => 0,
            Corner::B => 1,
            Corner::C => 2,
            Corner::D => 3,
        }
    }
}

/// The four image-space corners of a crop rectangle, indexed by
/// [`Corner`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners(pub [Point; 4]);

impl Corners {
    /// Iterate corners in `A`, `B`, `C`, `D` order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }
}

impl Index<Corner> for Corners {
    type Output = Point;
    fn index(&self, corner: Corner) -> &Point {
        &self.0[corner.index()]
    }
}

impl IndexMut<Corner> for Corners {
    fn index_mut(&mut self, corner: Corner) -> &mut Point {
        &mut self.0[corner.index()]
    }
}
