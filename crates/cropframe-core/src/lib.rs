//! Cropframe Core - crop-geometry engine
//!
//! This crate provides the pure math behind an interactive crop tool:
//! projecting a rotated crop rectangle to its image-space corners,
//! mapping between image space and a display viewport, and the core of
//! it: repositioning and resizing the crop under simultaneous
//! constraints (image bounds, aspect ratio, minimum size, preferred
//! repair with fallback).
//!
//! The engine is synchronous, single-threaded and side-effect free.
//! Every operation maps immutable inputs to a new value; rendering,
//! input capture and image decoding live in external collaborators
//! that call in with plain numeric state and replace their state with
//! the result.

pub mod fit;
pub mod math;
pub mod project;
pub mod transform;
pub mod types;
pub mod view;

pub use fit::{fit_crop, fit_point, nearest_point_in_bounds, reset_crop, shift_required, FitMode, Shift};
pub use project::{corners, to_local};
pub use transform::Transform;
pub use types::{Aspect, Corner, Corners, CropState, Dimension, GeometryError, Point};
pub use view::{fit_transform, image_to_view, view_to_image, ViewState, VIEW_MARGIN};
