//! rescale-filter - Continuous resampling filter shapes
//!
//! This crate provides the continuous 1D filters used by the rescale
//! image scaling library:
//!
//! - A [`FilterShape`] trait for symmetric, finite-support filters
//! - Stock shapes: box, triangle, cubic B-spline, Catmull-Rom,
//!   Mitchell-Netravali, Lanczos, Gaussian
//! - [`ParameterizedFilter`], which binds a shape to a scale factor and
//!   exposes the integer-sampling queries ([`SampledFilter`]) consumed by
//!   the weight-table builder in `rescale-weights`

mod error;
pub mod parameterized;
pub mod shape;

pub use error::{FilterError, FilterResult};
pub use parameterized::{ParameterizedFilter, SampledFilter};
pub use shape::{
    BoxFilter, CatmullRom, CubicSpline, FilterShape, Gaussian, Lanczos, MitchellNetravali,
    Triangle,
};
