//! Scale-aware filter positioning
//!
//! A [`FilterShape`] describes a filter in its own coordinate system. To
//! sample it at source pixels, the resampler needs the shape bound to a
//! scale factor: when minifying, the kernel must widen by the inverse
//! scale (acting as a low-pass over the source pixels being merged) while
//! keeping unit area. [`ParameterizedFilter`] performs that binding and
//! exposes the three read-only queries (`min_index`, `max_index`, `eval`)
//! that the weight-table builder consumes, via the [`SampledFilter`]
//! trait.

use crate::{FilterError, FilterResult, FilterShape};

/// A positioned filter, ready to be sampled at integer source indices.
///
/// The trait is object-safe; consumers that mix filter kinds per axis can
/// hold a `Box<dyn SampledFilter>`.
pub trait SampledFilter {
    /// First integer source index with possibly-nonzero response for a
    /// filter centered at `center`.
    fn min_index(&self, center: f64) -> i32;

    /// Last integer source index with possibly-nonzero response.
    fn max_index(&self, center: f64) -> i32;

    /// Filter response at integer source index `i` for a filter centered
    /// at `center`. Must be finite for any `i`.
    fn eval(&self, center: f64, i: i32) -> f64;
}

/// A [`FilterShape`] bound to a scale factor.
///
/// `scale` is the destination/source size ratio. Magnification
/// (`scale >= 1`) samples the shape directly; minification stretches the
/// shape by `1/scale` in source space and scales its amplitude by `scale`
/// so the stretched filter keeps unit area.
#[derive(Debug, Clone, Copy)]
pub struct ParameterizedFilter<F> {
    shape: F,
    scale: f64,
    // min(scale, 1): the factor applied to offsets before evaluation
    stretch: f64,
    // effective support half-width in source pixels
    radius: f64,
}

impl<F: FilterShape> ParameterizedFilter<F> {
    /// Bind `shape` to a scale factor.
    pub fn new(shape: F, scale: f64) -> FilterResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FilterError::InvalidScale(scale));
        }
        let stretch = scale.min(1.0);
        let radius = shape.support() / stretch;
        Ok(ParameterizedFilter {
            shape,
            scale,
            stretch,
            radius,
        })
    }

    /// The bound scale factor.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Effective support half-width in source pixels.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The underlying shape.
    #[inline]
    pub fn shape(&self) -> &F {
        &self.shape
    }
}

impl<F: FilterShape> SampledFilter for ParameterizedFilter<F> {
    fn min_index(&self, center: f64) -> i32 {
        (center - self.radius).ceil() as i32
    }

    fn max_index(&self, center: f64) -> i32 {
        (center + self.radius).floor() as i32
    }

    fn eval(&self, center: f64, i: i32) -> f64 {
        self.stretch * self.shape.eval(self.stretch * (f64::from(i) - center))
    }
}
