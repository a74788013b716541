//! Continuous filter shapes
//!
//! This module defines the continuous 1D reconstruction filters that the
//! resampling pipeline discretizes into integer weight tables:
//!
//! - Box (nearest-neighbor averaging)
//! - Triangle (bilinear)
//! - Cubic B-spline (smoothing, never rings)
//! - Catmull-Rom (interpolating cardinal cubic)
//! - Mitchell-Netravali (two-parameter BC-cubic family)
//! - Lanczos (windowed sinc, configurable lobe count)
//! - Gaussian (windowed to finite support)
//!
//! Every shape is symmetric about zero, has a finite support half-width,
//! and evaluates to zero outside `[-support, support]`. Evaluation is a
//! total function; the parameterized shapes validate their parameters at
//! construction time instead.

use std::f64::consts::PI;

use crate::{FilterError, FilterResult};

// ============================================================================
// Shape trait
// ============================================================================

/// A continuous, symmetric 1D filter with finite support.
///
/// `eval` takes a signed offset from the filter center and returns the
/// response there. Implementations must return 0 for `|x| >= support()`.
pub trait FilterShape {
    /// Half-width of the nonzero response, in source pixels.
    fn support(&self) -> f64;

    /// Response at signed offset `x` from the center.
    fn eval(&self, x: f64) -> f64;
}

// ============================================================================
// Box
// ============================================================================

/// Box filter: constant 1 over a one-pixel window.
///
/// Equivalent to nearest-neighbor when magnifying and to unweighted
/// averaging when minifying. The window is open at both ends, keeping
/// the response symmetric; a filter positioned exactly half-way between
/// two source pixels quantizes to an all-zero row, which the weight
/// builder resolves with its pass-through fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxFilter;

impl FilterShape for BoxFilter {
    fn support(&self) -> f64 {
        0.5
    }

    fn eval(&self, x: f64) -> f64 {
        if x.abs() < 0.5 { 1.0 } else { 0.0 }
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// Triangle (tent) filter: linear falloff over `[-1, 1]`.
///
/// Produces bilinear interpolation when used on both axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

impl FilterShape for Triangle {
    fn support(&self) -> f64 {
        1.0
    }

    fn eval(&self, x: f64) -> f64 {
        let a = x.abs();
        if a < 1.0 { 1.0 - a } else { 0.0 }
    }
}

// ============================================================================
// Cubic B-spline
// ============================================================================

/// Uniform cubic B-spline over `[-2, 2]`.
///
/// A smoothing (non-interpolating) cubic: it never overshoots, so it
/// cannot ring, at the cost of visible blurring. Its integer-grid samples
/// form a partition of unity at every phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicSpline;

impl FilterShape for CubicSpline {
    fn support(&self) -> f64 {
        2.0
    }

    fn eval(&self, x: f64) -> f64 {
        let a = x.abs();
        if a < 1.0 {
            0.5 * a * a * a - a * a + 2.0 / 3.0
        } else if a < 2.0 {
            let t = 2.0 - a;
            t * t * t / 6.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Catmull-Rom
// ============================================================================

/// Catmull-Rom spline over `[-2, 2]`.
///
/// The interpolating cardinal cubic (BC-cubic with `b = 0`, `c = 0.5`):
/// passes through the source samples exactly, with mild ringing on sharp
/// edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatmullRom;

impl FilterShape for CatmullRom {
    fn support(&self) -> f64 {
        2.0
    }

    fn eval(&self, x: f64) -> f64 {
        let a = x.abs();
        if a < 1.0 {
            (1.5 * a - 2.5) * a * a + 1.0
        } else if a < 2.0 {
            ((-0.5 * a + 2.5) * a - 4.0) * a + 2.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Mitchell-Netravali
// ============================================================================

/// Mitchell-Netravali BC-cubic family over `[-2, 2]`.
///
/// The `(b, c)` parameters trade blurring against ringing; `b = c = 1/3`
/// (the default) is the subjectively-best compromise from the original
/// paper. `b = 1, c = 0` gives the cubic B-spline and `b = 0, c = 0.5`
/// gives Catmull-Rom.
#[derive(Debug, Clone, Copy)]
pub struct MitchellNetravali {
    b: f64,
    c: f64,
}

impl Default for MitchellNetravali {
    fn default() -> Self {
        MitchellNetravali {
            b: 1.0 / 3.0,
            c: 1.0 / 3.0,
        }
    }
}

impl MitchellNetravali {
    /// Create a BC-cubic with the given parameters.
    pub fn new(b: f64, c: f64) -> FilterResult<Self> {
        if !b.is_finite() || !c.is_finite() {
            return Err(FilterError::NonFiniteParameters { b, c });
        }
        Ok(MitchellNetravali { b, c })
    }

    /// The `b` (blur) parameter.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `c` (ringing) parameter.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }
}

impl FilterShape for MitchellNetravali {
    fn support(&self) -> f64 {
        2.0
    }

    fn eval(&self, x: f64) -> f64 {
        let (b, c) = (self.b, self.c);
        let a = x.abs();
        if a < 1.0 {
            ((12.0 - 9.0 * b - 6.0 * c) * a * a * a
                + (-18.0 + 12.0 * b + 6.0 * c) * a * a
                + (6.0 - 2.0 * b))
                / 6.0
        } else if a < 2.0 {
            ((-b - 6.0 * c) * a * a * a
                + (6.0 * b + 30.0 * c) * a * a
                + (-12.0 * b - 48.0 * c) * a
                + (8.0 * b + 24.0 * c))
                / 6.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Lanczos
// ============================================================================

/// Lanczos windowed sinc: `sinc(x) * sinc(x / lobes)` over `[-lobes, lobes]`.
///
/// Sharpest of the stock filters; more lobes mean a closer approximation
/// to the ideal low-pass at the cost of a wider support and stronger
/// ringing. Three lobes (the default) is the common choice.
#[derive(Debug, Clone, Copy)]
pub struct Lanczos {
    lobes: u32,
}

impl Default for Lanczos {
    fn default() -> Self {
        Lanczos { lobes: 3 }
    }
}

impl Lanczos {
    /// Create a Lanczos filter with the given lobe count.
    pub fn new(lobes: u32) -> FilterResult<Self> {
        if lobes < 1 {
            return Err(FilterError::InvalidLobes(lobes));
        }
        Ok(Lanczos { lobes })
    }

    /// The lobe count.
    #[inline]
    pub fn lobes(&self) -> u32 {
        self.lobes
    }
}

impl FilterShape for Lanczos {
    fn support(&self) -> f64 {
        f64::from(self.lobes)
    }

    fn eval(&self, x: f64) -> f64 {
        let n = f64::from(self.lobes);
        let a = x.abs();
        if a >= n {
            0.0
        } else if a < 1e-12 {
            // sinc(0) * sinc(0), avoiding 0/0
            1.0
        } else {
            let px = PI * x;
            n * (px.sin() * (px / n).sin()) / (px * px)
        }
    }
}

// ============================================================================
// Gaussian
// ============================================================================

/// Truncated Gaussian over `[-1.25, 1.25]`.
///
/// `sqrt(2/pi) * exp(-2 x^2)`, shifted down by its value at the support
/// edge so the response reaches zero continuously instead of being cut
/// off mid-slope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

const GAUSSIAN_SUPPORT: f64 = 1.25;

impl Gaussian {
    fn bell(x: f64) -> f64 {
        (2.0 / PI).sqrt() * (-2.0 * x * x).exp()
    }
}

impl FilterShape for Gaussian {
    fn support(&self) -> f64 {
        GAUSSIAN_SUPPORT
    }

    fn eval(&self, x: f64) -> f64 {
        if x.abs() >= GAUSSIAN_SUPPORT {
            0.0
        } else {
            (Self::bell(x) - Self::bell(GAUSSIAN_SUPPORT)).max(0.0)
        }
    }
}
