//! Integer weight tables
//!
//! Discretizes a positioned continuous filter into fixed-point integer
//! convolution weights. This is the numerically delicate part of the
//! scaling pipeline: the sampled weights must sum to the normalization
//! constant *exactly*, or repeated resampling drifts the image brightness.
//!
//! Construction runs three sequential phases:
//!
//! 1. **Range discovery** - intersect the filter's support with the
//!    caller's clamp range and compute the continuous normalization sum.
//! 2. **Trimming** (optional) - drop leading/trailing taps that quantize
//!    to zero, shrinking the per-pixel convolution cost.
//! 3. **Emission** - quantize each tap to the signed 16-bit range and
//!    force the total onto `weight_one` with a single corrective
//!    adjustment near the filter center.

use log::trace;
use rescale_filter::SampledFilter;

// ============================================================================
// Fixed-point constants
// ============================================================================

/// Fractional bits of the weight domain.
pub const WEIGHT_BITS: u32 = 14;

/// Fixed-point representation of 1.0; the conventional `weight_one`.
pub const WEIGHT_ONE: i32 = 1 << WEIGHT_BITS;

// ============================================================================
// WeightTable
// ============================================================================

/// Quantized filter weights for one destination sample.
///
/// `weights[k]` applies to the source pixel at absolute index
/// `a0 + i0 + k`, where `a0` is the clamp base passed to [`build`] and
/// `i0` the stored offset. Immutable once built.
///
/// [`build`]: WeightTable::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: Vec<i32>,
    i0: i32,
    i1: i32,
}

impl WeightTable {
    /// Sample `filter` at integer source indices around `center`, scaled
    /// so the quantized weights sum exactly to `weight_one`.
    ///
    /// `a0..=a1` clamps the usable absolute source range (image edges);
    /// the stored offsets are relative to `a0`. With `trim_zeros` set,
    /// leading and trailing taps that quantize to zero are dropped, but
    /// at least one tap is always retained.
    ///
    /// Never fails: a degenerate filter (zero normalization sum, or every
    /// tap quantizing to zero) collapses to a single pass-through weight
    /// of `weight_one` at the first retained index. `weight_one > 0` and
    /// `a0 <= a1` are caller obligations.
    pub fn build<F: SampledFilter + ?Sized>(
        filter: &F,
        weight_one: i32,
        center: f64,
        a0: i32,
        a1: i32,
        trim_zeros: bool,
    ) -> WeightTable {
        debug_assert!(weight_one > 0, "weight_one must be positive");
        debug_assert!(a0 <= a1, "empty clamp range");

        // Source range of the positioned filter, clamped to [a0, a1].
        // The trailing clamps only engage when the support misses the
        // clamp range entirely; they keep the table non-empty.
        let mut i0 = filter.min_index(center).max(a0).min(a1);
        let mut i1 = filter.max_index(center).min(a1).max(i0);

        // Continuous normalization sum over the working range
        let mut den = 0.0;
        for i in i0..=i1 {
            den += filter.eval(center, i);
        }

        // Scale so that the quantized taps sum to roughly weight_one; a
        // zero denominator falls through to the sum correction below
        let scale = if den == 0.0 {
            f64::from(weight_one)
        } else {
            f64::from(weight_one) / den
        };

        // Shrink [i0, i1] to the nonzero taps, keeping at least one
        if trim_zeros {
            let mut still_zero = true;
            // only read back on all-zero rows; starting at i0 keeps the
            // bounds valid for negative index ranges too
            let mut last_nonzero = i0;
            for i in i0..=i1 {
                let t = quantize(scale * filter.eval(center, i));
                if still_zero && t == 0 {
                    i0 += 1;
                } else {
                    still_zero = false;
                    if t != 0 {
                        last_nonzero = i;
                    }
                }
            }
            // An all-zero row would advance i0 past the range; keep the
            // last tap so the bounds stay inside [a0, a1]
            i0 = i0.min(i1);
            i1 = last_nonzero.max(i0);
        }

        let mut weights = Vec::with_capacity((i1 - i0 + 1) as usize);
        let mut sum: i32 = 0;
        for i in i0..=i1 {
            let t = quantize(scale * filter.eval(center, i));
            weights.push(t);
            sum += t;
        }

        if sum == 0 {
            // Every tap vanished under quantization: fall back to a
            // pass-through weight at the first retained index
            i1 = i0;
            weights.truncate(1);
            weights[0] = weight_one;
        } else if sum != weight_one {
            // Force the exact sum by adjusting one tap near the filter
            // center. The clamp order (down to i1 - 1 first, then up to
            // i0) is compatibility behavior; do not reorder.
            let mut c = (center + 0.5) as i32;
            if c >= i1 {
                c = i1 - 1;
            }
            if c < i0 {
                c = i0;
            }
            trace!("sum correction at {}: {:+}", c, weight_one - sum);
            weights[(c - i0) as usize] += weight_one - sum;
        }

        trace!(
            "center {:.4}: taps [{}..{}] {:?}",
            center,
            i0 - a0,
            i1 - a0,
            weights
        );

        WeightTable {
            weights,
            i0: i0 - a0,
            i1: i1 - a0,
        }
    }

    /// The quantized weights, one per retained source sample.
    #[inline]
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Offset of the first retained source index from the clamp base.
    #[inline]
    pub fn i0(&self) -> i32 {
        self.i0
    }

    /// Offset of the last retained source index from the clamp base.
    #[inline]
    pub fn i1(&self) -> i32 {
        self.i1
    }

    /// Number of taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: a table retains at least one tap.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Clamp to the signed 16-bit range, then round half toward +infinity.
///
/// The clamp bounds are a contract with the fixed-point convolution
/// loops downstream, which accumulate in 32 bits and must not overflow
/// per tap.
#[inline]
fn quantize(v: f64) -> i32 {
    (v.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) + 0.5).floor() as i32
}
