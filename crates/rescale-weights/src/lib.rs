//! rescale-weights - Fixed-point resampling weight tables
//!
//! This crate turns a positioned continuous filter (any
//! [`SampledFilter`](rescale_filter::SampledFilter), typically a
//! [`ParameterizedFilter`](rescale_filter::ParameterizedFilter)) into the
//! integer convolution weights used by a fixed-point scaling loop. The
//! central guarantee is exact normalization: every table sums to its
//! `weight_one` constant, so repeated resampling cannot drift the image
//! brightness.
//!
//! # Example
//!
//! ```
//! use rescale_filter::{CatmullRom, ParameterizedFilter};
//! use rescale_weights::{WEIGHT_ONE, WeightTable};
//!
//! let f = ParameterizedFilter::new(CatmullRom, 1.0).unwrap();
//! let table = WeightTable::build(&f, WEIGHT_ONE, 3.5, 0, 15, false);
//! assert_eq!(table.weights().iter().sum::<i32>(), WEIGHT_ONE);
//! ```

mod weight_table;

pub use weight_table::{WEIGHT_BITS, WEIGHT_ONE, WeightTable};
