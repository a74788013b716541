//! rescale - Fixed-point image resampling weight generation
//!
//! Computes the integer interpolation weights a fixed-point scaling loop
//! applies per destination sample: pick a continuous filter shape, bind
//! it to a scale factor, and sample it into a [`WeightTable`] whose
//! weights sum exactly to [`WEIGHT_ONE`] (no brightness drift, however
//! many rows and columns are resampled).
//!
//! The convolution itself is the consumer's business; this workspace
//! produces one 1D weight table per sample position.
//!
//! # Example
//!
//! ```
//! use rescale::{Lanczos, ParameterizedFilter, WEIGHT_ONE, WeightTable};
//!
//! // Lanczos3 at a 2:1 reduction, positioned between source pixels
//! let filter = ParameterizedFilter::new(Lanczos::default(), 0.5).unwrap();
//! let table = WeightTable::build(&filter, WEIGHT_ONE, 8.25, 0, 63, true);
//!
//! assert_eq!(table.weights().iter().sum::<i32>(), WEIGHT_ONE);
//! ```

// Re-export filter shapes and the sampling capability
pub use rescale_filter::*;

// Re-export the weight-table core
pub use rescale_weights::{WEIGHT_BITS, WEIGHT_ONE, WeightTable};
