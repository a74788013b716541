//! Error types for rescale-filter
//!
//! Filter shapes are total functions once constructed; the only fallible
//! surface is parameter validation at construction time. Evaluation never
//! returns an error.

use thiserror::Error;

/// Errors raised when constructing a filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Scale factor must be finite and positive
    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),

    /// Lanczos lobe count must be at least 1
    #[error("invalid lobe count: {0}")]
    InvalidLobes(u32),

    /// BC-cubic parameters must be finite
    #[error("non-finite cubic parameters: b={b}, c={c}")]
    NonFiniteParameters { b: f64, c: f64 },
}

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;
