//! Benchmark error types.

use thiserror::Error;

/// Result type used throughout the benchmark harness.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised while preparing or running a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// The value range cannot supply `size` distinct values.
    #[error("cannot draw {size} distinct values from the range [1, {range}]")]
    InvalidRange {
        /// Requested number of values.
        size: usize,
        /// Upper bound of the value range.
        range: usize,
    },

    /// A search kind name matched neither `linear` nor `binary`.
    #[error("unknown search kind: {0:?}")]
    UnknownSearchKind(String),
}
