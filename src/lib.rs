//! Search Timer
//!
//! Compares linear and binary search by the number of element comparisons
//! each makes and the wall-clock time each takes over randomly generated
//! arrays of distinct integers.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod bench;
pub mod logging;

/// Search Timer Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::algorithms::binary_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::linear_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::SearchResult;

    #[doc(no_inline)]
    pub use super::bench::{BenchConfig, BenchError, BenchReport, BenchmarkRunner, SearchKind};
}
