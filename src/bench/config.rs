//! Benchmark configuration.

use super::error::{BenchError, Result};

/// Compiled-in array size used by the `search-timer` binary.
pub const ARRAY_SIZE: usize = 1000;

/// Sizing for one benchmark run.
///
/// Each algorithm performs `array_size` searches against an array of
/// `array_size` distinct values drawn from `[1, value_range]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in the sample array.
    pub array_size: usize,
    /// Upper bound (inclusive) of generated values and search targets.
    pub value_range: usize,
}

impl BenchConfig {
    /// A configuration of `array_size` elements whose values span exactly
    /// `[1, array_size]`.
    pub const fn with_array_size(array_size: usize) -> Self {
        Self {
            array_size,
            value_range: array_size,
        }
    }

    /// Number of simulated searches run for each algorithm.
    #[inline]
    pub const fn searches(&self) -> usize {
        self.array_size
    }

    /// Rejects configurations the generator could never satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.value_range < self.array_size {
            return Err(BenchError::InvalidRange {
                size: self.array_size,
                range: self.value_range,
            });
        }

        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::with_array_size(ARRAY_SIZE)
    }
}
