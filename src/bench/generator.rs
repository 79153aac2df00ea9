//! Sample array generation.
//!
//! Arrays are built by rejection sampling: draw a value from `[1, range]`,
//! discard it if it was already drawn, repeat until `size` values are held.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::error::{BenchError, Result};

/// Draws `size` pairwise distinct values uniformly from `[1, range]`.
///
/// The output is in draw order; use [`sorted_copy`] for an ascending view of
/// the same values.
///
/// # Errors
///
/// Returns [`BenchError::InvalidRange`] if `range < size`, since the pool of
/// distinct values would run dry before the array is full.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use search_timer::bench::generator::generate_sample_array;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let arr = generate_sample_array(&mut rng, 5, 5).unwrap();
///
/// let mut sorted = arr.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///
/// assert!(generate_sample_array(&mut rng, 6, 5).is_err());
/// ```
pub fn generate_sample_array<R>(
    rng: &mut R,
    size: usize,
    range: usize,
) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    if range < size {
        return Err(BenchError::InvalidRange { size, range });
    }

    let mut used = HashSet::with_capacity(size);
    let mut arr = Vec::with_capacity(size);
    let mut rejected = 0usize;

    while arr.len() < size {
        let value = rng.gen_range(1..=range);

        if used.insert(value) {
            arr.push(value);
        } else {
            rejected += 1;
        }
    }

    debug!(size, range, rejected, "generated sample array");

    Ok(arr)
}

/// Returns an ascending copy of `arr`, leaving the original untouched.
pub fn sorted_copy(arr: &[usize]) -> Vec<usize> {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();
    sorted
}
