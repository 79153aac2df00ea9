//! [Binary Search]: A search algorithm that finds the position of a target
//! value within a sorted array.
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use core::cmp::Ordering;

use super::SearchResult;

/// Bisects the ascending-sorted `arr` looking for `target`, counting one
/// comparison per probe, including the probe that matches.
///
/// The midpoint of the inclusive window `[low, high]` is always
/// `(low + high) / 2`, rounding toward the lower index. Results are
/// meaningless if `arr` is not sorted; no check is performed.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making at most
/// ⌈log₂(*n* + 1)⌉ comparisons, where `n` is the number of elements in the
/// array.
///
/// # Examples
///
/// ```
/// use search_timer::prelude::*;
///
/// let arr = [1, 3, 5, 8, 9];
///
/// assert_eq!(binary_search(&arr, &5), SearchResult::found(2, 1));
/// assert_eq!(binary_search(&arr, &8), SearchResult::found(3, 2));
/// assert_eq!(binary_search(&arr, &4).index, None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> SearchResult {
    // `hi` is exclusive so an empty window never underflows; the probe below
    // is still the floor midpoint of the inclusive window `[lo, hi - 1]`.
    let mut lo = 0;
    let mut hi = arr.len();
    let mut comparisons = 0;

    while lo < hi {
        comparisons += 1;
        let mid = lo + ((hi - 1 - lo) >> 1);

        match target.cmp(&arr[mid]) {
            Ordering::Equal => return SearchResult::found(mid, comparisons),
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }

    SearchResult::not_found(comparisons)
}
