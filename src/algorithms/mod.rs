//! Search Algorithms.
//!
//! Every search reports how many element comparisons it made alongside the
//! position it found, since the comparison count is the cost being measured.

pub mod binary_search;
pub mod linear_search;

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Position of the target, or [`None`] if it is absent.
    pub index: Option<usize>,
    /// Number of element comparisons performed before termination.
    pub comparisons: usize,
}

impl SearchResult {
    /// A hit at `index` after `comparisons` comparisons.
    #[inline]
    pub const fn found(index: usize, comparisons: usize) -> Self {
        Self {
            index: Some(index),
            comparisons,
        }
    }

    /// A miss after `comparisons` comparisons.
    #[inline]
    pub const fn not_found(comparisons: usize) -> Self {
        Self {
            index: None,
            comparisons,
        }
    }

    /// Returns `true` if the target was located.
    #[inline]
    pub const fn is_found(&self) -> bool {
        self.index.is_some()
    }

    /// Returns the position in sentinel form, `-1` meaning "not found".
    ///
    /// # Examples
    ///
    /// ```
    /// use search_timer::algorithms::SearchResult;
    ///
    /// assert_eq!(SearchResult::found(4, 1).found_index(), 4);
    /// assert_eq!(SearchResult::not_found(3).found_index(), -1);
    /// ```
    pub fn found_index(&self) -> isize {
        self.index
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }
}
