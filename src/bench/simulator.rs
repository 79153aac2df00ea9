//! Single simulated searches.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use super::error::BenchError;
use crate::algorithms::binary_search::binary_search;
use crate::algorithms::linear_search::linear_search;

/// The search algorithms under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Front-to-back scan of the unsorted array.
    Linear,
    /// Bisection of the sorted array.
    Binary,
}

impl SearchKind {
    /// Every kind, in report order.
    pub const ALL: [SearchKind; 2] = [SearchKind::Linear, SearchKind::Binary];

    /// Whether this kind needs its input sorted ascending.
    #[inline]
    pub const fn requires_sorted(&self) -> bool {
        matches!(self, SearchKind::Binary)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width and alignment flags apply to the label.
        f.pad(match self {
            SearchKind::Linear => "Linear",
            SearchKind::Binary => "Binary",
        })
    }
}

impl FromStr for SearchKind {
    type Err = BenchError;

    /// Parses `linear` or `binary`, ignoring ASCII case.
    ///
    /// ```
    /// use search_timer::bench::simulator::SearchKind;
    ///
    /// assert_eq!("LINEAR".parse::<SearchKind>(), Ok(SearchKind::Linear));
    /// assert!("ternary".parse::<SearchKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("linear") {
            Ok(SearchKind::Linear)
        } else if s.eq_ignore_ascii_case("binary") {
            Ok(SearchKind::Binary)
        } else {
            Err(BenchError::UnknownSearchKind(s.to_owned()))
        }
    }
}

/// Searches `arr` for a target drawn uniformly from `[1, range]` and returns
/// the number of comparisons made.
///
/// The target may be absent from `arr`. For [`SearchKind::Binary`] the caller
/// must pass an ascending array.
///
/// # Panics
///
/// Panics if `range` is zero.
pub fn simulate<R>(rng: &mut R, kind: SearchKind, range: usize, arr: &[usize]) -> usize
where
    R: Rng + ?Sized,
{
    let target = rng.gen_range(1..=range);

    match kind {
        SearchKind::Linear => linear_search(arr, &target).comparisons,
        SearchKind::Binary => binary_search(arr, &target).comparisons,
    }
}
