//! [Linear Search]: Method for finding an element within a list. It
//! sequentially checks each element of the list until a match is found or the
//! whole list has been searched.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

use super::SearchResult;

/// Scans `arr` front to back for `target`, counting every element examined.
///
/// The matching element counts as one comparison, so a hit at position `i`
/// costs `i + 1` comparisons and a miss costs `arr.len()`.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Linear search sequentially checks each element of the
/// list until a match is found or the whole list has been searched.
///
/// # Examples
///
/// ```
/// use search_timer::prelude::*;
///
/// let arr = [5, 3, 8, 1, 9];
///
/// assert_eq!(linear_search(&arr, &8), SearchResult::found(2, 3));
/// assert_eq!(linear_search(&[1, 2, 3], &100), SearchResult::not_found(3));
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> SearchResult {
    let mut comparisons = 0;

    for (i, elem) in arr.iter().enumerate() {
        comparisons += 1;

        if *elem == *target {
            return SearchResult::found(i, comparisons);
        }
    }

    SearchResult::not_found(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_in_middle() {
        let arr = [5, 3, 8, 1, 9];
        assert_eq!(linear_search(&arr, &8), SearchResult::found(2, 3));
    }

    #[test]
    fn test_found_at_start() {
        let arr = [1, 2, 3, 4, 5];
        assert_eq!(linear_search(&arr, &1), SearchResult::found(0, 1));
    }

    #[test]
    fn test_found_at_end() {
        let arr = [1, 2, 3, 4, 5];
        assert_eq!(linear_search(&arr, &5), SearchResult::found(4, 5));
    }

    #[test]
    fn test_not_found_scans_everything() {
        let arr = [1, 2, 3];
        let result = linear_search(&arr, &100);

        assert_eq!(result.index, None);
        assert_eq!(result.comparisons, 3);
        assert_eq!(result.found_index(), -1);
    }

    #[test]
    fn test_empty_array() {
        let arr: [u32; 0] = [];
        assert_eq!(linear_search(&arr, &1), SearchResult::not_found(0));
    }

    #[test]
    fn test_single_element_found() {
        let arr = [42];
        assert_eq!(linear_search(&arr, &42), SearchResult::found(0, 1));
    }

    #[test]
    fn test_single_element_not_found() {
        let arr = [42];
        assert_eq!(linear_search(&arr, &99), SearchResult::not_found(1));
    }

    #[test]
    fn test_stops_at_first_occurrence() {
        let arr = [1, 2, 4, 4, 4, 5, 6];
        assert_eq!(linear_search(&arr, &4), SearchResult::found(2, 3));
    }
}
