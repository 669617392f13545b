//! Selection sort.

use super::{SortAlgorithm, SortStats};

/// Sorts `items` by selecting the minimum of the unsorted suffix each round.
///
/// Performs at most `n - 1` swaps regardless of input order.
pub fn selection_sort<T: Ord>(items: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = items.len();
    for outer in 0..n {
        let mut min = outer;
        for inner in outer + 1..n {
            if items[inner] < items[min] {
                min = inner;
            }
        }
        if min != outer {
            stats.swap(items, outer, min);
        }
    }
    stats.finish(SortAlgorithm::Selection, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_bounded_by_len() {
        let mut items = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let stats = selection_sort(&mut items);
        assert_eq!(items, (0..10).collect::<Vec<_>>());
        assert!(stats.swaps <= 9);
    }
}
