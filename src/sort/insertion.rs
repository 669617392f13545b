//! Insertion sort, and the gapped pass shell sort builds on.

use super::{SortAlgorithm, SortStats};

/// Sorts `items` by sinking each element into the sorted prefix before it.
///
/// Linear on input that is already sorted; stable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    gapped_insertion(items, 1, &mut stats);
    stats.finish(SortAlgorithm::Insertion, items.len())
}

/// One insertion pass over the elements `gap` apart.
pub(crate) fn gapped_insertion<T: Ord>(items: &mut [T], gap: usize, stats: &mut SortStats) {
    for i in gap..items.len() {
        let mut j = i;
        while j >= gap && items[j] < items[j - gap] {
            stats.swap(items, j, j - gap);
            j -= gap;
        }
    }
}
