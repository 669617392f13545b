//! Quick sort with a first-element pivot.

use super::{SortAlgorithm, SortStats};

/// Sorts `items` by partitioning around the first element.
///
/// The smaller side is sorted recursively and the larger one iteratively, so
/// recursion depth stays logarithmic even though already-sorted input still
/// costs \(O(n^2)\) comparisons.
pub fn quick_sort<T: Ord>(items: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = items.len();
    sort_range(items, &mut stats);
    stats.finish(SortAlgorithm::Quick, n)
}

fn sort_range<T: Ord>(mut items: &mut [T], stats: &mut SortStats) {
    while items.len() > 1 {
        let pivot = partition(items, stats);
        let (left, rest) = core::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_range(left, stats);
            items = right;
        } else {
            sort_range(right, stats);
            items = left;
        }
    }
}

/// Places `items[0]` at its final index `j` with `items[..j] <= items[j] <= items[j + 1..]`.
///
/// Both scans stop on keys equal to the pivot, which keeps partitions balanced
/// when many keys repeat. Requires `items.len() >= 2`.
fn partition<T: Ord>(items: &mut [T], stats: &mut SortStats) -> usize {
    let hi = items.len() - 1;
    let mut i = 0;
    let mut j = hi + 1;
    loop {
        i += 1;
        while i < hi && items[i] < items[0] {
            i += 1;
        }
        j -= 1;
        while j > 0 && items[0] < items[j] {
            j -= 1;
        }
        if i >= j {
            break;
        }
        stats.swap(items, i, j);
    }
    if j != 0 {
        stats.swap(items, 0, j);
    }
    j
}
