//! Top-down merge sort.

use super::insertion::gapped_insertion;
use super::{SortAlgorithm, SortStats};

/// Runs this short are finished with insertion sort instead of splitting.
const INSERTION_CUTOFF: usize = 4;

/// Sorts `items` by sorting each half and merging them through a buffer.
///
/// Stable. Allocates one auxiliary copy of the input. A merge is skipped when
/// the halves are already in order, so sorted input does no merging at all.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = items.len();
    let mut aux = items.to_vec();
    sort_run(items, &mut aux, &mut stats);
    stats.finish(SortAlgorithm::Merge, n)
}

fn sort_run<T: Ord + Clone>(items: &mut [T], aux: &mut [T], stats: &mut SortStats) {
    let n = items.len();
    if n <= INSERTION_CUTOFF {
        gapped_insertion(items, 1, stats);
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (aux_left, aux_right) = aux.split_at_mut(mid);
        sort_run(left, aux_left, stats);
        sort_run(right, aux_right, stats);
    }
    if items[mid - 1] <= items[mid] {
        return;
    }
    merge(items, aux, mid);
    stats.merges += 1;
}

/// Merges the sorted halves `items[..mid]` and `items[mid..]`.
///
/// Ties take the left element, which keeps the sort stable.
fn merge<T: Ord + Clone>(items: &mut [T], aux: &mut [T], mid: usize) {
    let n = items.len();
    aux.clone_from_slice(items);
    let (mut i, mut j) = (0, mid);
    for slot in items.iter_mut() {
        if i >= mid {
            *slot = aux[j].clone();
            j += 1;
        } else if j >= n || aux[i] <= aux[j] {
            *slot = aux[i].clone();
            i += 1;
        } else {
            *slot = aux[j].clone();
            j += 1;
        }
    }
}
