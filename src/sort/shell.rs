//! Shell sort.

use super::insertion::gapped_insertion;
use super::{SortAlgorithm, SortStats};

/// Sorts `items` with insertion passes over the gaps `..., 40, 13, 4, 1`.
///
/// Large gaps move far-out-of-place elements early, so the final gap-1 pass
/// only fixes local disorder.
pub fn shell_sort<T: Ord>(items: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = items.len();
    let mut gap = 1;
    while gap < n / 3 {
        gap = 3 * gap + 1;
    }
    while gap >= 1 {
        gapped_insertion(items, gap, &mut stats);
        gap /= 3;
    }
    stats.finish(SortAlgorithm::Shell, n)
}
