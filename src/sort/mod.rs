//! Comparison sorts over mutable slices.
//!
//! Each algorithm is a free function over `&mut [T]` returning the work it did
//! as [`SortStats`]; [`SortAlgorithm`] selects one at runtime.
//!
//! | Algorithm | Time (worst) | Extra space | Stable |
//! |-----------|--------------|-------------|--------|
//! | selection | \(O(n^2)\) | \(O(1)\) | no |
//! | insertion | \(O(n^2)\) | \(O(1)\) | yes |
//! | shell | \(O(n^{3/2})\) | \(O(1)\) | no |
//! | quick | \(O(n^2)\) | \(O(\log n)\) | no |
//! | merge | \(O(n \log n)\) | \(O(n)\) | yes |

mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ParseSortAlgorithmError;

/// Counters reported by every sort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Element swaps performed.
    pub swaps: usize,
    /// Merge passes performed (merge sort only).
    pub merges: usize,
}

impl SortStats {
    #[inline]
    pub(crate) fn swap<T>(&mut self, items: &mut [T], i: usize, j: usize) {
        items.swap(i, j);
        self.swaps += 1;
    }

    pub(crate) fn finish(self, algorithm: SortAlgorithm, len: usize) -> Self {
        tracing::debug!(
            algorithm = algorithm.name(),
            len,
            swaps = self.swaps,
            merges = self.merges,
            "sort finished"
        );
        self
    }
}

/// A sorting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Repeatedly swap the smallest remaining element into place.
    Selection,
    /// Grow a sorted prefix by sinking each new element.
    Insertion,
    /// Insertion sort over shrinking gaps `..., 40, 13, 4, 1`.
    Shell,
    /// Partition around the first element and recurse.
    Quick,
    /// Sort both halves and merge them through a buffer.
    Merge,
}

impl SortAlgorithm {
    /// Every algorithm, in the order above.
    pub const ALL: [Self; 5] = [
        Self::Selection,
        Self::Insertion,
        Self::Shell,
        Self::Quick,
        Self::Merge,
    ];

    /// Lowercase name, as accepted by `from_str`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Shell => "shell",
            Self::Quick => "quick",
            Self::Merge => "merge",
        }
    }

    /// Sorts `items` in non-decreasing order with this algorithm.
    pub fn sort<T: Ord + Clone>(self, items: &mut [T]) -> SortStats {
        match self {
            Self::Selection => selection_sort(items),
            Self::Insertion => insertion_sort(items),
            Self::Shell => shell_sort(items),
            Self::Quick => quick_sort(items),
            Self::Merge => merge_sort(items),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseSortAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSortAlgorithmError { name: s.to_owned() })
    }
}
