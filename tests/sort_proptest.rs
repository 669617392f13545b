use dsal::sort::{insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort};
use dsal::{SortAlgorithm, SortStats};
use proptest::prelude::*;

fn algorithms() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_sorts_to_a_nondecreasing_permutation(
        alg in algorithms(),
        input in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let mut items = input.clone();
        alg.sort(&mut items);

        prop_assert!(items.windows(2).all(|w| w[0] <= w[1]), "{} left disorder", alg);

        let mut expected = input;
        expected.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn test_handles_heavy_duplication(
        alg in algorithms(),
        input in prop::collection::vec(0u8..4, 0..150),
    ) {
        let mut items = input.clone();
        alg.sort(&mut items);
        let mut expected = input;
        expected.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn test_merge_and_quick_are_idempotent(input in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut once = input.clone();
        merge_sort(&mut once);
        let mut twice = once.clone();
        merge_sort(&mut twice);
        prop_assert_eq!(&twice, &once);

        let mut quick_once = input;
        quick_sort(&mut quick_once);
        let mut quick_twice = quick_once.clone();
        quick_sort(&mut quick_twice);
        prop_assert_eq!(&quick_twice, &quick_once);
        prop_assert_eq!(quick_once, once);
    }

    #[test]
    fn test_sorted_input_costs_no_swaps(input in prop::collection::vec(any::<u16>(), 0..100)) {
        let mut input = input;
        input.sort_unstable();
        prop_assert_eq!(selection_sort(&mut input.clone()).swaps, 0);
        prop_assert_eq!(insertion_sort(&mut input.clone()).swaps, 0);
        prop_assert_eq!(shell_sort(&mut input.clone()).swaps, 0);
        prop_assert_eq!(merge_sort(&mut input.clone()), SortStats::default());
    }
}

#[test]
fn test_sorts_strings() {
    let mut words = vec!["pear", "apple", "fig", "banana", "apple"];
    SortAlgorithm::Merge.sort(&mut words);
    assert_eq!(words, vec!["apple", "apple", "banana", "fig", "pear"]);
}
