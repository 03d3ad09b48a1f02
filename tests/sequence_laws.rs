//! Property-based tests for extended containers.
//!
//! These tests verify the algebraic properties of the functional surface
//! across random-access and linked containers.

use std::collections::{LinkedList, VecDeque};

use proptest::prelude::*;
use rebound::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates a vector of small integers with up to `max_size` elements.
fn elements(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100i32, 0..max_size)
}

fn small_elements() -> impl Strategy<Value = Vec<i32>> {
    elements(40)
}

fn is_non_decreasing(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

proptest! {
    // =========================================================================
    // Counting and Selection
    // =========================================================================

    #[test]
    fn prop_count_if_equals_filtered_size(values in small_elements(), divisor in 1..5i32) {
        let list: ForwardList<i32> = values.into_iter().collect();
        let counted = list.count_if(|value| value % divisor == 0);
        prop_assert_eq!(counted, list.filter(|value| value % divisor == 0).size());
    }

    #[test]
    fn prop_filter_and_erase_if_partition(values in small_elements()) {
        let vector = Vector::new(values);
        let kept = vector.filter_ref(|value| *value >= 0);
        let mut erased = vector.clone();
        erased.erase_if(|value| *value >= 0);
        prop_assert_eq!(kept.size() + erased.size(), vector.size());
    }

    #[test]
    fn prop_take_is_a_clamped_prefix(values in small_elements(), count in 0..60usize) {
        let list: List<i32> = values.iter().copied().collect();
        let taken = list.take(count).to::<Vec<_>>();
        prop_assert_eq!(taken.len(), count.min(values.len()));
        prop_assert_eq!(&taken[..], &values[..taken.len()]);
    }

    #[test]
    fn prop_take_zero_is_empty(values in small_elements()) {
        let list: ForwardList<i32> = values.into_iter().collect();
        prop_assert_eq!(list.take(0).size(), 0);
    }

    #[test]
    fn prop_take_while_prefix_satisfies_predicate(values in small_elements()) {
        let prefix = Vector::new(values.clone()).take_while(|value| *value < 50);
        prop_assert!(prefix.iter().all(|value| *value < 50));
        if let Some(next) = values.get(prefix.size()) {
            prop_assert!(*next >= 50);
        }
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    #[test]
    fn prop_concat_is_associative(
        first in small_elements(),
        second in small_elements(),
        third in small_elements(),
    ) {
        let make = |values: &Vec<i32>| values.iter().copied().collect::<ForwardList<i32>>();
        let left = make(&first).concat(make(&second)).concat(make(&third));
        let right = make(&first).concat(make(&second).concat(make(&third)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_concat_sizes_add(first in small_elements(), second in small_elements()) {
        let joined = Deque::new(first.clone()).concat(second.clone());
        prop_assert_eq!(joined.size(), first.len() + second.len());
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    #[test]
    fn prop_sort_vector_is_non_decreasing(values in small_elements()) {
        let sorted = Vector::new(values).sorted();
        prop_assert!(is_non_decreasing(&sorted));
    }

    #[test]
    fn prop_sort_deque_is_non_decreasing(values in small_elements()) {
        let sorted = Deque::new(VecDeque::from(values)).sorted().to::<Vec<_>>();
        prop_assert!(is_non_decreasing(&sorted));
    }

    #[test]
    fn prop_sort_list_is_non_decreasing(values in small_elements()) {
        let list: List<i32> = values.into_iter().collect();
        prop_assert!(is_non_decreasing(&list.sorted().to::<Vec<_>>()));
    }

    #[test]
    fn prop_sort_forward_list_matches_slice_sort(values in elements(200)) {
        let list: ForwardList<i32> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(list.sorted().to::<Vec<_>>(), expected);
    }

    // =========================================================================
    // Zip, Map and Reduce
    // =========================================================================

    #[test]
    fn prop_zip_truncates_to_shorter(first in small_elements(), second in small_elements()) {
        let list: List<i32> = first.iter().copied().collect();
        let pairs = list.zip(&second);
        prop_assert_eq!(pairs.size(), first.len().min(second.len()));
    }

    #[test]
    fn prop_zip_then_unzip_returns_prefixes(first in small_elements(), second in small_elements()) {
        let vector = Vector::new(first.clone());
        let (left, right) = vector.zip(&second).unzip();
        let length = left.size();
        prop_assert_eq!(left.into_inner(), first[..length].to_vec());
        prop_assert_eq!(right.into_inner(), second[..length].to_vec());
    }

    #[test]
    fn prop_map_identity_preserves_contents(values in small_elements()) {
        let list: LinkedList<i32> = values.iter().copied().collect();
        let mapped = Extended::<LinkedList<i32>>::new(list.clone()).map(|value| value);
        prop_assert_eq!(mapped.into_inner(), list);
    }

    #[test]
    fn prop_map_composes(values in small_elements()) {
        let list: ForwardList<i32> = values.into_iter().collect();
        let composed = list.map_ref(|value| i64::from(*value) * 2 + 1);
        let chained = list.map(|value| i64::from(value) * 2).map(|value| value + 1);
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_reduce_with_sum_matches_iterator_sum(values in small_elements()) {
        let expected: i64 = values.iter().map(|value| i64::from(*value)).sum();
        let list: ForwardList<i32> = values.into_iter().collect();
        prop_assert_eq!(list.reduce_with(0i64, |sum, value| sum + i64::from(value)), expected);
    }

    #[test]
    fn prop_reduce_agrees_with_reduce_with_on_non_empty(
        values in prop::collection::vec(-100..100i32, 1..40)
    ) {
        let vector = Vector::new(values.clone());
        let head = values[0];
        let seeded = Vector::new(values[1..].to_vec()).reduce_with(head, |left, right| left.max(right));
        prop_assert_eq!(vector.reduce(i32::max), Ok(seeded));
    }

    #[test]
    fn prop_flatten_preserves_total_size(
        nested in prop::collection::vec(small_elements(), 0..8)
    ) {
        let total: usize = nested.iter().map(Vec::len).sum();
        let flat = Vector::new(nested).flatten();
        prop_assert_eq!(flat.size(), total);
    }
}
