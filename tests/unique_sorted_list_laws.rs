//! Property-based tests for UniqueSortedList laws.
//!
//! These tests verify the sort and uniqueness invariants, idempotent
//! insertion, and agreement with a `BTreeSet` model under the natural order.

use proptest::prelude::*;
use std::collections::BTreeSet;
use unique_sorted_list::sorted::{
    SortedList, UniqueSortedList, equivalence_by_key, order_by_key,
};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating a naturally ordered list from a vector of elements.
fn arbitrary_list(max_size: usize) -> impl Strategy<Value = UniqueSortedList<i32>> {
    prop::collection::vec(-100..100_i32, 0..max_size).prop_map(UniqueSortedList::from_items)
}

// =============================================================================
// Model Law
// Description: Under the natural order the list matches a BTreeSet
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_btreeset_model(elements in prop::collection::vec(any::<i16>(), 0..80)) {
        let list = UniqueSortedList::from_items(elements.clone());
        let model: BTreeSet<i16> = elements.into_iter().collect();

        prop_assert_eq!(list.into_vec(), model.into_iter().collect::<Vec<_>>());
    }
}

// =============================================================================
// Sort and Uniqueness Invariants
// Description: Any sequence of insertions leaves the list valid
// =============================================================================

proptest! {
    #[test]
    fn prop_inserts_preserve_invariants_with_fallback_equivalence(
        elements in prop::collection::vec(0..1000_i32, 0..60)
    ) {
        let mut list = UniqueSortedList::with_order(order_by_key(|value: &i32| value / 10));
        for element in elements {
            list.insert(element);
        }

        prop_assert_eq!(list.validate(), Ok(()));
        prop_assert!(list.as_slice().windows(2).all(|pair| pair[0] / 10 < pair[1] / 10));
    }

    #[test]
    fn prop_inserts_preserve_invariants_with_equivalence(
        elements in prop::collection::vec(0..1000_i32, 0..60)
    ) {
        let mut list = UniqueSortedList::with_order_and_equivalence(
            order_by_key(|value: &i32| *value),
            equivalence_by_key(|value: &i32| value % 7),
        );
        for element in elements {
            list.insert(element);
        }

        prop_assert!(list.len() <= 7);
        prop_assert_eq!(list.validate(), Ok(()));
    }
}

// =============================================================================
// Idempotence Law
// Description: Inserting a present element changes nothing and reports its index
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_present_element_is_idempotent(
        list in arbitrary_list(50),
        selector in any::<prop::sample::Index>()
    ) {
        prop_assume!(!list.is_empty());
        let position = selector.index(list.len());
        let element = list[position];

        let mut updated = list.clone();
        prop_assert_eq!(updated.insert(element), position);
        prop_assert_eq!(updated, list);
    }

    #[test]
    fn prop_double_insert_equals_single_insert(list in arbitrary_list(50), element in -100..100_i32) {
        let mut once = list.clone();
        once.insert(element);
        let mut twice = list;
        let first = twice.insert(element);
        let second = twice.insert(element);

        prop_assert_eq!(first, second);
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Insert-IndexOf Law
// Description: The returned index points at an equivalent element
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_returns_index_of_equivalent(list in arbitrary_list(50), element in -100..100_i32) {
        let mut list = list;
        let index = list.insert(element);

        prop_assert_eq!(list[index], element);
        prop_assert_eq!(list.index_of(&element), Some(index));
    }

    #[test]
    fn prop_linear_and_binary_lookup_agree(list in arbitrary_list(50), element in -100..100_i32) {
        let mut scanning = list.clone();
        scanning.set_equivalence_relation(equivalence_by_key(|value: &i32| *value));

        prop_assert_eq!(scanning.index_of(&element), list.index_of(&element));
    }
}

// =============================================================================
// Base List Law
// Description: The unique list holds exactly the distinct elements of the base list
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_list_is_deduplicated_base_list(elements in prop::collection::vec(any::<u8>(), 0..80)) {
        let mut base = SortedList::from_items(elements.clone()).into_vec();
        base.dedup();
        let unique = UniqueSortedList::from_items(elements);

        prop_assert_eq!(unique.into_vec(), base);
    }
}
