//! Integration tests for thread-safe lists.
//!
//! With the `arc` feature, relations are shared through `Arc` and lists can
//! cross threads. Mutation still needs external synchronization.

#![cfg(feature = "arc")]

use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::thread;
use unique_sorted_list::sorted::{UniqueSortedList, equivalence_by_key, order_by_key};

#[rstest]
fn test_concurrent_inserts_behind_mutex_stay_unique() {
    let list = Arc::new(Mutex::new(UniqueSortedList::with_order_and_equivalence(
        order_by_key(|value: &u32| *value),
        equivalence_by_key(|value: &u32| value % 50),
    )));

    let handles: Vec<_> = (0..4_u32)
        .map(|worker| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for value in (worker * 100)..(worker * 100 + 100) {
                    list.lock().unwrap().insert(value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let list = list.lock().unwrap();
    assert_eq!(list.len(), 50);
    assert_eq!(list.validate(), Ok(()));
}

#[rstest]
fn test_shared_list_readable_from_threads() {
    let list = Arc::new(UniqueSortedList::from_items(vec![5, 1, 3, 1]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let list = Arc::clone(&list);
            thread::spawn(move || list.index_of(&3))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(1));
    }
}

#[rstest]
fn test_list_moves_across_threads() {
    let mut list = UniqueSortedList::with_order(order_by_key(|word: &String| word.len()));
    list.insert("one".to_string());

    let list = thread::spawn(move || {
        list.insert("two".to_string());
        list.insert("three".to_string());
        list
    })
    .join()
    .unwrap();

    assert_eq!(list.to_vec(), vec!["one".to_string(), "three".to_string()]);
}
