//! Sorted collections.
//!
//! - [`SortedList`]: elements kept sorted by an order relation, duplicates allowed
//! - [`UniqueSortedList`]: a [`SortedList`] that rejects elements equivalent
//!   to one already stored
//! - [`UniqueSortedListBuilder`]: explicit construction of a [`UniqueSortedList`]
//!
//! # Relations
//!
//! Both lists sort by their natural order (`Ord`) unless an [`OrderRelation`]
//! is given. [`UniqueSortedList`] decides uniqueness with an optional
//! [`EquivalenceRelation`]; without one, two elements are duplicates when the
//! order relation reports them `Equal`.
//!
//! # Examples
//!
//! ```rust
//! use unique_sorted_list::sorted::{UniqueSortedList, equivalence_by_key, order_by_key};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     id: char,
//!     name: &'static str,
//! }
//!
//! let people = vec![
//!     Person { id: 'c', name: "Adam" },
//!     Person { id: 'a', name: "Tomas" },
//!     Person { id: 'b', name: "Robert" },
//!     Person { id: 'a', name: "Tomas" },
//! ];
//!
//! let mut list = UniqueSortedList::from_items_with_order_and_equivalence(
//!     people,
//!     order_by_key(|person: &Person| person.name),
//!     equivalence_by_key(|person: &Person| person.id),
//! );
//! assert_eq!(list.len(), 3);
//!
//! list.insert(Person { id: 'd', name: "Rufus" });
//! let names: Vec<&str> = list.iter().map(|person| person.name).collect();
//! assert_eq!(names, vec!["Adam", "Robert", "Rufus", "Tomas"]);
//! ```

mod builder;
mod relation;
mod sorted_list;
mod unique_sorted_list;

pub use builder::UniqueSortedListBuilder;
pub use relation::EquivalenceRelation;
pub use relation::MaybeSendSync;
pub use relation::OrderRelation;
pub use relation::ReferenceCounter;
pub use relation::equivalence_by_key;
pub use relation::equivalence_relation;
pub use relation::order_by_key;
pub use relation::order_relation;
pub use sorted_list::SortedList;
pub use sorted_list::SortedListIntoIterator;
pub use sorted_list::SortedListIterator;
pub use unique_sorted_list::UniqueSortedList;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(UniqueSortedList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedList<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(UniqueSortedList<i32>: Send, Sync);
