//! Step-by-step construction of a [`UniqueSortedList`].
//!
//! The builder gathers initial items, the order relation, and the equivalence
//! relation in any combination, including an equivalence relation on top of
//! the natural order, which has no dedicated constructor.
//!
//! # Examples
//!
//! ```rust
//! use unique_sorted_list::sorted::{UniqueSortedList, equivalence_by_key};
//!
//! let list = UniqueSortedList::builder()
//!     .items(vec![14, 3, 21, 7])
//!     .equivalence_relation(equivalence_by_key(|value: &i32| value % 7))
//!     .build();
//!
//! // 14, 21 and 7 are all multiples of seven: only the first survives.
//! assert_eq!(list.to_vec(), vec![3, 14]);
//! ```

use super::relation::{EquivalenceRelation, Order, OrderRelation};
use super::unique_sorted_list::UniqueSortedList;

/// Configuration for a [`UniqueSortedList`].
///
/// Items are inserted in the order they were given when [`build`](Self::build)
/// is called, so the first of several equivalent items wins.
pub struct UniqueSortedListBuilder<T> {
    items: Vec<T>,
    order: Order<T>,
    equivalence: Option<EquivalenceRelation<T>>,
}

impl<T: Ord> UniqueSortedListBuilder<T> {
    /// Starts a builder using the natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::from_order(Order::natural())
    }
}

impl<T> UniqueSortedListBuilder<T> {
    /// Starts a builder using `order`.
    #[must_use]
    pub fn with_order(order: OrderRelation<T>) -> Self {
        Self::from_order(Order::Custom(order))
    }

    const fn from_order(order: Order<T>) -> Self {
        Self {
            items: Vec::new(),
            order,
            equivalence: None,
        }
    }

    /// Replaces the order relation.
    #[must_use]
    pub fn order_relation(mut self, order: OrderRelation<T>) -> Self {
        self.order = Order::Custom(order);
        self
    }

    /// Sets the equivalence relation.
    #[must_use]
    pub fn equivalence_relation(mut self, equivalence: EquivalenceRelation<T>) -> Self {
        self.equivalence = Some(equivalence);
        self
    }

    /// Appends initial items.
    #[must_use]
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Appends a single initial item.
    #[must_use]
    pub fn item(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    /// Builds the list, deduplicating the initial items.
    #[must_use]
    pub fn build(self) -> UniqueSortedList<T> {
        UniqueSortedList::from_parts(self.order, self.equivalence, self.items)
    }
}

impl<T: Ord> Default for UniqueSortedListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
