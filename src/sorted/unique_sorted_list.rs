//! Sorted list that never holds two equivalent elements.
//!
//! [`UniqueSortedList`] composes a [`SortedList`] with an optional
//! equivalence relation. Every insertion first looks the element up and only
//! reaches the underlying list when nothing equivalent is stored yet.
//!
//! # Lookup Rules
//!
//! | Equivalence relation | `index_of` strategy                         |
//! |----------------------|---------------------------------------------|
//! | absent               | binary search by the order relation          |
//! | present              | linear scan calling the equivalence relation |
//!
//! Without an equivalence relation two elements are duplicates exactly when
//! the order relation reports them `Equal`. With one, the order relation only
//! decides positions, so equivalent elements need not be adjacent and the scan
//! cannot use binary search.
//!
//! # Examples
//!
//! ```rust
//! use unique_sorted_list::sorted::UniqueSortedList;
//!
//! let mut list = UniqueSortedList::from_items("bcbaabcc".chars());
//! assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
//!
//! // Inserting a duplicate reports where the existing copy lives
//! assert_eq!(list.insert('b'), 1);
//! assert_eq!(list.len(), 3);
//!
//! assert_eq!(list.insert('d'), 3);
//! assert_eq!(list.to_vec(), vec!['a', 'b', 'c', 'd']);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::builder::UniqueSortedListBuilder;
use super::relation::{EquivalenceRelation, Order, OrderRelation};
use super::sorted_list::{SortedList, SortedListIntoIterator, SortedListIterator};
use crate::error::{InvariantError, Result};

/// A sorted list whose elements are unique under an equivalence relation.
///
/// # Type Parameters
///
/// * `T` - The element type. `Ord` is only required when the natural order is
///   used; lists built with a custom order relation accept any `T`.
///
/// # Examples
///
/// ```rust
/// use unique_sorted_list::sorted::{UniqueSortedList, equivalence_by_key, order_by_key};
///
/// #[derive(Debug)]
/// struct Person {
///     id: char,
///     name: &'static str,
/// }
///
/// let mut people = UniqueSortedList::with_order_and_equivalence(
///     order_by_key(|person: &Person| person.name),
///     equivalence_by_key(|person: &Person| person.id),
/// );
/// people.insert(Person { id: 'a', name: "Tomas" });
/// people.insert(Person { id: 'b', name: "Adam" });
///
/// // Same id, different name: rejected
/// assert_eq!(people.insert(Person { id: 'a', name: "Rufus" }), 1);
///
/// let names: Vec<&str> = people.iter().map(|person| person.name).collect();
/// assert_eq!(names, vec!["Adam", "Tomas"]);
/// ```
pub struct UniqueSortedList<T> {
    list: SortedList<T>,
    equivalence: Option<EquivalenceRelation<T>>,
}

impl<T: Ord> UniqueSortedList<T> {
    /// Creates an empty list using the natural order and no equivalence
    /// relation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::UniqueSortedList;
    ///
    /// let list: UniqueSortedList<i32> = UniqueSortedList::new();
    /// assert!(list.is_empty());
    /// assert!(list.order_relation().is_none());
    /// assert!(list.equivalence_relation().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Order::natural(), None, std::iter::empty())
    }

    /// Creates a list from `items` using the natural order.
    ///
    /// Items equal under `Ord` are kept once.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(Order::natural(), None, items)
    }

    /// Returns a builder that starts from the natural order.
    #[inline]
    #[must_use]
    pub fn builder() -> UniqueSortedListBuilder<T> {
        UniqueSortedListBuilder::new()
    }
}

impl<T> UniqueSortedList<T> {
    /// Creates an empty list sorted by `order`.
    ///
    /// Elements that `order` reports `Equal` are duplicates of each other.
    #[must_use]
    pub fn with_order(order: OrderRelation<T>) -> Self {
        Self::from_parts(Order::Custom(order), None, std::iter::empty())
    }

    /// Creates an empty list sorted by `order` and deduplicated by
    /// `equivalence`.
    #[must_use]
    pub fn with_order_and_equivalence(
        order: OrderRelation<T>,
        equivalence: EquivalenceRelation<T>,
    ) -> Self {
        Self::from_parts(Order::Custom(order), Some(equivalence), std::iter::empty())
    }

    /// Creates a list from `items` sorted by `order`.
    #[must_use]
    pub fn from_items_with_order<I>(items: I, order: OrderRelation<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(Order::Custom(order), None, items)
    }

    /// Creates a list from `items` sorted by `order` and deduplicated by
    /// `equivalence`.
    ///
    /// When several items are equivalent, the first one in `items` is kept.
    #[must_use]
    pub fn from_items_with_order_and_equivalence<I>(
        items: I,
        order: OrderRelation<T>,
        equivalence: EquivalenceRelation<T>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(Order::Custom(order), Some(equivalence), items)
    }

    /// Returns a builder that starts from `order`.
    #[inline]
    #[must_use]
    pub fn builder_with_order(order: OrderRelation<T>) -> UniqueSortedListBuilder<T> {
        UniqueSortedListBuilder::with_order(order)
    }

    /// Every initial item goes through [`insert`](Self::insert), so the
    /// initial batch is deduplicated the same way as later insertions.
    pub(crate) fn from_parts<I>(
        order: Order<T>,
        equivalence: Option<EquivalenceRelation<T>>,
        items: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut unique = Self {
            list: SortedList::from_order(order),
            equivalence,
        };
        let mut offered = 0_usize;
        for item in items {
            offered += 1;
            unique.insert(item);
        }
        tracing::trace!(
            offered,
            retained = unique.len(),
            custom_order = unique.order_relation().is_some(),
            custom_equivalence = unique.equivalence.is_some(),
            "unique sorted list created"
        );
        unique
    }

    /// Returns the custom order relation, or `None` when the natural order is used.
    #[inline]
    #[must_use]
    pub const fn order_relation(&self) -> Option<&OrderRelation<T>> {
        self.list.order_relation()
    }

    /// Returns the equivalence relation, or `None` when duplicates are
    /// detected through the order relation.
    #[inline]
    #[must_use]
    pub const fn equivalence_relation(&self) -> Option<&EquivalenceRelation<T>> {
        self.equivalence.as_ref()
    }

    /// Replaces the equivalence relation and returns the previous one.
    ///
    /// Stored elements are not re-checked: elements that are equivalent under
    /// the new relation stay in the list. Only later insertions use it.
    pub fn set_equivalence_relation(
        &mut self,
        equivalence: EquivalenceRelation<T>,
    ) -> Option<EquivalenceRelation<T>> {
        self.equivalence.replace(equivalence)
    }

    /// Removes the equivalence relation, falling back to order equality, and
    /// returns the previous one.
    pub fn clear_equivalence_relation(&mut self) -> Option<EquivalenceRelation<T>> {
        self.equivalence.take()
    }

    fn is_equivalent(&self, stored: &T, element: &T) -> bool {
        match &self.equivalence {
            Some(equivalent) => equivalent(stored, element),
            None => self.list.compare(stored, element) == Ordering::Equal,
        }
    }

    /// Returns the index of the first stored element equivalent to `element`,
    /// or `None` if there is none.
    ///
    /// # Complexity
    ///
    /// - O(log n) without an equivalence relation (binary search)
    /// - O(n) with an equivalence relation (linear scan from the front)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::{UniqueSortedList, order_by_key};
    ///
    /// let list = UniqueSortedList::from_items_with_order(
    ///     vec![("Robert", 1), ("Adam", 2), ("Tomas", 3)],
    ///     order_by_key(|entry: &(&'static str, i32)| entry.0),
    /// );
    /// assert_eq!(list.index_of(&("Adam", 99)), Some(0));
    /// assert_eq!(list.index_of(&("Foo", 1)), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        match &self.equivalence {
            None => self.list.index_of(element),
            Some(equivalent) => self.list.iter().position(|stored| equivalent(stored, element)),
        }
    }

    /// Returns `true` if an element equivalent to `element` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Inserts `element` unless an equivalent element is already stored.
    ///
    /// Returns the index of the equivalent element when one exists (the list
    /// is left unchanged), otherwise the sorted position `element` was
    /// inserted at.
    pub fn insert(&mut self, element: T) -> usize {
        if let Some(index) = self.index_of(&element) {
            tracing::trace!(index, "equivalent element already present");
            return index;
        }
        let index = self.list.insert(element);
        tracing::trace!(index, len = self.list.len(), "element inserted");
        index
    }

    /// Checks that the elements are sorted and pairwise non-equivalent.
    ///
    /// Both properties hold as long as the relations are consistent and the
    /// equivalence relation was not replaced after elements were stored.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantError`] found: an adjacent pair out of
    /// order, or the lowest pair of equivalent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::{UniqueSortedList, equivalence_relation};
    /// use unique_sorted_list::error::InvariantError;
    ///
    /// let mut list = UniqueSortedList::from_items(vec![1, 2, 3, 4]);
    /// assert!(list.validate().is_ok());
    ///
    /// list.set_equivalence_relation(equivalence_relation(|left: &i32, right: &i32| left % 2 == right % 2));
    /// assert_eq!(list.validate(), Err(InvariantError::Duplicate { first: 0, second: 2 }));
    /// ```
    pub fn validate(&self) -> Result<()> {
        let elements = self.as_slice();
        if let Some(index) = elements
            .windows(2)
            .position(|pair| self.list.compare(&pair[0], &pair[1]) == Ordering::Greater)
        {
            return Err(InvariantError::Unsorted { index });
        }
        for (first, stored) in elements.iter().enumerate() {
            if let Some(offset) = elements[first + 1..]
                .iter()
                .position(|other| self.is_equivalent(stored, other))
            {
                return Err(InvariantError::Duplicate {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
        Ok(())
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.list.get(index)
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.list.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.list.last()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.list.as_slice()
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedListIterator<'_, T> {
        self.list.iter()
    }

    /// Copies the elements into a new `Vec` in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    /// Consumes the list and returns its elements in sorted order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.list.into_vec()
    }

    /// Returns the underlying sorted list.
    #[inline]
    #[must_use]
    pub const fn as_sorted_list(&self) -> &SortedList<T> {
        &self.list
    }

    /// Consumes the list and returns the underlying sorted list, which keeps
    /// the order relation but no longer rejects duplicates.
    #[inline]
    #[must_use]
    pub fn into_sorted_list(self) -> SortedList<T> {
        self.list
    }
}

impl<T: Ord> Default for UniqueSortedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UniqueSortedList<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueSortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, formatter)
    }
}

/// Two lists are equal when they hold equal elements in the same order.
/// Relations are not compared.
impl<T: PartialEq> PartialEq for UniqueSortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for UniqueSortedList<T> {}

impl<T> Index<usize> for UniqueSortedList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.list[index]
    }
}

impl<T> Extend<T> for UniqueSortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for UniqueSortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, T> IntoIterator for &'a UniqueSortedList<T> {
    type Item = &'a T;
    type IntoIter = SortedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for UniqueSortedList<T> {
    type Item = T;
    type IntoIter = SortedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UniqueSortedList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Deserializes from any sequence using the natural order; duplicate entries
/// are dropped.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UniqueSortedList<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_items)
    }
}

// =============================================================================
// Tests
// =============================================================================
