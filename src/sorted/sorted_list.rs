//! Sorted list ordered by a natural or custom order relation.
//!
//! [`SortedList`] is the storage layer of [`UniqueSortedList`]: it keeps its
//! elements sorted, finds positions with binary search, and allows elements
//! the order relation considers equal to sit side by side.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(n)       |
//! | `index_of` | O(log n)   |
//! | `bsearch`  | O(log n)   |
//! | `get`      | O(1)       |
//! | `len`      | O(1)       |
//!
//! # Examples
//!
//! ```rust
//! use unique_sorted_list::sorted::SortedList;
//!
//! let mut list = SortedList::from_items(vec![3, 1, 2]);
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//!
//! // Duplicates are allowed and placed after existing equal elements
//! assert_eq!(list.insert(2), 2);
//! assert_eq!(list.as_slice(), &[1, 2, 2, 3]);
//! assert_eq!(list.index_of(&2), Some(1));
//! ```
//!
//! [`UniqueSortedList`]: super::UniqueSortedList

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::relation::{Order, OrderRelation};

/// A list that keeps its elements sorted by an order relation.
///
/// The order relation is fixed at construction. Without a custom relation the
/// natural order (`Ord`) is used.
///
/// # Examples
///
/// ```rust
/// use unique_sorted_list::sorted::{SortedList, order_relation};
///
/// let mut list = SortedList::with_order(order_relation(|left: &i32, right: &i32| right.cmp(left)));
/// list.insert(1);
/// list.insert(3);
/// list.insert(2);
/// assert_eq!(list.to_vec(), vec![3, 2, 1]);
/// ```
pub struct SortedList<T> {
    elements: Vec<T>,
    order: Order<T>,
}

impl<T: Ord> SortedList<T> {
    /// Creates an empty list using the natural order.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_order(Order::natural())
    }

    /// Creates a list from `items` using the natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_items("bca".chars());
    /// assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_order_and_items(Order::natural(), items)
    }
}

impl<T> SortedList<T> {
    /// Creates an empty list sorted by `order`.
    #[inline]
    #[must_use]
    pub fn with_order(order: OrderRelation<T>) -> Self {
        Self::from_order(Order::Custom(order))
    }

    /// Creates a list from `items` sorted by `order`.
    ///
    /// Elements that `order` considers equal keep their input order.
    #[must_use]
    pub fn from_items_with_order<I>(items: I, order: OrderRelation<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_order_and_items(Order::Custom(order), items)
    }

    #[inline]
    pub(crate) const fn from_order(order: Order<T>) -> Self {
        Self {
            elements: Vec::new(),
            order,
        }
    }

    fn from_order_and_items<I>(order: Order<T>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = items.into_iter().collect();
        // Stable sort, same result as inserting one by one
        elements.sort_by(|left, right| order.compare(left, right));
        Self { elements, order }
    }

    /// Returns the custom order relation, or `None` when the natural order is used.
    #[inline]
    #[must_use]
    pub const fn order_relation(&self) -> Option<&OrderRelation<T>> {
        self.order.custom()
    }

    #[inline]
    pub(crate) fn compare(&self, left: &T, right: &T) -> Ordering {
        self.order.compare(left, right)
    }

    /// Returns the position at which `element` would be inserted.
    ///
    /// The position is after every element that compares less than or equal
    /// to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_items(vec![10, 20, 20, 30]);
    /// assert_eq!(list.bsearch(&5), 0);
    /// assert_eq!(list.bsearch(&20), 3);
    /// assert_eq!(list.bsearch(&35), 4);
    /// ```
    #[must_use]
    pub fn bsearch(&self, element: &T) -> usize {
        self.elements
            .partition_point(|existing| self.compare(existing, element) != Ordering::Greater)
    }

    /// Returns the index of the first element the order relation considers
    /// equal to `element`, or `None` if there is none.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_sorted_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_items(vec!['a', 'b', 'b', 'c']);
    /// assert_eq!(list.index_of(&'b'), Some(1));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        let position = self
            .elements
            .partition_point(|existing| self.compare(existing, element) == Ordering::Less);
        self.elements
            .get(position)
            .filter(|existing| self.compare(existing, element) == Ordering::Equal)
            .map(|_| position)
    }

    /// Returns `true` if an element equal to `element` under the order
    /// relation is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Inserts `element` at its sorted position and returns that position.
    ///
    /// Elements equal under the order relation are kept; the new element goes
    /// after them.
    pub fn insert(&mut self, element: T) -> usize {
        let position = self.bsearch(&element);
        self.elements.insert(position, element);
        position
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedListIterator<'_, T> {
        SortedListIterator {
            inner: self.elements.iter(),
        }
    }

    /// Copies the elements into a new `Vec` in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Consumes the list and returns its elements in sorted order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Ord> Default for SortedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Two lists are equal when they hold equal elements in the same order.
/// The order relations are not compared.
impl<T: PartialEq> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T> Index<usize> for SortedList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = SortedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = SortedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedListIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a sorted list, in order.
pub struct SortedListIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedListIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedListIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedListIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of a sorted list, in order.
pub struct SortedListIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedListIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedListIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedListIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedList<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_items)
    }
}

// =============================================================================
// Tests
// =============================================================================
