//! Order and equivalence relations.
//!
//! Relations are shared closures. By default they are reference counted with
//! [`std::rc::Rc`]; with the `arc` feature they use [`std::sync::Arc`] and
//! must be `Send + Sync`, which makes the lists themselves `Send + Sync`.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use unique_sorted_list::sorted::{equivalence_by_key, order_by_key, order_relation};
//!
//! let descending = order_relation(|left: &i32, right: &i32| right.cmp(left));
//! assert_eq!(descending(&1, &2), Ordering::Greater);
//!
//! let by_length = order_by_key(|word: &&'static str| word.len());
//! assert_eq!(by_length(&"ab", &"abc"), Ordering::Less);
//!
//! let same_initial = equivalence_by_key(|word: &&'static str| word.chars().next());
//! assert!(same_initial(&"apple", &"avocado"));
//! ```

use std::cmp::Ordering;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used to share relations.
///
/// `std::sync::Arc` when the `arc` feature is enabled, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer used to share relations.
///
/// `std::sync::Arc` when the `arc` feature is enabled, `std::rc::Rc` otherwise.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// Bound placed on relation closures.
///
/// Equivalent to `Send + Sync` with the `arc` feature, and to no bound at all
/// without it.
#[cfg(feature = "arc")]
pub trait MaybeSendSync: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

/// Bound placed on relation closures.
///
/// Equivalent to `Send + Sync` with the `arc` feature, and to no bound at all
/// without it.
#[cfg(not(feature = "arc"))]
pub trait MaybeSendSync {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> MaybeSendSync for T {}

/// Shared comparison deciding the relative sort position of two elements.
#[cfg(feature = "arc")]
pub type OrderRelation<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Shared comparison deciding the relative sort position of two elements.
#[cfg(not(feature = "arc"))]
pub type OrderRelation<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering>;

/// Shared predicate deciding whether two elements are the same logical item.
#[cfg(feature = "arc")]
pub type EquivalenceRelation<T> = ReferenceCounter<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Shared predicate deciding whether two elements are the same logical item.
#[cfg(not(feature = "arc"))]
pub type EquivalenceRelation<T> = ReferenceCounter<dyn Fn(&T, &T) -> bool>;

/// Wraps a comparison closure into an [`OrderRelation`].
///
/// The closure must be a total order over the elements it will see; search
/// results are unspecified otherwise.
pub fn order_relation<T, F>(compare: F) -> OrderRelation<T>
where
    F: Fn(&T, &T) -> Ordering + MaybeSendSync + 'static,
{
    ReferenceCounter::new(compare)
}

/// Builds an [`OrderRelation`] comparing the keys extracted by `key`.
pub fn order_by_key<T, K, F>(key: F) -> OrderRelation<T>
where
    K: Ord,
    F: Fn(&T) -> K + MaybeSendSync + 'static,
{
    order_relation(move |left: &T, right: &T| key(left).cmp(&key(right)))
}

/// Wraps a predicate closure into an [`EquivalenceRelation`].
pub fn equivalence_relation<T, F>(equivalent: F) -> EquivalenceRelation<T>
where
    F: Fn(&T, &T) -> bool + MaybeSendSync + 'static,
{
    ReferenceCounter::new(equivalent)
}

/// Builds an [`EquivalenceRelation`] that holds when the keys extracted by
/// `key` are equal.
pub fn equivalence_by_key<T, K, F>(key: F) -> EquivalenceRelation<T>
where
    K: PartialEq,
    F: Fn(&T) -> K + MaybeSendSync + 'static,
{
    equivalence_relation(move |left: &T, right: &T| key(left) == key(right))
}

// =============================================================================
// Active Order
// =============================================================================

/// The order a list actually sorts by: either `Ord::cmp` or a custom relation.
///
/// `Natural` can only be built for `T: Ord`, which keeps the list types free
/// of an `Ord` bound when a custom relation is supplied.
pub(crate) enum Order<T> {
    Natural(fn(&T, &T) -> Ordering),
    Custom(OrderRelation<T>),
}

impl<T> Order<T> {
    pub(crate) fn natural() -> Self
    where
        T: Ord,
    {
        Self::Natural(<T as Ord>::cmp)
    }

    #[inline]
    pub(crate) fn compare(&self, left: &T, right: &T) -> Ordering {
        match self {
            Self::Natural(compare) => compare(left, right),
            Self::Custom(relation) => relation(left, right),
        }
    }

    /// Returns the custom relation, or `None` for the natural order.
    pub(crate) const fn custom(&self) -> Option<&OrderRelation<T>> {
        match self {
            Self::Natural(_) => None,
            Self::Custom(relation) => Some(relation),
        }
    }
}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural(compare) => Self::Natural(*compare),
            Self::Custom(relation) => Self::Custom(ReferenceCounter::clone(relation)),
        }
    }
}

impl<T> From<OrderRelation<T>> for Order<T> {
    fn from(relation: OrderRelation<T>) -> Self {
        Self::Custom(relation)
    }
}
