//! # unique-sorted-list
//!
//! Sorted sequences that keep their elements unique.
//!
//! ## Overview
//!
//! - **[`SortedList`](sorted::SortedList)**: keeps elements sorted by a natural
//!   or custom order relation, with binary-search lookup and insertion
//! - **[`UniqueSortedList`](sorted::UniqueSortedList)**: a sorted list that
//!   skips any element equivalent to one already stored, where equivalence is
//!   a custom predicate or, by default, equality under the order relation
//! - **[`InvariantError`](error::InvariantError)**: reported when a list is
//!   validated against broken relations
//!
//! ## Feature Flags
//!
//! - `arc`: share relations through `Arc` and require them to be `Send + Sync`,
//!   making the lists `Send + Sync`
//! - `serde`: serialize lists as sequences and deserialize them with the
//!   natural order
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Construction and insertion emit `trace`-level [`tracing`] events. Install
//! a subscriber in the application to see them.
//!
//! ## Example
//!
//! ```rust
//! use unique_sorted_list::prelude::*;
//!
//! let mut list: UniqueSortedList<char> = "bcbaabcc".chars().collect();
//! assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
//!
//! assert_eq!(list.insert('a'), 0);
//! assert_eq!(list.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use unique_sorted_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvariantError;
    pub use crate::sorted::*;
}

pub mod error;
pub mod sorted;
