//! Error types.
//!
//! Insertion and lookup never fail. Errors are only produced by
//! [`UniqueSortedList::validate`], which reports a broken invariant after the
//! fact, typically caused by an order relation that is not a total order or
//! by replacing the equivalence relation of a populated list.
//!
//! [`UniqueSortedList::validate`]: crate::sorted::UniqueSortedList::validate

/// A violated list invariant.
///
/// # Examples
///
/// ```rust
/// use unique_sorted_list::error::InvariantError;
///
/// let error = InvariantError::Duplicate { first: 0, second: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "elements at indices 0 and 2 are equivalent"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// The element at `index` sorts after the element that follows it.
    #[error("element at index {index} sorts after its successor")]
    Unsorted {
        /// Index of the first element of the out-of-order pair.
        index: usize,
    },
    /// Two stored elements are equivalent.
    #[error("elements at indices {first} and {second} are equivalent")]
    Duplicate {
        /// Index of the earlier element.
        first: usize,
        /// Index of the later element.
        second: usize,
    },
}

/// Result alias for invariant checks.
pub type Result<T> = std::result::Result<T, InvariantError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unsorted_display() {
        let error = InvariantError::Unsorted { index: 4 };
        assert_eq!(
            error.to_string(),
            "element at index 4 sorts after its successor"
        );
    }

    #[rstest]
    fn error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(InvariantError::Duplicate { first: 1, second: 3 });
        assert!(error.source().is_none());
    }
}
