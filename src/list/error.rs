//! Error type for list operations.
//!
//! Every checked operation on [`RecursiveList`](super::RecursiveList) and
//! [`RecursiveListIterator`](super::RecursiveListIterator) validates its
//! input before touching the chain and reports failures as a [`ListError`].

/// Represents the ways a list operation can be rejected.
///
/// A rejected operation never modifies the list.
///
/// # Examples
///
/// ```rust
/// use recursive_list::{ListError, RecursiveList};
///
/// let mut list: RecursiveList<i32> = RecursiveList::new();
/// assert_eq!(
///     list.remove_first(),
///     Err(ListError::EmptyList { operation: "remove_first" })
/// );
/// assert_eq!(
///     format!("{}", ListError::IndexOutOfBounds { index: 5, length: 3 }),
///     "index 5 out of bounds for length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// An absent element was given where one is required.
    NullArgument {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// An index fell outside `0..len` (or `0..=len` for insertion).
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
    /// An operation that needs at least one element was called on an empty list.
    EmptyList {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// `try_next` was called on an iterator with no remaining elements.
    IteratorExhausted,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument { operation } => {
                write!(formatter, "{operation}: element must not be absent")
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::EmptyList { operation } => write!(formatter, "{operation}: list is empty"),
            Self::IteratorExhausted => write!(formatter, "iterator exhausted"),
        }
    }
}

impl std::error::Error for ListError {}

static_assertions::assert_impl_all!(ListError: std::error::Error, Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ListError::NullArgument { operation: "insert_first" },
        "insert_first: element must not be absent"
    )]
    #[case(
        ListError::IndexOutOfBounds { index: 5, length: 3 },
        "index 5 out of bounds for length 3"
    )]
    #[case(
        ListError::EmptyList { operation: "remove_last" },
        "remove_last: list is empty"
    )]
    #[case(ListError::IteratorExhausted, "iterator exhausted")]
    fn test_display(#[case] error: ListError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_equality() {
        let error1 = ListError::IndexOutOfBounds { index: 1, length: 0 };
        let error2 = ListError::IndexOutOfBounds { index: 1, length: 0 };
        let error3 = ListError::IndexOutOfBounds { index: 2, length: 0 };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[rstest]
    fn test_debug_names_variant() {
        let debug_string = format!("{:?}", ListError::EmptyList { operation: "get_first" });
        assert!(debug_string.contains("EmptyList"));
        assert!(debug_string.contains("get_first"));
    }

    #[rstest]
    fn test_source_is_none() {
        use std::error::Error;

        assert!(ListError::IteratorExhausted.source().is_none());
    }
}
