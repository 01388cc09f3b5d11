// =============================================================================
// Iterator Implementation
// =============================================================================

use std::iter::FusedIterator;

use super::error::ListError;
use super::node::Node;
use super::recursive_list::RecursiveList;

/// A forward cursor over references to elements of a [`RecursiveList`].
///
/// The cursor starts at the head of the list and moves one node per step.
/// It cannot be restarted: once exhausted it stays exhausted.
///
/// Besides [`Iterator`], the cursor offers a checked protocol:
/// [`has_next`](Self::has_next) reports whether an element remains, and
/// [`try_next`](Self::try_next) fails with [`ListError::IteratorExhausted`]
/// instead of returning `None`.
///
/// # Examples
///
/// ```rust
/// use recursive_list::{ListError, RecursiveList};
///
/// let mut list: RecursiveList<i32> = RecursiveList::new();
/// list.insert_last(1)?.insert_last(2)?;
///
/// let mut iterator = list.iter();
/// assert_eq!(iterator.try_next()?, &1);
/// assert_eq!(iterator.try_next()?, &2);
/// assert!(!iterator.has_next());
/// assert_eq!(iterator.try_next(), Err(ListError::IteratorExhausted));
/// # Ok::<(), ListError>(())
/// ```
pub struct RecursiveListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> RecursiveListIterator<'a, T> {
    pub(super) const fn new(head: Option<&'a Node<T>>, length: usize) -> Self {
        Self {
            current: head,
            remaining: length,
        }
    }

    /// Returns `true` if the cursor still references a node.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the element under the cursor and advances to its successor.
    ///
    /// # Errors
    ///
    /// [`ListError::IteratorExhausted`] if no element remains.
    pub fn try_next(&mut self) -> Result<&'a T, ListError> {
        self.next().ok_or(ListError::IteratorExhausted)
    }
}

impl<'a, T> Iterator for RecursiveListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RecursiveListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for RecursiveListIterator<'_, T> {}

/// An owning iterator over elements of a [`RecursiveList`].
///
/// Each step detaches the head node of the consumed list.
pub struct RecursiveListIntoIterator<T> {
    list: RecursiveList<T>,
}

impl<T> RecursiveListIntoIterator<T> {
    pub(super) const fn new(list: RecursiveList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for RecursiveListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for RecursiveListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for RecursiveListIntoIterator<T> {}
