//! Mutable singly-linked list with checked positional operations.
//!
//! This module provides [`RecursiveList`], an ordered sequence stored as a
//! chain of uniquely owned nodes.
//!
//! # Overview
//!
//! - O(1) insertion and removal at the front
//! - O(1) length and emptiness checks
//! - O(index) insertion, removal and lookup at an index
//! - O(n) insertion and removal at the back, search by value
//!
//! # Traversal
//!
//! Positional operations walk the chain from the head with a cursor and a
//! remaining-distance counter:
//!
//! ```text
//! insert_at(2, x):   [a] -> [b] -> [c]        stop at distance 1 (on [b])
//!                    [a] -> [b] -> [x] -> [c]
//!
//! get(2):            [a] -> [b] -> [c]        stop at distance 0 (on [c])
//! ```
//!
//! Link mutations stop one node early because they rewrite the `next` link
//! of the predecessor. Reads stop on the target itself.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::ListError;
use super::iterator::{RecursiveListIntoIterator, RecursiveListIterator};
use super::node::{Link, Node};

/// An ordered, indexable, mutable singly-linked list.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `insert_first` | O(1)       |
/// | `insert_last`  | O(n)       |
/// | `insert_at`    | O(index)   |
/// | `remove_first` | O(1)       |
/// | `remove_last`  | O(n)       |
/// | `remove_at`    | O(index)   |
/// | `remove`       | O(n)       |
/// | `get_first`    | O(1)       |
/// | `get_last`     | O(n)       |
/// | `get`          | O(index)   |
/// | `index_of`     | O(n)       |
/// | `len`          | O(1)       |
///
/// # Absent Elements
///
/// Element arguments accept anything convertible into an `Option`. A plain
/// value is stored as is; an explicit `None` is rejected with
/// [`ListError::NullArgument`] before the chain is touched.
///
/// # Examples
///
/// ```rust
/// use recursive_list::{ListError, RecursiveList};
///
/// let mut list: RecursiveList<i32> = RecursiveList::new();
/// list.insert_first(2)?.insert_first(1)?.insert_last(3)?;
/// assert_eq!(list.get(1)?, &2);
/// assert_eq!(
///     list.insert_first(None::<i32>).err(),
///     Some(ListError::NullArgument { operation: "insert_first" })
/// );
/// assert_eq!(list.len(), 3);
/// # Ok::<(), ListError>(())
/// ```
pub struct RecursiveList<T> {
    /// The first node of the chain (if any).
    head: Link<T>,
    /// Cached number of reachable nodes.
    length: usize,
}

impl<T> RecursiveList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::RecursiveList;
    ///
    /// let list: RecursiveList<i32> = RecursiveList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Adds an element to the front of the list.
    ///
    /// Returns the list so that insertions can be chained.
    ///
    /// # Errors
    ///
    /// [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn insert_first(&mut self, element: impl Into<Option<T>>) -> Result<&mut Self, ListError> {
        let element = require_element("insert_first", element.into())?;
        self.link_at(0, element)?;
        Ok(self)
    }

    /// Adds an element to the back of the list.
    ///
    /// # Errors
    ///
    /// [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::{ListError, RecursiveList};
    ///
    /// let mut list: RecursiveList<&str> = RecursiveList::new();
    /// list.insert_last("a")?.insert_last("b")?;
    /// assert_eq!(list.get_last()?, &"b");
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn insert_last(&mut self, element: impl Into<Option<T>>) -> Result<&mut Self, ListError> {
        let element = require_element("insert_last", element.into())?;
        self.link_at(self.length, element)?;
        Ok(self)
    }

    /// Inserts an element so that a subsequent `get(index)` returns it.
    ///
    /// Elements at `index` and after shift one position towards the back.
    /// `insert_at(self.len(), element)` is equivalent to `insert_last(element)`.
    ///
    /// # Errors
    ///
    /// - [`ListError::NullArgument`] if `element` is `None`
    /// - [`ListError::IndexOutOfBounds`] if `index > self.len()`
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::{ListError, RecursiveList};
    ///
    /// let mut list: RecursiveList<i32> = RecursiveList::new();
    /// list.insert_last(1)?.insert_last(3)?;
    /// list.insert_at(1, 2)?;
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    ///
    /// assert_eq!(
    ///     list.insert_at(5, 9).err(),
    ///     Some(ListError::IndexOutOfBounds { index: 5, length: 3 })
    /// );
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn insert_at(
        &mut self,
        index: usize,
        element: impl Into<Option<T>>,
    ) -> Result<&mut Self, ListError> {
        let element = require_element("insert_at", element.into())?;
        if index > self.length {
            return Err(rejected(self.out_of_bounds(index)));
        }
        self.link_at(index, element)?;
        Ok(self)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.require_non_empty("remove_first")?;
        self.unlink_at(0)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        self.require_non_empty("remove_last")?;
        self.unlink_at(self.length - 1)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::{ListError, RecursiveList};
    ///
    /// let mut list: RecursiveList<i32> = RecursiveList::new();
    /// list.insert_last(1)?.insert_last(2)?.insert_last(3)?;
    /// assert_eq!(list.remove_at(2)?, 3);
    /// assert_eq!(list.to_string(), "[1, 2]");
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        self.unlink_at(index)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn get_first(&self) -> Result<&T, ListError> {
        self.require_non_empty("get_first")?;
        self.element_at(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn get_last(&self) -> Result<&T, ListError> {
        self.require_non_empty("get_last")?;
        self.element_at(self.length - 1)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(index)
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        self.element_at(index)
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// The iterator borrows the list, so the list cannot be mutated while
    /// the iterator is alive:
    ///
    /// ```compile_fail
    /// use recursive_list::RecursiveList;
    ///
    /// let mut list: RecursiveList<i32> = RecursiveList::new();
    /// list.insert_last(1).unwrap();
    /// let mut iterator = list.iter();
    /// list.insert_last(2).unwrap();
    /// iterator.next();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::{ListError, RecursiveList};
    ///
    /// let mut list: RecursiveList<i32> = RecursiveList::new();
    /// list.insert_last(1)?.insert_last(2)?;
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2]);
    /// # Ok::<(), ListError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> RecursiveListIterator<'_, T> {
        RecursiveListIterator::new(self.head.as_deref(), self.length)
    }

    /// Detaches the head node and returns its element, if any.
    pub(super) fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { element, next } = *node;
        self.head = next;
        self.length -= 1;
        Some(element)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.length {
            Ok(())
        } else {
            Err(rejected(self.out_of_bounds(index)))
        }
    }

    fn require_non_empty(&self, operation: &'static str) -> Result<(), ListError> {
        if self.is_empty() {
            Err(rejected(ListError::EmptyList { operation }))
        } else {
            Ok(())
        }
    }

    const fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            length: self.length,
        }
    }

    // =========================================================================
    // Chain Traversal
    // =========================================================================

    /// Walks from the head until the remaining distance is one and returns
    /// the node visited there: the predecessor of position `distance`.
    ///
    /// `distance` must be at least one.
    fn predecessor_mut(&mut self, distance: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut()?;
        let mut remaining = distance;
        while remaining > 1 {
            current = current.next.as_deref_mut()?;
            remaining -= 1;
        }
        Some(current)
    }

    /// Walks from the head until the remaining distance is zero and returns
    /// the node visited there.
    fn node_at(&self, distance: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref()?;
        let mut remaining = distance;
        while remaining > 0 {
            current = current.next.as_deref()?;
            remaining -= 1;
        }
        Some(current)
    }

    fn element_at(&self, index: usize) -> Result<&T, ListError> {
        self.node_at(index)
            .map(|node| &node.element)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Links a new node so that it lands at `index`. `index <= length`.
    fn link_at(&mut self, index: usize, element: T) -> Result<(), ListError> {
        if index == 0 {
            self.head = Some(Node::boxed(element, self.head.take()));
        } else {
            let out_of_bounds = self.out_of_bounds(index);
            let predecessor = self.predecessor_mut(index).ok_or(out_of_bounds)?;
            predecessor.next = Some(Node::boxed(element, predecessor.next.take()));
        }
        self.length += 1;
        trace_mutation!("insert", index, self.length);
        Ok(())
    }

    /// Unlinks the node at `index` and returns its element. `index < length`.
    ///
    /// The predecessor takes ownership of the unlinked node's successor, which
    /// is `None` when the final node is removed.
    fn unlink_at(&mut self, index: usize) -> Result<T, ListError> {
        let out_of_bounds = self.out_of_bounds(index);
        let element = if index == 0 {
            self.head.take().map(|node| {
                let Node { element, next } = *node;
                self.head = next;
                element
            })
        } else {
            self.predecessor_mut(index).and_then(|predecessor| {
                predecessor.next.take().map(|node| {
                    let Node { element, next } = *node;
                    predecessor.next = next;
                    element
                })
            })
        }
        .ok_or(out_of_bounds)?;
        self.length -= 1;
        trace_mutation!("remove", index, self.length);
        Ok(element)
    }
}

impl<T: PartialEq> RecursiveList<T> {
    /// Returns the smallest index holding an element equal to `element`.
    ///
    /// Returns `Ok(None)` when no element matches.
    ///
    /// # Errors
    ///
    /// [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// O(n) worst case, O(k) where k is the index of the first match
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursive_list::{ListError, RecursiveList};
    ///
    /// let mut list: RecursiveList<i32> = RecursiveList::new();
    /// list.insert_last(7)?.insert_last(8)?.insert_last(7)?;
    /// assert_eq!(list.index_of(&7)?, Some(0));
    /// assert_eq!(list.index_of(&9)?, None);
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn index_of<'e>(&self, element: impl Into<Option<&'e T>>) -> Result<Option<usize>, ListError>
    where
        T: 'e,
    {
        let element = require_element("index_of", element.into())?;
        Ok(self.position_of(element))
    }

    /// Removes the first (lowest-index) element equal to `element`.
    ///
    /// Returns `Ok(true)` if an element was removed and `Ok(false)` if the
    /// list was left unchanged.
    ///
    /// # Errors
    ///
    /// [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove<'e>(&mut self, element: impl Into<Option<&'e T>>) -> Result<bool, ListError>
    where
        T: 'e,
    {
        let element = require_element("remove", element.into())?;
        match self.position_of(element) {
            Some(index) => self.unlink_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }
}

fn require_element<E>(operation: &'static str, element: Option<E>) -> Result<E, ListError> {
    element.ok_or_else(|| rejected(ListError::NullArgument { operation }))
}

fn rejected(error: ListError) -> ListError {
    debug_rejection!(error);
    error
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for RecursiveList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RecursiveList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for RecursiveList<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        let mut tail = &mut cloned.head;
        for element in self {
            let node = tail.insert(Node::boxed(element.clone(), None));
            tail = &mut node.next;
        }
        cloned.length = self.length;
        cloned
    }
}

impl<T> IntoIterator for RecursiveList<T> {
    type Item = T;
    type IntoIter = RecursiveListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RecursiveListIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RecursiveList<T> {
    type Item = &'a T;
    type IntoIter = RecursiveListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for RecursiveList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RecursiveList<T> {}

impl<T: Hash> Hash for RecursiveList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RecursiveList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RecursiveList<T> {
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

static_assertions::assert_impl_all!(RecursiveList<i32>: Send, Sync, Default, Clone);
static_assertions::assert_not_impl_any!(RecursiveList<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
