//! The ordered-sequence interface.
//!
//! [`Sequence`] is the contract a positional container offers to generic
//! code: insertion and removal at either end or at an index, indexed lookup,
//! and search by value. Elements passed through this interface are always
//! present, so only index and emptiness checks can fail.
//!
//! The trait is dyn-compatible:
//!
//! ```rust
//! use recursive_list::{ListError, RecursiveList, Sequence};
//!
//! fn fill(sequence: &mut dyn Sequence<i32>) -> Result<(), ListError> {
//!     sequence.insert_last(1)?;
//!     sequence.insert_first(0)?;
//!     sequence.insert_at(2, 2)
//! }
//!
//! let mut list: RecursiveList<i32> = RecursiveList::new();
//! fill(&mut list)?;
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//! # Ok::<(), ListError>(())
//! ```

use crate::list::{ListError, RecursiveList};

/// An ordered, indexable, mutable sequence.
///
/// # Laws
///
/// For any sequence `s`, element `x` and index `i` in `0..=s.len()`:
///
/// - `s.insert_at(i, x)` followed by `s.get(i)` yields `x`
/// - `s.insert_at(s.len(), x)` has the same effect as `s.insert_last(x)`
/// - every successful insertion grows `len()` by one and every successful
///   removal shrinks it by one
/// - a call that returns `Err` leaves the sequence unchanged
pub trait Sequence<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element to the front.
    ///
    /// # Errors
    ///
    /// Implementations may reject the element with a [`ListError`].
    fn insert_first(&mut self, element: T) -> Result<(), ListError>;

    /// Adds an element to the back.
    ///
    /// # Errors
    ///
    /// Implementations may reject the element with a [`ListError`].
    fn insert_last(&mut self, element: T) -> Result<(), ListError>;

    /// Inserts an element so that `get(index)` returns it.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > len()`.
    fn insert_at(&mut self, index: usize, element: T) -> Result<(), ListError>;

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the sequence is empty.
    fn remove_first(&mut self) -> Result<T, ListError>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the sequence is empty.
    fn remove_last(&mut self) -> Result<T, ListError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the sequence is empty.
    fn get_first(&self) -> Result<&T, ListError>;

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the sequence is empty.
    fn get_last(&self) -> Result<&T, ListError>;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Returns the smallest index holding an element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Removes the lowest-index element equal to `element`, returning
    /// whether anything was removed.
    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq;
}

impl<T> Sequence<T> for RecursiveList<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn insert_first(&mut self, element: T) -> Result<(), ListError> {
        Self::insert_first(self, element).map(|_| ())
    }

    fn insert_last(&mut self, element: T) -> Result<(), ListError> {
        Self::insert_last(self, element).map(|_| ())
    }

    fn insert_at(&mut self, index: usize, element: T) -> Result<(), ListError> {
        Self::insert_at(self, index, element).map(|_| ())
    }

    fn remove_first(&mut self) -> Result<T, ListError> {
        Self::remove_first(self)
    }

    fn remove_last(&mut self) -> Result<T, ListError> {
        Self::remove_last(self)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        Self::remove_at(self, index)
    }

    fn get_first(&self) -> Result<&T, ListError> {
        Self::get_first(self)
    }

    fn get_last(&self) -> Result<&T, ListError> {
        Self::get_last(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        Self::get(self, index)
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        Self::remove(self, element).unwrap_or(false)
    }
}
