//! The singly-linked list and its iterators.
//!
//! - [`RecursiveList`]: the owning list
//! - [`RecursiveListIterator`]: a borrowing forward cursor
//! - [`RecursiveListIntoIterator`]: a consuming iterator
//! - [`ListError`]: the errors every checked operation can return
//!
//! # Chain Layout
//!
//! ```text
//! list.head -> [1] -> [2] -> [3] -> None
//!              len = 3
//! ```
//!
//! The list owns the head node and every node owns its successor, so the
//! chain is strictly linear: no node is shared and no cycle can form.

mod error;
mod iterator;
mod node;
mod recursive_list;

pub use error::ListError;
pub use iterator::RecursiveListIntoIterator;
pub use iterator::RecursiveListIterator;
pub use recursive_list::RecursiveList;
