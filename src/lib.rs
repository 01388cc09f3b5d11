//! # recursive-list
//!
//! An ordered, indexable, mutable singly-linked list.
//!
//! ## Overview
//!
//! [`RecursiveList`] stores its elements in a chain of uniquely owned nodes
//! and supports:
//!
//! - **Insertion** at the front, the back, or any index in `0..=len`
//! - **Removal** from the front, the back, any index, or by value
//! - **Lookup** by index and linear search by value
//! - **Forward iteration** through [`RecursiveListIterator`]
//!
//! Every operation validates its arguments before it touches the chain, so a
//! rejected call never leaves the list partially modified. Failures are
//! reported through [`ListError`].
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for structural mutations and rejected calls
//!
//! ## Example
//!
//! ```rust
//! use recursive_list::prelude::*;
//!
//! let mut list: RecursiveList<i32> = RecursiveList::new();
//! list.insert_last(1)?.insert_last(2)?.insert_last(3)?;
//! assert_eq!(list.remove_at(1)?, 2);
//! assert_eq!(list.index_of(&3)?, Some(1));
//! assert_eq!(list.to_string(), "[1, 3]");
//! # Ok::<(), ListError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use recursive_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::list::*;
    pub use crate::sequence::Sequence;
}

#[macro_use]
mod diagnostics;

pub mod list;
pub mod sequence;

pub use list::{ListError, RecursiveList, RecursiveListIntoIterator, RecursiveListIterator};
pub use sequence::Sequence;
