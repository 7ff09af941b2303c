//! Singly-linked forward list engine.
//!
//! [`RawForwardList<T>`] is a queue-shaped chain: O(1) append at the tail,
//! O(1) prepend at the head, O(1) removal at the head. There is no
//! arbitrary removal and no lookup.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod forward;

pub use forward::{Iter, RawForwardList};
