//! Doubly-linked list engine.
//!
//! [`RawList<T>`] keeps head and tail links and supports O(1) insertion and
//! removal at either end or next to a known node. Positional operations
//! ([`RawList::at`], [`RawList::insert_at`]) walk from the head.
//!
//! Nodes are stored in a [`gencol_arena::SlotArena`] owned by the list.
//! Callers hold [`NodeRef`]s, which are plain copyable values: a reference
//! to a removed node, or one presented to the wrong list, is detected and
//! rejected rather than followed.
//!
//! ```
//! use gencol_list::RawList;
//!
//! let mut list = RawList::new();
//! list.push_back(10)?;
//! list.push_back(1)?;
//! list.push_front(5)?;
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 10, 1]);
//!
//! let second = list.at(1)?;
//! assert_eq!(list.get(second), Some(&10));
//! # Ok::<(), gencol_core::ContainerError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod list;
mod node;

pub use iter::Iter;
pub use list::RawList;
pub use node::NodeRef;
