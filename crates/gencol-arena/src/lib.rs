//! Generational slot storage for the gencol linked engines.
//!
//! Linked nodes are not individually boxed. They live in a [`SlotArena`]
//! and refer to each other by slot index, so prev/next links are plain
//! integers and ownership stays with a single table.
//!
//! ```text
//! SlotArena<Node>
//! ├── Vec<Slot>            stable indices, grows through try_reserve
//! │   └── Slot { generation, Occupied(node) | Vacant { next_free } }
//! └── free_head            LIFO chain of vacant slots
//! ```
//!
//! A [`SlotHandle`] is `(index, generation)`. Removing a value bumps the
//! slot's generation, so stale handles resolve to `None` instead of aliasing
//! whatever later reuses the slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod slot;

pub use handle::SlotHandle;
pub use slot::SlotArena;
