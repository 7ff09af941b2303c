//! gencol: generic containers with explicit growth and comparison policies.
//!
//! This is the top-level facade crate. It re-exports the three engines and
//! binds each one to an element type and a comparator, so call sites work
//! with [`Vector<T, C>`], [`List<T, C>`] and [`ForwardList<T>`] instead of
//! passing a comparator to every lookup.
//!
//! # Quick start
//!
//! ```rust
//! use gencol::prelude::*;
//!
//! let mut v = Vector::new(ArrayConfig::new(2, 2.0)?)?;
//! v.push_back(10)?;
//! v.push_back(20)?;
//! v.push_back(30)?;
//! assert_eq!(v.capacity(), 4);
//!
//! v.insert(1, 99)?;
//! assert_eq!(v.as_slice(), &[10, 99, 20, 30]);
//! assert_eq!(v.remove_at(0)?, 10);
//! assert_eq!(v.find(&20), Some(1));
//!
//! let mut list = List::new();
//! list.push_back("b")?;
//! list.push_front("a")?;
//! let b = list.find(&"b").ok_or(ContainerError::NoData)?;
//! list.insert_after(Some(b), "c")?;
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! Elements without a useful `PartialEq`, or looked up by key, take a
//! comparator at construction:
//!
//! ```rust
//! use gencol::prelude::*;
//!
//! struct Order { id: u64, qty: u32 }
//!
//! let mut orders = List::with_comparator(ByKey::new(|o: &Order| o.id));
//! orders.push_back(Order { id: 1, qty: 5 })?;
//! orders.push_back(Order { id: 2, qty: 7 })?;
//! let removed = orders.remove_by_value(&Order { id: 2, qty: 0 })?;
//! assert_eq!(removed.qty, 7);
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gencol-core` | errors, comparators, array configuration |
//! | [`arena`] | `gencol-arena` | generational slot table used by the linked engines |
//! | [`array`] | `gencol-array` | contiguous array engine and views |
//! | [`list`] | `gencol-list` | doubly-linked engine and node references |
//! | [`forward`] | `gencol-forward` | forward list engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod typed_list;
mod vector;

/// Errors, comparators and configuration (`gencol-core`).
pub use gencol_core as types;

/// Generational slot storage (`gencol-arena`).
pub use gencol_arena as arena;

/// The contiguous array engine (`gencol-array`).
///
/// [`array::RawArray`] takes the comparator per call; [`Vector`] stores it.
pub use gencol_array as array;

/// The doubly-linked engine (`gencol-list`).
///
/// [`list::RawList`] takes the comparator per call; [`List`] stores it.
pub use gencol_list as list;

/// The forward list engine (`gencol-forward`).
pub use gencol_forward as forward;

pub use typed_list::List;
pub use vector::Vector;

/// Forward list of `T`. The forward engine has no lookups, so it needs no
/// comparator binding.
pub type ForwardList<T> = gencol_forward::RawForwardList<T>;

/// Common imports for typical gencol usage.
///
/// ```rust
/// use gencol::prelude::*;
/// ```
pub mod prelude {
    // Typed containers
    pub use crate::{ForwardList, List, Vector};

    // Engine handles and views
    pub use gencol_array::ArrayView;
    pub use gencol_list::NodeRef;

    // Configuration and comparison
    pub use gencol_core::{ArrayConfig, ByKey, Comparator, GrowthFactor, StructuralEq};

    // Errors
    pub use gencol_core::{ContainerError, ErrorKind};
}
