//! Growable contiguous array engine.
//!
//! [`RawArray<T>`] is a resizable buffer with amortized O(1) append and
//! O(n) insertion/removal at arbitrary positions by contiguous shifting.
//!
//! # Growth policy
//!
//! When an insert finds the array full, the new capacity is
//! `floor(len * growth_factor)`, bumped by one if that would not exceed the
//! current capacity. Removal never shrinks the buffer; only
//! [`RawArray::shrink_to_fit`] and [`RawArray::deinit`] do.
//!
//! ```
//! use gencol_array::RawArray;
//! use gencol_core::ArrayConfig;
//!
//! let mut a = RawArray::new(ArrayConfig::new(2, 2.0)?)?;
//! a.push_back(10)?;
//! a.push_back(20)?;
//! a.push_back(30)?;
//! assert_eq!(a.capacity(), 4);
//! assert_eq!(a.as_slice(), &[10, 20, 30]);
//! # Ok::<(), gencol_core::ContainerError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod view;

pub use array::RawArray;
pub use view::ArrayView;
