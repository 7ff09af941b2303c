//! Core types for the gencol container engines.
//!
//! This is the leaf crate with zero internal dependencies. It holds what the
//! array, list and forward-list engines have in common: the
//! [`ContainerError`] vocabulary, the [`Comparator`] policy used for
//! value lookups, array configuration, and container identity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod id;

pub use compare::{ByKey, Comparator, StructuralEq};
pub use config::{ArrayConfig, GrowthFactor};
pub use error::{ContainerError, ErrorKind};
pub use id::ContainerId;
