//! Container identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ContainerId`] allocation.
static CONTAINER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a linked container.
///
/// Allocated from a monotonic atomic counter via [`ContainerId::next`].
/// Node handles carry the id of the container that issued them, so a handle
/// presented to a different container is rejected instead of aliasing an
/// unrelated slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh, unique id.
    ///
    /// Each call returns an id never returned before within this process.
    pub fn next() -> Self {
        Self(CONTAINER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
