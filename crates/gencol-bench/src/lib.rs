//! Seeded workloads for the gencol benchmarks.
//!
//! - [`positional_workload`]: random insert/remove positions for the array
//!   and list engines
//! - [`lookup_keys`]: probe keys with a fixed hit ratio
//!
//! Every generator is driven by a [`ChaCha8Rng`] seeded from the caller, so
//! runs are reproducible across machines.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Element counts benchmarked for each engine.
pub const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// One positional edit. Positions are valid for the container length at the
/// point the edit is applied, assuming edits are applied in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Insert `value` at `pos` (`pos <= len`).
    Insert { pos: usize, value: u64 },
    /// Remove the element at `pos` (`pos < len`).
    Remove { pos: usize },
}

/// Generate `n` edits starting from a container of `start_len` elements.
///
/// Inserts and removes alternate at random; a remove is only drawn when the
/// container is non-empty.
pub fn positional_workload(seed: u64, start_len: usize, n: usize) -> Vec<Edit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut len = start_len;
    let mut edits = Vec::with_capacity(n);
    for _ in 0..n {
        if len > 0 && rng.random_bool(0.5) {
            edits.push(Edit::Remove {
                pos: rng.random_range(0..len),
            });
            len -= 1;
        } else {
            edits.push(Edit::Insert {
                pos: rng.random_range(0..=len),
                value: rng.random(),
            });
            len += 1;
        }
    }
    edits
}

/// `n` probe keys for a container holding `0..len`.
///
/// Roughly `hit_ratio` of the keys are present; the rest lie past `len`.
pub fn lookup_keys(seed: u64, len: usize, n: usize, hit_ratio: f64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if len > 0 && rng.random_bool(hit_ratio) {
                rng.random_range(0..len as u64)
            } else {
                len as u64 + rng.random_range(0..1_000u64)
            }
        })
        .collect()
}
