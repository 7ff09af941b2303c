//! Element fixtures.
//!
//! - [`Padded`]: `Copy` struct with interior padding; compare it with
//!   `StructuralEq`, never by bytes.
//! - [`Order`]: heap-owning record looked up by id through [`by_order_id`].

use gencol_core::ByKey;

/// Small struct whose layout contains padding between `tag` and `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padded {
    pub tag: u8,
    pub value: u64,
}

impl Padded {
    pub fn new(tag: u8, value: u64) -> Self {
        Self { tag, value }
    }
}

/// Record with an owned string, identified by `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub qty: u32,
    pub venue: String,
}

impl Order {
    pub fn new(id: u64, qty: u32, venue: impl Into<String>) -> Self {
        Self {
            id,
            qty,
            venue: venue.into(),
        }
    }

    /// Probe value that only carries an id, for lookups by key.
    pub fn probe(id: u64) -> Self {
        Self::new(id, 0, "")
    }
}

/// Comparator matching orders by id only.
pub fn by_order_id() -> ByKey<fn(&Order) -> u64, u64> {
    fn id(order: &Order) -> u64 {
        order.id
    }
    ByKey::new(id as fn(&Order) -> u64)
}

/// `n` orders with ids `0..n`, alternating venues.
pub fn sample_orders(n: u64) -> Vec<Order> {
    (0..n)
        .map(|id| {
            let venue = if id % 2 == 0 { "XNAS" } else { "XLON" };
            Order::new(id, (id as u32 + 1) * 10, venue)
        })
        .collect()
}
