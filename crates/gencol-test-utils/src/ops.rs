//! Random operation sequences and a reference model.
//!
//! Property tests drive a container and a `VecDeque` model with the same
//! [`SeqOp`] sequence and compare results after every step. Positions are
//! drawn from a small fixed range so that out-of-range calls are exercised
//! as often as valid ones.

use std::collections::VecDeque;

use gencol_core::ErrorKind;
use proptest::collection::vec;
use proptest::prelude::*;

/// Largest position generated for positional operations.
pub const MAX_POS: usize = 12;

/// One structural operation on a sequence container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqOp {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    InsertAt(usize, i32),
    RemoveAt(usize),
}

/// Operations supported by the array engine.
pub fn array_ops(max_len: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(SeqOp::PushBack),
        1 => Just(SeqOp::PopBack),
        2 => (0..=MAX_POS, any::<i32>()).prop_map(|(p, v)| SeqOp::InsertAt(p, v)),
        1 => (0..=MAX_POS).prop_map(SeqOp::RemoveAt),
    ];
    vec(op, 0..max_len)
}

/// Operations supported by the doubly-linked engine.
pub fn deque_ops(max_len: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    let op = prop_oneof![
        2 => any::<i32>().prop_map(SeqOp::PushBack),
        2 => any::<i32>().prop_map(SeqOp::PushFront),
        1 => Just(SeqOp::PopBack),
        1 => Just(SeqOp::PopFront),
        2 => (0..=MAX_POS, any::<i32>()).prop_map(|(p, v)| SeqOp::InsertAt(p, v)),
        1 => (0..=MAX_POS).prop_map(SeqOp::RemoveAt),
    ];
    vec(op, 0..max_len)
}

/// Operations supported by the forward engine.
pub fn queue_ops(max_len: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    let op = prop_oneof![
        2 => any::<i32>().prop_map(SeqOp::PushBack),
        2 => any::<i32>().prop_map(SeqOp::PushFront),
        1 => Just(SeqOp::PopFront),
    ];
    vec(op, 0..max_len)
}

/// Apply `op` to the reference model.
///
/// Returns the removed element for pops/removals, `None` for insertions,
/// or the error kind a conforming container must report.
pub fn apply_to_model(model: &mut VecDeque<i32>, op: SeqOp) -> Result<Option<i32>, ErrorKind> {
    match op {
        SeqOp::PushBack(v) => {
            model.push_back(v);
            Ok(None)
        }
        SeqOp::PushFront(v) => {
            model.push_front(v);
            Ok(None)
        }
        SeqOp::PopBack => model.pop_back().map(Some).ok_or(ErrorKind::NoData),
        SeqOp::PopFront => model.pop_front().map(Some).ok_or(ErrorKind::NoData),
        SeqOp::InsertAt(pos, v) => {
            if pos > model.len() {
                return Err(ErrorKind::OutOfBounds);
            }
            model.insert(pos, v);
            Ok(None)
        }
        SeqOp::RemoveAt(pos) => model.remove(pos).map(Some).ok_or(ErrorKind::OutOfBounds),
    }
}
