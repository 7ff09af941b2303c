//! Integration test: the forward engine against a `VecDeque` model.

use std::collections::VecDeque;

use gencol_core::ErrorKind;
use gencol_forward::RawForwardList;
use gencol_test_utils::ops::{apply_to_model, queue_ops, SeqOp};
use gencol_test_utils::DropTracker;
use proptest::prelude::*;

fn apply(list: &mut RawForwardList<i32>, op: SeqOp) -> Result<Option<i32>, ErrorKind> {
    let result = match op {
        SeqOp::PushBack(v) => list.push_back(v).map(|()| None),
        SeqOp::PushFront(v) => list.push_front(v).map(|()| None),
        SeqOp::PopFront => list.pop_front().map(Some),
        other => unreachable!("not a forward-list operation: {other:?}"),
    };
    result.map_err(|e| e.kind())
}

proptest! {
    #[test]
    fn matches_model(ops in queue_ops(200)) {
        let mut list = RawForwardList::new();
        let mut model = VecDeque::new();
        for op in ops {
            let expected = apply_to_model(&mut model, op);
            prop_assert_eq!(apply(&mut list, op), expected, "op {:?}", op);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }
        let contents: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(contents, expected);
    }

    #[test]
    fn fifo_order(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut list = RawForwardList::new();
        for v in &values {
            list.push_back(*v).unwrap();
        }
        let mut drained = Vec::new();
        while let Ok(v) = list.pop_front() {
            drained.push(v);
        }
        prop_assert_eq!(drained, values);
        prop_assert!(list.is_empty());
    }
}

#[test]
fn every_element_dropped_exactly_once() {
    let tracker = DropTracker::new();
    let mut list = RawForwardList::new();
    for v in 0..6 {
        list.push_back(tracker.track(v)).unwrap();
    }
    drop(list.pop_front().unwrap());
    assert_eq!(tracker.drops(), 1);
    list.deinit().unwrap();
    assert_eq!(tracker.drops(), 6);

    list.push_front(tracker.track(6)).unwrap();
    drop(list);
    assert_eq!(tracker.drops(), 7);
}
