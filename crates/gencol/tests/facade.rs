//! Integration test: the typed containers through the prelude.

use gencol::prelude::*;
use gencol_test_utils::fixtures::{by_order_id, sample_orders, Order, Padded};
use proptest::prelude::*;

#[test]
fn vector_of_padded_structs() {
    let mut v = Vector::with_capacity(1).unwrap();
    v.push_back(Padded::new(1, 10)).unwrap();
    v.push_back(Padded::new(2, 20)).unwrap();
    assert!(v.exists(&Padded::new(2, 20)));
    assert!(!v.exists(&Padded::new(1, 20)));
    assert_eq!(v.view().len(), 2);
}

#[test]
fn list_of_orders_by_id() {
    let mut list = List::with_comparator(by_order_id());
    for order in sample_orders(4) {
        list.push_back(order).unwrap();
    }
    let node = list.find(&Order::probe(2)).unwrap();
    list.insert_before(node, Order::new(10, 1, "XPAR")).unwrap();
    let ids: Vec<_> = list.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![0, 1, 10, 2, 3]);

    let removed = list.remove_by_value(&Order::probe(10)).unwrap();
    assert_eq!(removed.venue, "XPAR");
    assert!(!list.exists(&Order::probe(10)));
    list.check_links().unwrap();
}

#[test]
fn list_worked_example() {
    let mut list = List::new();
    list.push_back(10).unwrap();
    list.push_back(1).unwrap();
    list.push_front(5).unwrap();
    assert_eq!(format!("{list:?}"), "[5, 10, 1]");
    let node = list.at(1).unwrap();
    assert_eq!(list.get(node), Some(&10));
}

#[test]
fn forward_list_is_a_queue() {
    let mut q = ForwardList::new();
    q.push_back(1).unwrap();
    q.push_back(2).unwrap();
    q.push_front(0).unwrap();
    assert_eq!(q.pop_front().unwrap(), 0);
    assert_eq!(q.pop_front().unwrap(), 1);
    assert_eq!(q.pop_front().unwrap(), 2);
    assert_eq!(q.pop_front().unwrap_err().kind(), ErrorKind::NoData);
}

#[test]
fn errors_carry_stable_codes() {
    let mut v: Vector<i32> = Vector::with_capacity(2).unwrap();
    let err = v.remove_at(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(err.code(), 3);
    assert_eq!(v.pop_back().unwrap_err().code(), 4);
    assert_eq!(
        Vector::<i32>::with_capacity(0).unwrap_err().kind(),
        ErrorKind::InvalidArg
    );
}

#[test]
fn typed_wrappers_expose_their_engines() {
    let mut v = Vector::with_comparator(ArrayConfig::with_capacity(2), by_order_id()).unwrap();
    for order in sample_orders(3) {
        v.push_back(order).unwrap();
    }
    assert!(v.comparator().equivalent(&Order::probe(1), &Order::new(1, 0, "XLON")));
    assert_eq!(v.as_raw().find(&Order::probe(2), v.comparator()), Some(2));
    let raw = v.into_raw();
    assert_eq!(raw.len(), 3);

    let mut list = List::with_comparator(by_order_id());
    for order in sample_orders(3) {
        list.push_back(order).unwrap();
    }
    assert!(list.comparator().equivalent(&Order::probe(0), &Order::new(0, 5, "XNAS")));
    assert_eq!(list.as_raw().len(), 3);
    list.deinit().unwrap();
    assert!(list.is_empty());
    let mut raw = list.into_raw();
    raw.push_back(Order::probe(9)).unwrap();
    raw.check_links().unwrap();
}

proptest! {
    #[test]
    fn find_returns_first_match(values in proptest::collection::vec(0i32..5, 0..30), probe in 0i32..5) {
        let mut v = Vector::with_capacity(1).unwrap();
        let mut list = List::new();
        for x in &values {
            v.push_back(*x).unwrap();
            list.push_back(*x).unwrap();
        }
        let expected = values.iter().position(|x| *x == probe);
        prop_assert_eq!(v.find(&probe), expected);
        let list_pos = expected.map(|p| list.at(p).unwrap());
        prop_assert_eq!(list.find(&probe), list_pos);
        prop_assert_eq!(v.exists(&probe), expected.is_some());
        prop_assert_eq!(list.exists(&probe), expected.is_some());
    }
}
