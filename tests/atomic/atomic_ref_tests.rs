/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::AtomicRef;
use std::sync::{
    Arc,
    Weak,
};
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct TestData {
    value: i32,
    name: String,
}

fn data(value: i32, name: &str) -> Arc<TestData> {
    Arc::new(TestData {
        value,
        name: name.to_string(),
    })
}

fn same(a: &Option<Arc<TestData>>, b: &Arc<TestData>) -> bool {
    a.as_ref().map_or(false, |a| Arc::ptr_eq(a, b))
}

#[test]
fn test_new_empty() {
    let atomic: AtomicRef<TestData> = AtomicRef::empty();
    assert!(atomic.get().is_none());
    assert!(atomic.is_empty());

    let atomic: AtomicRef<TestData> = AtomicRef::default();
    assert!(atomic.get().is_none());

    let atomic: AtomicRef<TestData> = AtomicRef::new(None);
    assert!(atomic.get().is_none());
}

#[test]
fn test_new_with_reference() {
    let d = data(42, "test");
    let atomic = AtomicRef::new(Some(d.clone()));
    assert!(same(&atomic.get(), &d));
    assert!(!atomic.is_empty());
}

#[test]
fn test_from() {
    let d = data(1, "from");
    let atomic = AtomicRef::from(d.clone());
    assert!(same(&atomic.get(), &d));

    let atomic = AtomicRef::<TestData>::from(None);
    assert!(atomic.is_empty());
}

#[test]
fn test_set() {
    let d = data(42, "first");
    let atomic = AtomicRef::empty();
    atomic.set(Some(d.clone()));
    assert!(same(&atomic.get(), &d));

    atomic.set(None);
    assert!(atomic.get().is_none());
}

#[test]
fn test_get_and_set() {
    let d1 = data(1, "d1");
    let d2 = data(2, "d2");
    let atomic = AtomicRef::new(Some(d1.clone()));

    let ret = atomic.get_and_set(Some(d2.clone()));
    assert!(same(&ret, &d1));
    assert!(same(&atomic.get(), &d2));
}

#[test]
fn test_get_and_set_current_is_echo() {
    let d = data(7, "echo");
    let atomic = AtomicRef::new(Some(d.clone()));
    let ret = atomic.get_and_set(atomic.get());
    assert!(same(&ret, &d));
    assert!(same(&atomic.get(), &d));
}

#[test]
fn test_compare_and_set() {
    let d1 = data(1, "d1");
    let d2 = data(2, "d2");
    let d3 = data(3, "d3");
    let atomic = AtomicRef::new(Some(d1.clone()));

    assert!(atomic.compare_and_set(&Some(d1.clone()), Some(d2.clone())));
    assert!(same(&atomic.get(), &d2));

    assert!(!atomic.compare_and_set(&Some(d1), Some(d3)));
    assert!(same(&atomic.get(), &d2));
}

#[test]
fn test_compare_and_set_uses_identity_not_equality() {
    let held = data(42, "same");
    let lookalike = data(42, "same");
    assert_eq!(held, lookalike);

    let atomic = AtomicRef::new(Some(held.clone()));
    assert!(!atomic.compare_and_set(&Some(lookalike), data(0, "x").into()));
    assert!(same(&atomic.get(), &held));
}

#[test]
fn test_compare_and_set_with_empty() {
    let d = data(1, "d");
    let atomic: AtomicRef<TestData> = AtomicRef::empty();

    assert!(!atomic.compare_and_set(&Some(d.clone()), None));
    assert!(atomic.compare_and_set(&None, Some(d.clone())));
    assert!(same(&atomic.get(), &d));

    assert!(!atomic.compare_and_set(&None, None));
    assert!(atomic.compare_and_set(&Some(d), None));
    assert!(atomic.is_empty());
}

#[test]
fn test_weak_compare_and_set() {
    let d1 = data(1, "d1");
    let d2 = data(2, "d2");
    let atomic = AtomicRef::new(Some(d1.clone()));

    let current = Some(d1);
    while !atomic.weak_compare_and_set(&current, Some(d2.clone())) {}
    assert!(same(&atomic.get(), &d2));
}

#[test]
fn test_compare_and_exchange() {
    let d1 = data(1, "d1");
    let d2 = data(2, "d2");
    let atomic = AtomicRef::new(Some(d1.clone()));

    let prev = atomic.compare_and_exchange(&Some(d1.clone()), Some(d2.clone()));
    assert!(same(&prev, &d1));
    assert!(same(&atomic.get(), &d2));

    let prev = atomic.compare_and_exchange(&Some(d1), None);
    assert!(same(&prev, &d2));
    assert!(same(&atomic.get(), &d2));
}

#[test]
fn test_failed_compare_and_set_releases_desired() {
    let d1 = data(1, "d1");
    let desired = data(2, "desired");
    let atomic = AtomicRef::new(Some(d1));

    assert!(!atomic.compare_and_set(&None, Some(desired.clone())));
    assert_eq!(Arc::strong_count(&desired), 1);
}

#[test]
fn test_get_and_update() {
    let atomic = AtomicRef::new(Some(data(10, "counter")));
    let old = atomic.get_and_update(|current| {
        current.map(|c| data(c.value * 2, &c.name))
    });
    assert_eq!(old.unwrap().value, 10);
    assert_eq!(atomic.get().unwrap().value, 20);
}

#[test]
fn test_update_and_get() {
    let atomic: AtomicRef<TestData> = AtomicRef::empty();
    let new = atomic.update_and_get(|current| match current {
        Some(c) => Some(data(c.value + 1, &c.name)),
        None => Some(data(0, "init")),
    });
    assert_eq!(new.unwrap().value, 0);
    assert_eq!(atomic.get().unwrap().name, "init");
}

#[test]
fn test_into_inner() {
    let d = data(5, "inner");
    let atomic = AtomicRef::new(Some(d.clone()));
    let inner = atomic.into_inner();
    assert!(same(&inner, &d));
    drop(inner);
    assert_eq!(Arc::strong_count(&d), 1);
}

#[test]
fn test_clone_is_independent() {
    let d1 = data(1, "d1");
    let atomic = AtomicRef::new(Some(d1.clone()));
    let cloned = atomic.clone();
    assert!(same(&cloned.get(), &d1));

    cloned.set(None);
    assert!(same(&atomic.get(), &d1));
    assert!(cloned.is_empty());
}

#[test]
fn test_debug() {
    let atomic = AtomicRef::new(Some(Arc::new(42)));
    assert_eq!(format!("{:?}", atomic), "AtomicRef { value: Some(42) }");

    let atomic: AtomicRef<i32> = AtomicRef::empty();
    assert_eq!(format!("{:?}", atomic), "AtomicRef { value: None }");
}

#[test]
fn test_drop_releases_held_reference_once() {
    let d = data(1, "drop");
    let atomic = AtomicRef::new(Some(d.clone()));
    assert_eq!(Arc::strong_count(&d), 2);
    drop(atomic);
    assert_eq!(Arc::strong_count(&d), 1);
}

struct Node {
    next: AtomicRef<Node>,
}

#[test]
fn test_self_reference_then_discard() {
    let node = Arc::new(Node {
        next: AtomicRef::empty(),
    });
    node.next.set(Some(node.clone()));
    // The cycle keeps the node alive; dropping the last outside holder
    // must neither crash nor free it.
    let weak: Weak<Node> = Arc::downgrade(&node);
    drop(node);
    let node = weak.upgrade().expect("cycle keeps the node alive");

    // Breaking the cycle releases it exactly once.
    let displaced = node.next.get_and_set(None);
    drop(displaced);
    drop(node);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_self_reference_cell_dropped_directly() {
    // The only outside holder of a self-referencing node is another cell,
    // which is then discarded.
    let outer = AtomicRef::empty();
    let node = Arc::new(Node {
        next: AtomicRef::empty(),
    });
    node.next.set(Some(node.clone()));
    outer.set(Some(node));
    drop(outer);
}

#[test]
fn test_concurrent_get_while_replacing() {
    let atomic = Arc::new(AtomicRef::new(Some(data(0, "start"))));
    let mut handles = vec![];

    for t in 0..4 {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                atomic.set(Some(data(t * 1000 + i, "writer")));
            }
        }));
    }
    for _ in 0..4 {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                let current = atomic.get().expect("never emptied");
                // Touch the payload: it must still be alive.
                assert!(current.name == "writer" || current.name == "start");
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
