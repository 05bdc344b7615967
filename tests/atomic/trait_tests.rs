/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::{
    Atomic,
    AtomicI16,
    AtomicI32,
    AtomicInteger,
    AtomicNumber,
    AtomicRef,
    UpdatableAtomic,
};
use std::sync::Arc;

// Generic code over the integer surface works for every width
#[test]
fn test_atomic_trait_integers() {
    fn exercise<T: Atomic<Value = i32>>(atomic: &T) {
        atomic.set(42);
        assert_eq!(atomic.get(), 42);
        assert_eq!(atomic.get_and_set(100), 42);
        assert_eq!(atomic.get(), 100);

        assert!(atomic.compare_and_set(100, 200));
        assert!(!atomic.compare_and_set(100, 300));
        assert_eq!(atomic.get(), 200);

        let prev = atomic.compare_and_exchange(200, 300);
        assert_eq!(prev, 200);
        assert_eq!(atomic.get(), 300);
    }

    exercise(&AtomicI32::new(0));
}

#[test]
fn test_atomic_number_trait() {
    fn total<T>(atomic: &T, deltas: &[i16]) -> i16
    where
        T: AtomicNumber<Value = i16>,
    {
        for delta in deltas {
            atomic.get_and_add(*delta);
        }
        atomic.get()
    }

    let atomic = AtomicI16::new(0);
    assert_eq!(total(&atomic, &[1, 2, 3, -4]), 2);
    assert_eq!(atomic.xor_and_get(0b11), 1);
    assert_eq!(atomic.get_and_nand(1), 1);
    assert_eq!(atomic.get(), !1);
}

#[test]
fn test_updatable_atomic_trait() {
    fn double<T: UpdatableAtomic<Value = i64>>(atomic: &T) -> i64 {
        atomic.update_and_get(|x| x * 2)
    }

    let atomic = AtomicInteger::new(21);
    assert_eq!(double(&atomic), 42);
}

// The same trait drives the reference cell, with identity semantics
#[test]
fn test_atomic_trait_ref() {
    fn exercise<T: Atomic<Value = Option<Arc<i32>>>>(atomic: &T) {
        let first = Arc::new(42);
        atomic.set(Some(first.clone()));
        assert_eq!(*atomic.get().unwrap(), 42);

        let old = atomic.get_and_set(Some(Arc::new(100)));
        assert!(Arc::ptr_eq(old.as_ref().unwrap(), &first));

        // Equal value, different object
        assert!(!atomic.compare_and_set(Some(Arc::new(100)), None));
        assert!(atomic.compare_and_set(atomic.get(), None));
        assert!(atomic.get().is_none());
    }

    exercise(&AtomicRef::<i32>::empty());
}

#[test]
fn test_updatable_atomic_trait_ref() {
    fn bump<T: UpdatableAtomic<Value = Option<Arc<u32>>>>(atomic: &T) -> Option<Arc<u32>> {
        atomic.get_and_update(|current| Some(Arc::new(current.map_or(1, |v| *v + 1))))
    }

    let atomic = AtomicRef::<u32>::empty();
    assert!(bump(&atomic).is_none());
    assert_eq!(*bump(&atomic).unwrap(), 1);
    assert_eq!(*atomic.get().unwrap(), 2);
}

#[test]
fn test_cells_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<AtomicInteger>();
    assert_send_sync::<AtomicI32>();
    assert_send_sync::<AtomicRef<String>>();
}
