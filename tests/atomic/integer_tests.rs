/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::{
    AtomicI64,
    AtomicInteger,
};

test_atomic_integer!(AtomicI8, i8, atomic_i8_tests);
test_atomic_integer!(AtomicI16, i16, atomic_i16_tests);
test_atomic_integer!(AtomicI32, i32, atomic_i32_tests);
test_atomic_integer!(AtomicI64, i64, atomic_i64_tests);
test_atomic_integer!(AtomicIsize, isize, atomic_isize_tests);

#[test]
fn test_atomic_integer_is_64_bit() {
    let atomic: AtomicI64 = AtomicInteger::new(i64::MAX);
    assert_eq!(atomic.get(), i64::MAX);
    assert_eq!(std::mem::size_of::<AtomicInteger>(), 8);
}

#[test]
fn test_atomic_integer_defaults_to_zero() {
    assert_eq!(AtomicInteger::default().get(), 0);
}

#[test]
fn test_narrow_widths_are_lock_free() {
    assert!(prism3_atomic_cell::AtomicI8::is_lock_free());
    assert!(prism3_atomic_cell::AtomicI32::is_lock_free());
    assert!(prism3_atomic_cell::AtomicIsize::is_lock_free());
}

#[cfg(target_has_atomic = "64")]
#[test]
fn test_64_bit_lock_free_on_native_targets() {
    assert!(AtomicInteger::is_lock_free());
}
