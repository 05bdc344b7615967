/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Signed Integers
//!
//! Atomic signed integer cells of every width the crate supports. Each
//! width maps onto a single hardware atomic. The 64-bit cell degrades to a
//! lock-based emulation on targets without native 64-bit atomics.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::backend;

impl_atomic_integer!(
    AtomicI8,
    std::sync::atomic::AtomicI8,
    i8,
    "8-bit signed integer",
    true
);

impl_atomic_integer!(
    AtomicI16,
    std::sync::atomic::AtomicI16,
    i16,
    "16-bit signed integer",
    true
);

impl_atomic_integer!(
    AtomicI32,
    std::sync::atomic::AtomicI32,
    i32,
    "32-bit signed integer",
    true
);

impl_atomic_integer!(
    AtomicI64,
    backend::AtomicI64,
    i64,
    "64-bit signed integer",
    backend::I64_IS_LOCK_FREE
);

impl_atomic_integer!(
    AtomicIsize,
    std::sync::atomic::AtomicIsize,
    isize,
    "pointer-sized signed integer",
    true
);

/// The default atomic integer cell.
///
/// A 64-bit signed integer, the width of a C `long` on LP64 targets.
pub type AtomicInteger = AtomicI64;
