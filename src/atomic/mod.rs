/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! Provides atomic storage cells that can be shared across threads without
//! external locking: signed integer cells with read-modify-write
//! arithmetic and bitwise operations, and a reference cell holding an
//! optional `Arc<T>`.
//!
//! # Features
//!
//! - One fixed, conservative memory ordering (`SeqCst`) for every operation
//! - JDK-style `get_and_<op>` / `<op>_and_get` operation pairs
//! - Identity-based compare-and-set for references
//! - Lock-based fallback for 64-bit cells on targets without native
//!   64-bit atomics
//!
//! # Author
//!
//! Haixing Hu

mod atomic_integer_macro;
mod atomic_integer;
mod atomic_ref;
mod backend;
mod traits;

pub use atomic_integer::{
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicInteger,
    AtomicIsize,
};
pub use atomic_ref::AtomicRef;
pub use traits::{
    Atomic,
    AtomicNumber,
    UpdatableAtomic,
};
