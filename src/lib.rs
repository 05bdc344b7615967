/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-cell
//!
//! Atomically updatable storage cells usable from multi-threaded code
//! without external locking, with a JDK-like API.
//!
//! ## Design Goals
//!
//! - **Indivisibility**: every operation is a single atomic step; no torn
//!   reads and no lost updates
//! - **Sequential Consistency**: every operation on a cell uses `SeqCst`,
//!   so all operations on one cell form a single total order
//! - **Identity Semantics**: reference compare-and-set matches the exact
//!   object, never an equal-looking one
//! - **Safe Reclamation**: a reference displaced from a cell is released
//!   exactly once, and never while a concurrent reader still needs it
//!
//! ## Features
//!
//! - Integer cells: `AtomicI8`, `AtomicI16`, `AtomicI32`, `AtomicI64`,
//!   `AtomicIsize`, and the default `AtomicInteger` (64-bit)
//! - Reference cell: `AtomicRef<T>` holding `Option<Arc<T>>`
//! - Checked construction from wider integers via `try_new` / `try_set`
//!
//! ## Cargo Features
//!
//! - `tracing` (default): emits a warning when the 64-bit cell falls back
//!   to a lock-based emulation, and debug events for rejected inputs.
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_cell::{AtomicInteger, AtomicRef};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicInteger::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.add_and_get(1);
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.get(), 1000);
//!
//! let slot: AtomicRef<String> = AtomicRef::empty();
//! slot.set(Some(Arc::new("ready".to_string())));
//! assert_eq!(slot.get().as_deref().map(String::as_str), Some("ready"));
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod error;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicInteger,
    AtomicIsize,
    AtomicNumber,
    AtomicRef,
    UpdatableAtomic,
};
pub use error::OutOfRangeError;
