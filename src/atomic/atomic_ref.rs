/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! Provides an atomic cell holding either nothing or a shared reference to
//! an object. Uses `Arc<T>` for thread-safe reference counting; the cell
//! shares ownership of the object with the rest of the program but never
//! owns its lifetime alone.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ptr;
use std::sync::Arc;

use arc_swap::{ArcSwapOption, Guard};
use crossbeam_utils::Backoff;

use crate::atomic::traits::{Atomic, UpdatableAtomic};

/// Atomic reference cell.
///
/// Holds `Option<Arc<T>>`, where `None` is the empty state. Every
/// operation is a single sequentially consistent step on the cell.
///
/// # Identity
///
/// Compare-and-set compares by object identity (`Arc::as_ptr`), never by
/// value. Two distinct objects with equal contents do not match. Because
/// the caller passes `expected` as a strong handle, the object it points
/// to stays alive for the duration of the call and its address cannot be
/// recycled, so identity comparison is not exposed to ABA on freed memory.
///
/// # Reclamation
///
/// Storage is delegated to `arc_swap::ArcSwapOption`, which guarantees that
/// a concurrent [`get`](Self::get) never observes an object that a
/// concurrent [`set`](Self::set) has already released. A displaced
/// reference is released exactly once: by the cell on `set`, or by the
/// caller who received it from `get_and_set`.
///
/// # Cycles
///
/// A cell may point to the object that contains it. Like any `Arc` cycle
/// this keeps the object alive until the cycle is broken, e.g. with
/// `get_and_set(None)`. Dropping such a cell never double-frees.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicRef;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let atomic_config = AtomicRef::new(Some(Arc::new(Config { timeout: 1000 })));
///
/// let current = atomic_config.get();
/// let replaced = atomic_config.compare_and_set(
///     &current,
///     Some(Arc::new(Config { timeout: 2000 })),
/// );
/// assert!(replaced);
/// assert_eq!(atomic_config.get().unwrap().timeout, 2000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRef<T> {
    inner: ArcSwapOption<T>,
}

#[inline]
fn identity<T>(value: &Option<Arc<T>>) -> *const T {
    value.as_ref().map_or(ptr::null(), Arc::as_ptr)
}

impl<T> AtomicRef<T> {
    /// Creates a new atomic reference cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial reference, or `None` for an empty cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(42)));
    /// assert_eq!(*atomic.get().unwrap(), 42);
    /// ```
    #[inline]
    pub fn new(value: Option<Arc<T>>) -> Self {
        Self {
            inner: ArcSwapOption::new(value),
        }
    }

    /// Creates an empty cell.
    #[inline]
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Atomically loads the current reference.
    ///
    /// # Returns
    ///
    /// A new strong handle to the held object, or `None` if the cell is
    /// empty. The handle keeps the object alive even if the cell is
    /// overwritten afterwards.
    #[inline]
    pub fn get(&self) -> Option<Arc<T>> {
        self.inner.load_full()
    }

    /// Atomically stores a new reference.
    ///
    /// The cell drops its hold on the previous reference. Use
    /// [`get_and_set`](Self::get_and_set) to take it over instead.
    ///
    /// # Parameters
    ///
    /// * `value` - The new reference, or `None` to empty the cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::empty();
    /// atomic.set(Some(Arc::new(100)));
    /// assert_eq!(*atomic.get().unwrap(), 100);
    /// ```
    #[inline]
    pub fn set(&self, value: Option<Arc<T>>) {
        self.inner.store(value);
    }

    /// Atomically swaps in a new reference, returning the previous one.
    ///
    /// This is how a caller retrieves a displaced reference to manage its
    /// cleanup.
    ///
    /// # Parameters
    ///
    /// * `value` - The new reference to swap in.
    ///
    /// # Returns
    ///
    /// The reference held before the swap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(10)));
    /// let old = atomic.get_and_set(Some(Arc::new(20)));
    /// assert_eq!(*old.unwrap(), 10);
    /// assert_eq!(*atomic.get().unwrap(), 20);
    /// ```
    #[inline]
    pub fn get_and_set(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.inner.swap(value)
    }

    /// Stores `desired` if the cell holds exactly `expected`.
    ///
    /// Comparison is by identity: the cell must hold the very same
    /// allocation as `expected` (or both must be `None`). On failure the
    /// cell is unchanged and `desired` is dropped.
    ///
    /// # Parameters
    ///
    /// * `expected` - The reference the cell must hold.
    /// * `desired` - The reference to store on success.
    ///
    /// # Returns
    ///
    /// `true` on success, `false` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let held = Arc::new(String::from("a"));
    /// let atomic = AtomicRef::new(Some(held.clone()));
    ///
    /// // Equal contents, different object.
    /// let lookalike = Some(Arc::new(String::from("a")));
    /// assert!(!atomic.compare_and_set(&lookalike, None));
    ///
    /// assert!(atomic.compare_and_set(&Some(held), None));
    /// assert!(atomic.is_empty());
    /// ```
    #[inline]
    pub fn compare_and_set(&self, expected: &Option<Arc<T>>, desired: Option<Arc<T>>) -> bool {
        let prev = self.inner.compare_and_swap(expected, desired);
        ptr::eq(identity(&*prev), identity(expected))
    }

    /// Weak version of compare-and-set.
    ///
    /// Allowed to fail spuriously so it can be used in retry loops. The
    /// current implementation never does, but callers must not rely on
    /// that.
    #[inline]
    pub fn weak_compare_and_set(&self, expected: &Option<Arc<T>>, desired: Option<Arc<T>>) -> bool {
        self.compare_and_set(expected, desired)
    }

    /// Compares and exchanges the reference atomically, returning the
    /// previous reference.
    ///
    /// If the cell holds `expected` (by identity), stores `desired`.
    /// Either way the reference observed before the operation is returned,
    /// so the exchange succeeded iff it is identical to `expected`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(10)));
    /// let current = atomic.get();
    ///
    /// let prev = atomic.compare_and_exchange(&current, Some(Arc::new(20)));
    /// assert!(Arc::ptr_eq(prev.as_ref().unwrap(), current.as_ref().unwrap()));
    /// assert_eq!(*atomic.get().unwrap(), 20);
    /// ```
    #[inline]
    pub fn compare_and_exchange(
        &self,
        expected: &Option<Arc<T>>,
        desired: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        Guard::into_inner(self.inner.compare_and_swap(expected, desired))
    }

    /// Updates the reference using a function, returning the old
    /// reference.
    ///
    /// Internally uses a CAS loop with backoff, so `f` may be called more
    /// than once under contention.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(10)));
    /// let old = atomic.get_and_update(|x| x.map(|v| Arc::new(*v * 2)));
    /// assert_eq!(*old.unwrap(), 10);
    /// assert_eq!(*atomic.get().unwrap(), 20);
    /// ```
    pub fn get_and_update<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        let backoff = Backoff::new();
        let mut current = self.get();
        loop {
            let new = f(current.clone());
            let prev = self.compare_and_exchange(&current, new);
            if ptr::eq(identity(&prev), identity(&current)) {
                return prev;
            }
            current = prev;
            backoff.spin();
        }
    }

    /// Updates the reference using a function, returning the new
    /// reference.
    pub fn update_and_get<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        let backoff = Backoff::new();
        let mut current = self.get();
        loop {
            let new = f(current.clone());
            let prev = self.compare_and_exchange(&current, new.clone());
            if ptr::eq(identity(&prev), identity(&current)) {
                return new;
            }
            current = prev;
            backoff.spin();
        }
    }

    /// Returns `true` if the cell currently holds no reference.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.load().is_none()
    }

    /// Consumes the cell and returns the held reference without touching
    /// its reference count.
    #[inline]
    pub fn into_inner(self) -> Option<Arc<T>> {
        self.inner.into_inner()
    }
}

impl<T> Atomic for AtomicRef<T> {
    type Value = Option<Arc<T>>;

    #[inline]
    fn get(&self) -> Option<Arc<T>> {
        self.get()
    }

    #[inline]
    fn set(&self, value: Option<Arc<T>>) {
        self.set(value);
    }

    #[inline]
    fn get_and_set(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.get_and_set(value)
    }

    #[inline]
    fn compare_and_set(&self, expected: Option<Arc<T>>, desired: Option<Arc<T>>) -> bool {
        self.compare_and_set(&expected, desired)
    }

    #[inline]
    fn weak_compare_and_set(&self, expected: Option<Arc<T>>, desired: Option<Arc<T>>) -> bool {
        self.weak_compare_and_set(&expected, desired)
    }

    #[inline]
    fn compare_and_exchange(
        &self,
        expected: Option<Arc<T>>,
        desired: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        self.compare_and_exchange(&expected, desired)
    }
}

impl<T> UpdatableAtomic for AtomicRef<T> {
    #[inline]
    fn get_and_update<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        self.get_and_update(f)
    }

    #[inline]
    fn update_and_get<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        self.update_and_get(f)
    }
}

impl<T> Default for AtomicRef<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Arc<T>> for AtomicRef<T> {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T> From<Option<Arc<T>>> for AtomicRef<T> {
    #[inline]
    fn from(value: Option<Arc<T>>) -> Self {
        Self::new(value)
    }
}

impl<T> Clone for AtomicRef<T> {
    /// Clones the atomic reference.
    ///
    /// Creates a new cell that initially holds the same object as the
    /// original; subsequent operations on the two cells are independent.
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRef")
            .field("value", &self.get())
            .finish()
    }
}
