/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate atomic integer cells with consistent
//! implementations for every supported width.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer cells.
///
/// This macro generates a complete atomic integer cell with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the cell type (e.g., `AtomicI32`)
/// * `$inner_type` - The storage type exposing the `std` atomic API (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
/// * `$lock_free` - Whether the storage type is natively lock free on the
///   current target
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr, $lock_free:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " cell.")]
        ///
        /// All methods are thread-safe and can be called through a shared
        /// reference from any number of threads.
        ///
        /// # Memory Ordering
        ///
        /// Every operation uses `SeqCst`. All operations on one cell form
        /// a single total order consistent with each thread's program
        /// order, and every read observes the latest write before it in
        /// that order. No ordering is synthesized between different cells.
        ///
        /// # Overflow
        ///
        /// Arithmetic wraps around using two's-complement modular
        /// arithmetic; no overflow is ever reported.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..10 {
        ///             counter.add_and_get(1);
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.get(), 100);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic integer cell.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(42);")]
            /// assert_eq!(atomic.get(), 42);
            /// ```
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Creates a new cell from a value of a wider integer domain.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Returns
            ///
            /// The new cell, or `OutOfRangeError` if `value` does not fit
            #[doc = concat!("in `", stringify!($value_type), "`.")]
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::try_new(42).unwrap();")]
            /// assert_eq!(atomic.get(), 42);
            #[doc = concat!("assert!(", stringify!($name), "::try_new(i128::MAX).is_err());")]
            /// ```
            #[inline]
            pub fn try_new(value: i128) -> Result<Self, crate::error::OutOfRangeError> {
                Self::narrow(value).map(Self::new)
            }

            /// Atomically loads the current value.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn get(&self) -> $value_type {
                self.inner.load(Ordering::SeqCst)
            }

            /// Atomically stores a new value, discarding the previous one.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0);")]
            /// atomic.set(42);
            /// assert_eq!(atomic.get(), 42);
            /// ```
            #[inline]
            pub fn set(&self, value: $value_type) {
                self.inner.store(value, Ordering::SeqCst);
            }

            /// Stores a value from a wider integer domain.
            ///
            /// The cell is left untouched when `value` is out of range.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            ///
            /// # Returns
            ///
            /// `Ok(())` once stored, or `OutOfRangeError` if `value` does
            #[doc = concat!("not fit in `", stringify!($value_type), "`.")]
            #[inline]
            pub fn try_set(&self, value: i128) -> Result<(), crate::error::OutOfRangeError> {
                let value = Self::narrow(value)?;
                self.set(value);
                Ok(())
            }

            /// Atomically replaces the value, returning the previous one.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to swap in.
            ///
            /// # Returns
            ///
            /// The old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.get_and_set(20), 10);
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn get_and_set(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::SeqCst)
            }

            /// Stores `desired` if the current value equals `expected`.
            ///
            /// The comparison and the store happen as one indivisible
            /// step; on failure the cell is left unchanged.
            ///
            /// # Parameters
            ///
            /// * `expected` - The value the cell must hold.
            /// * `desired` - The value to store on success.
            ///
            /// # Returns
            ///
            /// `true` on success, `false` if the cell held another value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(1);")]
            /// assert!(atomic.compare_and_set(1, 99));
            /// assert_eq!(atomic.get(), 99);
            /// assert!(!atomic.compare_and_set(1, 100));
            /// assert_eq!(atomic.get(), 99);
            /// ```
            #[inline]
            pub fn compare_and_set(&self, expected: $value_type, desired: $value_type) -> bool {
                self.inner
                    .compare_exchange(expected, desired, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
            }

            /// Weak version of compare-and-set.
            ///
            /// May spuriously fail even when the comparison succeeds.
            /// Should be used in a loop.
            ///
            /// # Parameters
            ///
            /// * `expected` - The value the cell must hold.
            /// * `desired` - The value to store on success.
            ///
            /// # Returns
            ///
            /// `true` on success, `false` on mismatch or spurious failure.
            #[inline]
            pub fn weak_compare_and_set(&self, expected: $value_type, desired: $value_type) -> bool {
                self.inner
                    .compare_exchange_weak(expected, desired, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
            }

            /// Compares and exchanges the value atomically, returning the
            /// previous value.
            ///
            /// If the current value equals `expected`, stores `desired`.
            /// Either way the value observed before the operation is
            /// returned, so the exchange succeeded iff it equals
            /// `expected`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.compare_and_exchange(10, 20), 10);
            /// assert_eq!(atomic.compare_and_exchange(10, 30), 20);
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn compare_and_exchange(
                &self,
                expected: $value_type,
                desired: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    expected,
                    desired,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Adds `delta` (wrapping), returning the old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(", stringify!($value_type), "::MAX);")]
            #[doc = concat!("assert_eq!(atomic.get_and_add(1), ", stringify!($value_type), "::MAX);")]
            #[doc = concat!("assert_eq!(atomic.get(), ", stringify!($value_type), "::MIN);")]
            /// ```
            #[inline]
            pub fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, Ordering::SeqCst)
            }

            /// Adds `delta` (wrapping), returning the new value.
            #[inline]
            pub fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta).wrapping_add(delta)
            }

            /// Subtracts `delta` (wrapping), returning the old value.
            #[inline]
            pub fn get_and_sub(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, Ordering::SeqCst)
            }

            /// Subtracts `delta` (wrapping), returning the new value.
            #[inline]
            pub fn sub_and_get(&self, delta: $value_type) -> $value_type {
                self.get_and_sub(delta).wrapping_sub(delta)
            }

            /// Performs bitwise AND, returning the old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0b1111);")]
            /// assert_eq!(atomic.get_and_and(0b1100), 0b1111);
            /// assert_eq!(atomic.get(), 0b1100);
            /// ```
            #[inline]
            pub fn get_and_and(&self, operand: $value_type) -> $value_type {
                self.inner.fetch_and(operand, Ordering::SeqCst)
            }

            /// Performs bitwise AND, returning the new value.
            #[inline]
            pub fn and_and_get(&self, operand: $value_type) -> $value_type {
                self.get_and_and(operand) & operand
            }

            /// Performs bitwise OR, returning the old value.
            #[inline]
            pub fn get_and_or(&self, operand: $value_type) -> $value_type {
                self.inner.fetch_or(operand, Ordering::SeqCst)
            }

            /// Performs bitwise OR, returning the new value.
            #[inline]
            pub fn or_and_get(&self, operand: $value_type) -> $value_type {
                self.get_and_or(operand) | operand
            }

            /// Performs bitwise XOR, returning the old value.
            #[inline]
            pub fn get_and_xor(&self, operand: $value_type) -> $value_type {
                self.inner.fetch_xor(operand, Ordering::SeqCst)
            }

            /// Performs bitwise XOR, returning the new value.
            #[inline]
            pub fn xor_and_get(&self, operand: $value_type) -> $value_type {
                self.get_and_xor(operand) ^ operand
            }

            /// Performs bitwise NAND, returning the old value.
            ///
            /// The stored result is `!(current & operand)`, the complement
            /// of the AND. It is not `!current & operand`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(1);")]
            /// assert_eq!(atomic.get_and_nand(2), 1);
            /// assert_eq!(atomic.get(), !(1 & 2));
            /// assert_eq!(atomic.get(), -1);
            /// ```
            #[inline]
            pub fn get_and_nand(&self, operand: $value_type) -> $value_type {
                self.inner.fetch_nand(operand, Ordering::SeqCst)
            }

            /// Performs bitwise NAND, returning the new value
            /// `!(previous & operand)`.
            #[inline]
            pub fn nand_and_get(&self, operand: $value_type) -> $value_type {
                !(self.get_and_nand(operand) & operand)
            }

            /// Increments the value by 1, returning the old value.
            #[inline]
            pub fn get_and_increment(&self) -> $value_type {
                self.get_and_add(1)
            }

            /// Increments the value by 1, returning the new value.
            #[inline]
            pub fn increment_and_get(&self) -> $value_type {
                self.add_and_get(1)
            }

            /// Decrements the value by 1, returning the old value.
            #[inline]
            pub fn get_and_decrement(&self) -> $value_type {
                self.get_and_sub(1)
            }

            /// Decrements the value by 1, returning the new value.
            #[inline]
            pub fn decrement_and_get(&self) -> $value_type {
                self.sub_and_get(1)
            }

            /// Updates the value using a function, returning the old value.
            ///
            /// Internally uses a CAS loop with backoff until the update
            /// succeeds, so `f` may be called more than once.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The old value before the update.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_cell::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// let old = atomic.get_and_update(|x| x * 2);
            /// assert_eq!(old, 10);
            /// assert_eq!(atomic.get(), 20);
            /// ```
            #[inline]
            pub fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                let backoff = ::crossbeam_utils::Backoff::new();
                let mut current = self.get();
                loop {
                    let new = f(current);
                    match self.inner.compare_exchange_weak(
                        current,
                        new,
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    ) {
                        Ok(prev) => return prev,
                        Err(actual) => {
                            current = actual;
                            backoff.spin();
                        }
                    }
                }
            }

            /// Updates the value using a function, returning the new value.
            ///
            /// # Parameters
            ///
            /// * `f` - A function that takes the current value and returns
            ///   the new value.
            ///
            /// # Returns
            ///
            /// The new value after the update.
            #[inline]
            pub fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                let backoff = ::crossbeam_utils::Backoff::new();
                let mut current = self.get();
                loop {
                    let new = f(current);
                    match self.inner.compare_exchange_weak(
                        current,
                        new,
                        Ordering::SeqCst,
                        Ordering::SeqCst,
                    ) {
                        Ok(_) => return new,
                        Err(actual) => {
                            current = actual;
                            backoff.spin();
                        }
                    }
                }
            }

            /// Returns whether this cell is backed by native lock-free
            /// instructions on the current target.
            ///
            /// When it is not, operations are emulated with an internal
            /// lock that preserves the same contract at a higher cost.
            #[inline]
            pub const fn is_lock_free() -> bool {
                $lock_free
            }

            /// Consumes the cell and returns the contained value.
            #[inline]
            pub fn into_inner(self) -> $value_type {
                self.inner.into_inner()
            }

            fn narrow(value: i128) -> Result<$value_type, crate::error::OutOfRangeError> {
                <$value_type>::try_from(value).map_err(|_| {
                    let err = crate::error::OutOfRangeError::new(
                        value,
                        stringify!($value_type),
                        <$value_type>::MIN as i128,
                        <$value_type>::MAX as i128,
                    );
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%err, "rejected out-of-range value");
                    err
                })
            }
        }

        // Trait implementations forward to the inherent methods so that
        // both direct calls and generic trait-based code work.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn get(&self) -> $value_type {
                self.get()
            }

            #[inline]
            fn set(&self, value: $value_type) {
                self.set(value);
            }

            #[inline]
            fn get_and_set(&self, value: $value_type) -> $value_type {
                self.get_and_set(value)
            }

            #[inline]
            fn compare_and_set(&self, expected: $value_type, desired: $value_type) -> bool {
                self.compare_and_set(expected, desired)
            }

            #[inline]
            fn weak_compare_and_set(&self, expected: $value_type, desired: $value_type) -> bool {
                self.weak_compare_and_set(expected, desired)
            }

            #[inline]
            fn compare_and_exchange(
                &self,
                expected: $value_type,
                desired: $value_type,
            ) -> $value_type {
                self.compare_and_exchange(expected, desired)
            }
        }

        impl crate::atomic::traits::UpdatableAtomic for $name {
            #[inline]
            fn get_and_update<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.get_and_update(f)
            }

            #[inline]
            fn update_and_get<F>(&self, f: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.update_and_get(f)
            }
        }

        impl crate::atomic::traits::AtomicNumber for $name {
            #[inline]
            fn get_and_add(&self, delta: $value_type) -> $value_type {
                self.get_and_add(delta)
            }

            #[inline]
            fn add_and_get(&self, delta: $value_type) -> $value_type {
                self.add_and_get(delta)
            }

            #[inline]
            fn get_and_sub(&self, delta: $value_type) -> $value_type {
                self.get_and_sub(delta)
            }

            #[inline]
            fn sub_and_get(&self, delta: $value_type) -> $value_type {
                self.sub_and_get(delta)
            }

            #[inline]
            fn get_and_and(&self, operand: $value_type) -> $value_type {
                self.get_and_and(operand)
            }

            #[inline]
            fn and_and_get(&self, operand: $value_type) -> $value_type {
                self.and_and_get(operand)
            }

            #[inline]
            fn get_and_or(&self, operand: $value_type) -> $value_type {
                self.get_and_or(operand)
            }

            #[inline]
            fn or_and_get(&self, operand: $value_type) -> $value_type {
                self.or_and_get(operand)
            }

            #[inline]
            fn get_and_xor(&self, operand: $value_type) -> $value_type {
                self.get_and_xor(operand)
            }

            #[inline]
            fn xor_and_get(&self, operand: $value_type) -> $value_type {
                self.xor_and_get(operand)
            }

            #[inline]
            fn get_and_nand(&self, operand: $value_type) -> $value_type {
                self.get_and_nand(operand)
            }

            #[inline]
            fn nand_and_get(&self, operand: $value_type) -> $value_type {
                self.nand_and_get(operand)
            }

            #[inline]
            fn get_and_increment(&self) -> $value_type {
                self.get_and_increment()
            }

            #[inline]
            fn increment_and_get(&self) -> $value_type {
                self.increment_and_get()
            }

            #[inline]
            fn get_and_decrement(&self) -> $value_type {
                self.get_and_decrement()
            }

            #[inline]
            fn decrement_and_get(&self) -> $value_type {
                self.decrement_and_get()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.get())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
