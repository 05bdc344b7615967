/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # 64-bit Storage Backend
//!
//! Selects the storage used by the 64-bit integer cell. Targets with native
//! 64-bit atomics use `std::sync::atomic::AtomicI64` directly. Other targets
//! fall back to `crossbeam_utils::atomic::AtomicCell<i64>`, which keeps the
//! same indivisibility and sequential consistency through an internal lock.
//!
//! # Author
//!
//! Haixing Hu

#[cfg(target_has_atomic = "64")]
pub(crate) use std::sync::atomic::AtomicI64;

/// Whether the 64-bit cell is backed by native lock-free instructions.
#[cfg(target_has_atomic = "64")]
pub(crate) const I64_IS_LOCK_FREE: bool = true;

#[cfg(not(target_has_atomic = "64"))]
pub(crate) use self::emulated::AtomicI64;

#[cfg(not(target_has_atomic = "64"))]
pub(crate) const I64_IS_LOCK_FREE: bool = emulated::IS_LOCK_FREE;

#[cfg(any(test, not(target_has_atomic = "64")))]
mod emulated {
    use std::sync::atomic::Ordering;

    use crossbeam_utils::atomic::AtomicCell;

    pub(crate) const IS_LOCK_FREE: bool = AtomicCell::<i64>::is_lock_free();

    /// Mirrors the subset of the `std` atomic API used by the integer
    /// macro. The ordering arguments are accepted for signature
    /// compatibility; `AtomicCell` is always sequentially consistent.
    pub(crate) struct AtomicI64(AtomicCell<i64>);

    impl AtomicI64 {
        pub(crate) const fn new(value: i64) -> Self {
            Self(AtomicCell::new(value))
        }

        pub(crate) fn load(&self, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.load()
        }

        pub(crate) fn store(&self, value: i64, _: Ordering) {
            warn_if_emulated();
            self.0.store(value);
        }

        pub(crate) fn swap(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.swap(value)
        }

        pub(crate) fn compare_exchange(
            &self,
            current: i64,
            new: i64,
            _: Ordering,
            _: Ordering,
        ) -> Result<i64, i64> {
            warn_if_emulated();
            self.0.compare_exchange(current, new)
        }

        // AtomicCell has no weak variant; the strong one never fails
        // spuriously, which satisfies the weak contract.
        pub(crate) fn compare_exchange_weak(
            &self,
            current: i64,
            new: i64,
            success: Ordering,
            failure: Ordering,
        ) -> Result<i64, i64> {
            self.compare_exchange(current, new, success, failure)
        }

        pub(crate) fn fetch_add(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.fetch_add(value)
        }

        pub(crate) fn fetch_sub(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.fetch_sub(value)
        }

        pub(crate) fn fetch_and(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.fetch_and(value)
        }

        pub(crate) fn fetch_nand(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            let mut current = self.0.load();
            loop {
                match self.0.compare_exchange(current, !(current & value)) {
                    Ok(prev) => return prev,
                    Err(actual) => current = actual,
                }
            }
        }

        pub(crate) fn fetch_or(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.fetch_or(value)
        }

        pub(crate) fn fetch_xor(&self, value: i64, _: Ordering) -> i64 {
            warn_if_emulated();
            self.0.fetch_xor(value)
        }

        pub(crate) fn into_inner(self) -> i64 {
            self.0.into_inner()
        }
    }

    #[cfg(feature = "tracing")]
    fn warn_if_emulated() {
        use std::sync::Once;

        static WARNED: Once = Once::new();
        if !IS_LOCK_FREE {
            WARNED.call_once(|| {
                tracing::warn!(
                    "64-bit atomic integer is not lock free on this target; \
                     operations are emulated"
                );
            });
        }
    }

    #[cfg(not(feature = "tracing"))]
    #[inline(always)]
    fn warn_if_emulated() {}

}
