/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic cells, providing a unified interface
//! for generic code that works over integer and reference cells alike.
//!
//! Every operation behind these traits is a single sequentially consistent
//! step on its cell.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides basic atomic operations including get, set, swap, and
/// compare-and-set.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the cell.
    type Value;

    /// Atomically loads and returns the current value.
    fn get(&self) -> Self::Value;

    /// Atomically stores a new value, discarding the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    fn set(&self, value: Self::Value);

    /// Atomically replaces the value and returns the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The value held before the swap.
    fn get_and_set(&self, value: Self::Value) -> Self::Value;

    /// Stores `desired` if the current value matches `expected`.
    ///
    /// Integer cells compare by value; reference cells compare by identity.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the cell must hold for the update to apply.
    /// * `desired` - The value to store on success.
    ///
    /// # Returns
    ///
    /// `true` if the cell held `expected` and now holds `desired`, `false`
    /// if the cell was left unchanged.
    fn compare_and_set(&self, expected: Self::Value, desired: Self::Value) -> bool;

    /// Weak version of [`compare_and_set`](Atomic::compare_and_set).
    ///
    /// May spuriously return `false` even when the comparison succeeds.
    /// Should be used in a loop.
    fn weak_compare_and_set(&self, expected: Self::Value, desired: Self::Value) -> bool;

    /// Compares and exchanges the value atomically, returning the value
    /// held before the operation.
    ///
    /// The exchange succeeded iff the returned value matches `expected`.
    fn compare_and_exchange(&self, expected: Self::Value, desired: Self::Value) -> Self::Value;
}

/// Trait for atomic cells that support functional updates.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value using a function, returning the old value.
    ///
    /// Internally uses a CAS loop until the update succeeds, so `f` may be
    /// called more than once under contention.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;
}

/// Trait for atomic integer cells.
///
/// Each operation comes in two forms: `get_and_<op>` returns the value
/// before the update and `<op>_and_get` returns the value after it. Both
/// forms perform the same single indivisible update. Arithmetic wraps on
/// overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: UpdatableAtomic {
    /// Adds `delta`, returning the old value.
    fn get_and_add(&self, delta: Self::Value) -> Self::Value;

    /// Adds `delta`, returning the new value.
    fn add_and_get(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, returning the old value.
    fn get_and_sub(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, returning the new value.
    fn sub_and_get(&self, delta: Self::Value) -> Self::Value;

    /// Bitwise AND with `operand`, returning the old value.
    fn get_and_and(&self, operand: Self::Value) -> Self::Value;

    /// Bitwise AND with `operand`, returning the new value.
    fn and_and_get(&self, operand: Self::Value) -> Self::Value;

    /// Bitwise OR with `operand`, returning the old value.
    fn get_and_or(&self, operand: Self::Value) -> Self::Value;

    /// Bitwise OR with `operand`, returning the new value.
    fn or_and_get(&self, operand: Self::Value) -> Self::Value;

    /// Bitwise XOR with `operand`, returning the old value.
    fn get_and_xor(&self, operand: Self::Value) -> Self::Value;

    /// Bitwise XOR with `operand`, returning the new value.
    fn xor_and_get(&self, operand: Self::Value) -> Self::Value;

    /// Stores `!(current & operand)`, returning the old value.
    fn get_and_nand(&self, operand: Self::Value) -> Self::Value;

    /// Stores `!(current & operand)`, returning the new value.
    fn nand_and_get(&self, operand: Self::Value) -> Self::Value;

    /// Increments by 1, returning the old value.
    fn get_and_increment(&self) -> Self::Value;

    /// Increments by 1, returning the new value.
    fn increment_and_get(&self) -> Self::Value;

    /// Decrements by 1, returning the old value.
    fn get_and_decrement(&self) -> Self::Value;

    /// Decrements by 1, returning the new value.
    fn decrement_and_get(&self) -> Self::Value;
}
