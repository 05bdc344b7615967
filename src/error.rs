/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Error types reported at the call boundary of the atomic cells.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Error returned when a value cannot be represented by the width of an
/// atomic integer cell.
///
/// Only the checked entry points (`try_new`, `try_set`) produce this error.
/// The cell is never modified when it is returned.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicI8;
///
/// let err = AtomicI8::try_new(300).unwrap_err();
/// assert_eq!(err.value(), 300);
/// assert_eq!(err.to_string(), "value 300 is out of range for i8 [-128, 127]");
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {value} is out of range for {type_name} [{min}, {max}]")]
pub struct OutOfRangeError {
    value: i128,
    type_name: &'static str,
    min: i128,
    max: i128,
}

impl OutOfRangeError {
    pub(crate) fn new(value: i128, type_name: &'static str, min: i128, max: i128) -> Self {
        Self {
            value,
            type_name,
            min,
            max,
        }
    }

    /// The rejected value.
    #[inline]
    pub fn value(&self) -> i128 {
        self.value
    }

    /// The name of the primitive type the value was converted to.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The smallest representable value.
    #[inline]
    pub fn min(&self) -> i128 {
        self.min
    }

    /// The largest representable value.
    #[inline]
    pub fn max(&self) -> i128 {
        self.max
    }
}
