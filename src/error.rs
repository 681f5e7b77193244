//! Error type shared by the fallible [`IntArray`](crate::dynamic_array::IntArray) operations.

use thiserror::Error;

/// Errors reported by [`IntArray`](crate::dynamic_array::IntArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A negative initial capacity was requested.
    #[error("illegal capacity: {0}")]
    InvalidArgument(isize),
    /// An index at or past the logical length was used.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ArrayError>;
