//! # intarray
//!
//! This crate provides a resizable array of integers. Elements live in one contiguous
//! store whose capacity doubles whenever an append would fill it, so appends run in
//! amortized constant time. Removal shifts the tail left to keep elements in order,
//! and the array can be reversed, searched and sorted in place.
//!
//! ```rust
//! use intarray::IntArray;
//!
//! let mut array = IntArray::with_capacity(50).unwrap();
//! for value in [3, 7, 6, -2] {
//!     array.add(value);
//! }
//! array.sort();
//! assert_eq!(array.to_string(), "[-2, 3, 6, 7]");
//! ```

pub mod dynamic_array;
pub mod error;

pub use dynamic_array::{Element, IntArray, Iter, DEFAULT_CAPACITY};
pub use error::{ArrayError, Result};
