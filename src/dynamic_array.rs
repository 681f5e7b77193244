//! # IntArray
//!
//! This module implements a dynamic array of [`Element`] values backed by a single
//! contiguous store.
//!
//! The array tracks a logical length separately from its capacity. Appending grows the
//! store by doubling once the next append would fill it, and removing an element shifts
//! the tail left by one so the remaining elements keep their order.
//!
//! ## Example
//!
//! ```rust
//! use intarray::dynamic_array::*;
//!
//! // Create an array with an initial capacity of 4.
//! let mut array = IntArray::with_capacity(4).unwrap();
//!
//! array.add(10);
//! array.add(20);
//! array.add(30);
//! assert_eq!(array.get(1), Ok(20));
//!
//! // Remove by value and by index.
//! assert!(array.remove(10));
//! assert_eq!(array.remove_at(0), Ok(20));
//! assert_eq!(array.to_string(), "[30]");
//!
//! // After many appends the array grows automatically.
//! for i in 0..100 {
//!     array.add(i);
//! }
//! assert!(array.capacity() >= 101);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{ArrayError, Result};

/// The numeric type stored in an [`IntArray`].
pub type Element = i64;

/// Capacity used by [`IntArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A resizable array of integers.
///
/// Slots `[0, len)` of the store hold live elements. Slots past `len` are filler and
/// are never observable through the safe API.
///
/// `capacity` is bookkeeping rather than the physical store size: every
/// [`remove_at`](Self::remove_at) lowers it by one while the store keeps its size, and
/// the store is resized to match it on the next growth.
#[derive(Clone)]
pub struct IntArray {
    elements: Vec<Element>,
    len: usize,
    capacity: usize,
}

impl IntArray {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is negative. Nothing is
    /// allocated in that case.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| ArrayError::InvalidArgument(capacity))?;
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        Self { elements: vec![0; capacity], len: 0, capacity }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity bookkeeping value.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<Element> {
        self.check_index(index)?;
        Ok(self.elements[index])
    }

    /// Overwrites the element at `index` with `value`.
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        self.check_index(index)?;
        self.elements[index] = value;
        Ok(())
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). The returned value is only
    /// meaningful until the next call that mutates the array.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> Element {
        *self.elements.get_unchecked(index)
    }

    /// Returns a mutable reference to the slot at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Element {
        self.elements.get_unchecked_mut(index)
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements[..self.len]
    }

    /// Appends `value` as the new last element.
    ///
    /// The store grows before the write whenever `len + 1` reaches the capacity, so this
    /// operation is amortized constant-time.
    pub fn add(&mut self, value: Element) {
        if self.len + 1 >= self.capacity {
            self.grow();
        }
        self.elements[self.len] = value;
        self.len += 1;
    }

    /// Doubles the capacity (or sets it to 1 when it is 0) and resizes the store to match.
    fn grow(&mut self) {
        self.capacity = if self.capacity == 0 { 1 } else { self.capacity * 2 };
        // May truncate slots left over from removals; live elements always fit.
        self.elements.resize(self.capacity, 0);
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Every element after `index` moves one position left. Both the length and the
    /// capacity drop by one. This takes O(len - index) time.
    pub fn remove_at(&mut self, index: usize) -> Result<Element> {
        self.check_index(index)?;
        let removed = self.elements[index];
        self.elements.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.capacity -= 1;
        Ok(removed)
    }

    /// Removes the first occurrence of `value`.
    ///
    /// Returns `false` and leaves the array untouched when `value` is absent.
    pub fn remove(&mut self, value: Element) -> bool {
        match self.position(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Reverses the live elements in place.
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            self.elements.swap(i, len - 1 - i);
        }
    }

    /// Returns the index of the first element equal to `key`.
    ///
    /// Despite the name this is a linear scan from index 0. It works on unsorted arrays
    /// and, on sorted arrays with duplicates, always reports the first match.
    pub fn binary_search(&self, key: Element) -> Option<usize> {
        self.position(key)
    }

    pub fn contains(&self, value: Element) -> bool {
        self.position(value).is_some()
    }

    /// Sorts the live elements in ascending order.
    ///
    /// Spare slots are discarded, leaving the capacity equal to the length.
    pub fn sort(&mut self) {
        self.elements.truncate(self.len);
        self.elements.shrink_to_fit();
        self.elements.sort_unstable();
        self.capacity = self.len;
    }

    /// Returns an iterator over the live elements in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { array: self, front: 0, back: self.len }
    }

    fn position(&self, value: Element) -> Option<usize> {
        self.as_slice().iter().position(|&e| e == value)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange { index, len: self.len })
        }
    }
}

impl Default for IntArray {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for IntArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntArray {}

impl fmt::Debug for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntArray")
            .field("elements", &self.as_slice())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl fmt::Display for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl Extend<Element> for IntArray {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<Element> for IntArray {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a> IntoIterator for &'a IntArray {
    type Item = Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A forward iterator over the live elements of an [`IntArray`].
///
/// Each value is read from the store when it is yielded.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    array: &'a IntArray,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.front < self.back {
            let value = self.array.elements[self.front];
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Element> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.array.elements[self.back])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
