// SPDX-License-Identifier: Apache-2.0

//! Owning, densely packed, resizable sequence.
//!
//! Backs the children of JSON arrays and the parallel key/value lists of JSON
//! objects. Length changes follow one policy: a resize keeps the overlapping
//! prefix, and any resize that lands at or below zero elements clamps to an
//! empty array and releases the backing storage.

use alloc::vec::Vec;

/// Errors returned by [`DynArray`] element access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynArrayError {
    /// Index outside `[0, length)`.
    OutOfRange { index: usize, length: usize },
    /// `pop` on an array with no elements.
    Empty,
}

impl core::fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DynArrayError::OutOfRange { index, length } => {
                write!(f, "index {index} out of range (length={length})")
            }
            DynArrayError::Empty => f.write_str("pop from empty array"),
        }
    }
}

impl core::error::Error for DynArrayError {}

/// A growable array of `T`.
///
/// `push` grows storage geometrically; every other length change is exact.
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    /// An empty array with no backing storage.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether backing storage is currently allocated.
    ///
    /// Always false for zero-sized element types.
    pub fn has_storage(&self) -> bool {
        core::mem::size_of::<T>() != 0 && self.items.capacity() != 0
    }

    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        let length = self.items.len();
        self.items
            .get(index)
            .ok_or(DynArrayError::OutOfRange { index, length })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let length = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(DynArrayError::OutOfRange { index, length })
    }

    /// Overwrites the element at `index`, dropping the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends `value` as the new last element.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T, DynArrayError> {
        let value = self.items.pop().ok_or(DynArrayError::Empty)?;
        if self.items.is_empty() {
            self.release();
        }
        Ok(value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn release(&mut self) {
        self.items = Vec::new();
    }

    fn truncate_to(&mut self, new_length: usize) {
        if new_length == 0 {
            self.release();
        } else {
            self.items.truncate(new_length);
        }
    }
}

impl<T: Default> DynArray<T> {
    /// An array of `initial_length` default-valued elements.
    ///
    /// A zero length allocates nothing.
    pub fn make(initial_length: usize) -> Self {
        let mut array = Self::new();
        array.set_length(initial_length);
        array
    }

    /// Resizes by a signed delta.
    ///
    /// New slots hold `T::default()`. Shrinking past zero clamps to an empty
    /// array with no storage.
    pub fn grow(&mut self, by: isize) {
        let length = self.items.len();
        let target = if by < 0 {
            length.saturating_sub(by.unsigned_abs())
        } else {
            length.saturating_add(by.unsigned_abs())
        };
        self.set_length(target);
    }

    pub fn set_length(&mut self, new_length: usize) {
        let length = self.items.len();
        if new_length <= length {
            self.truncate_to(new_length);
            return;
        }
        self.items.reserve_exact(new_length - length);
        self.items.resize_with(new_length, T::default);
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
