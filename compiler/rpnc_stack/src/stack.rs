//! The [`GrowableStack`] container.

use std::fmt;
use std::slice;

use crate::error::StackError;

/// A generic LIFO container over a single owned buffer.
///
/// Live elements occupy positions `[0, len)` of the buffer, with the top of
/// the stack at `len - 1`. The logical capacity is tracked separately from
/// the allocator's bookkeeping so that growth always follows
/// `max(1, 2 * capacity)`.
pub struct GrowableStack<T> {
    /// Live elements, bottom first
    buffer: Vec<T>,
    /// Logical capacity; invariant: `buffer.len() <= capacity`
    capacity: usize,
}

impl<T> GrowableStack<T> {
    /// Create an empty stack without allocating.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty stack with room for exactly `capacity` elements.
    ///
    /// A capacity of zero allocates nothing.
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(Self { buffer, capacity })
    }

    /// Push `value` onto the top of the stack, growing the buffer when full.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.buffer.len() == self.capacity {
            self.grow()?;
        }
        self.buffer.push(value);
        Ok(())
    }

    /// Remove and discard the top element.
    pub fn pop(&mut self) -> Result<(), StackError> {
        self.buffer.pop().map(drop).ok_or(StackError::Underflow)
    }

    /// Borrow the top element without removing it.
    pub fn top(&self) -> Result<&T, StackError> {
        self.buffer.last().ok_or(StackError::Underflow)
    }

    /// Alias for [`top`](Self::top).
    pub fn peek(&self) -> Result<&T, StackError> {
        self.top()
    }

    /// Mutably borrow the top element without removing it.
    pub fn top_mut(&mut self) -> Result<&mut T, StackError> {
        self.buffer.last_mut().ok_or(StackError::Underflow)
    }

    /// Borrow the element at `index`, counting from the bottom of the stack.
    pub fn get(&self, index: usize) -> Result<&T, StackError> {
        self.buffer.get(index).ok_or(StackError::InvalidIndex {
            index,
            len: self.buffer.len(),
        })
    }

    /// `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of elements the stack can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every element while keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over the live elements from bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    fn grow(&mut self) -> Result<(), StackError> {
        let new_capacity = match self.capacity {
            0 => 1,
            current => current
                .checked_mul(2)
                .ok_or(StackError::AllocationFailure {
                    requested: usize::MAX,
                })?,
        };

        // `buffer.len() == capacity` here, so this reserves exactly the
        // difference between the old and new logical capacity.
        self.buffer
            .try_reserve_exact(new_capacity - self.buffer.len())
            .map_err(|_| StackError::AllocationFailure {
                requested: new_capacity,
            })?;

        #[cfg(feature = "logging")]
        log::trace!(
            "stack grew from {} to {} elements",
            self.capacity,
            new_capacity
        );

        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T: Clone> GrowableStack<T> {
    /// Deep-copy the stack, reporting allocation failure instead of aborting.
    ///
    /// The copy has the same logical capacity as `self`.
    pub fn try_clone(&self) -> Result<Self, StackError> {
        let mut copy = Self::with_capacity(self.capacity)?;
        copy.buffer.extend_from_slice(&self.buffer);
        Ok(copy)
    }

    /// Replace the contents of `self` with a deep copy of `source`.
    ///
    /// The replacement is built completely before `self` is touched, so on
    /// failure `self` is unchanged.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), StackError> {
        let replacement = source.try_clone()?;
        *self = replacement;
        Ok(())
    }
}

impl<T> Default for GrowableStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableStack<T> {
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend_from_slice(&self.buffer);
        Self {
            buffer,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableStack")
            .field("elements", &self.buffer)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for GrowableStack<T> {}

impl<'a, T> IntoIterator for &'a GrowableStack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
