// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ops::Range;

use dynbuf_util::{checked_byte_len, element_range};

use crate::consts::{GROWTH_FACTOR, INITIAL_GROWTH_CAPACITY, SHRINK_FACTOR, SHRINK_TRIGGER_DIVISOR};
use crate::error::BufferError;
use crate::system::SystemAllocator;
use crate::traits::BufferAllocator;

/// Growable contiguous buffer of fixed-width, type-erased elements.
///
/// Elements are opaque byte blocks of exactly `elem_size` bytes, copied in and
/// out by value. Capacity doubles when a push finds the buffer full
/// (0 → 1 → 2 → 4 → 8...) and halves after a removal leaves it less than a
/// quarter full.
///
/// # Invariants
///
/// - `capacity == 0` if and only if no block is allocated.
/// - An allocated block holds exactly `capacity * elem_size` bytes.
/// - `size <= capacity`.
/// - Regions added by growth are zero-filled.
///
/// # Example
///
/// ```rust
/// use dynbuf::{BufferError, DynamicBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buf = DynamicBuffer::new(4)?;
///
///     for i in 0u32..10 {
///         buf.push(&(i * 10).to_le_bytes())?;
///     }
///     assert_eq!(buf.size(), 10);
///     assert_eq!(buf.capacity(), 16);
///
///     let mut out = [0u8; 4];
///     buf.get(7, &mut out)?;
///     assert_eq!(u32::from_le_bytes(out), 70);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicBuffer<A: BufferAllocator = SystemAllocator> {
    buffer: Option<Vec<u8>>,
    size: usize,
    capacity: usize,
    elem_size: usize,
    allocator: A,
}

impl<A: BufferAllocator> core::fmt::Debug for DynamicBuffer<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicBuffer")
            .field("data", &"REDACTED")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("elem_size", &self.elem_size)
            .finish()
    }
}

impl DynamicBuffer<SystemAllocator> {
    /// Creates an empty buffer for elements of `elem_size` bytes.
    ///
    /// No memory is allocated until the first push.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `elem_size` is zero.
    pub fn new(elem_size: usize) -> Result<Self, BufferError> {
        Self::new_in(elem_size, SystemAllocator)
    }

    /// Creates a buffer with room for `capacity` elements of `elem_size` bytes.
    ///
    /// The block is zero-initialized. A `capacity` of zero behaves like
    /// [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `elem_size` is zero.
    /// - [`BufferError::AllocationFailed`] if the block cannot be allocated.
    pub fn with_capacity(elem_size: usize, capacity: usize) -> Result<Self, BufferError> {
        Self::with_capacity_in(elem_size, capacity, SystemAllocator)
    }
}

impl<A: BufferAllocator> DynamicBuffer<A> {
    /// Creates an empty buffer backed by `allocator`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `elem_size` is zero.
    pub fn new_in(elem_size: usize, allocator: A) -> Result<Self, BufferError> {
        Self::with_capacity_in(elem_size, 0, allocator)
    }

    /// Creates a buffer with room for `capacity` elements, backed by `allocator`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `elem_size` is zero.
    /// - [`BufferError::AllocationFailed`] if the block cannot be allocated.
    pub fn with_capacity_in(
        elem_size: usize,
        capacity: usize,
        allocator: A,
    ) -> Result<Self, BufferError> {
        if elem_size == 0 {
            return Err(BufferError::InvalidArgument);
        }

        let mut buf = Self {
            buffer: None,
            size: 0,
            capacity: 0,
            elem_size,
            allocator,
        };

        if capacity == 0 {
            return Ok(buf);
        }

        let len = checked_byte_len(capacity, elem_size).ok_or(BufferError::AllocationFailed)?;
        buf.buffer = Some(buf.allocator.allocate_zeroed(len)?);
        buf.capacity = capacity;

        Ok(buf)
    }

    /// Releases the block and resets the buffer to the empty state.
    ///
    /// Calling it again, or on a buffer that never allocated, is a no-op. The
    /// buffer stays usable: the next push allocates from scratch.
    pub fn destroy(&mut self) {
        if let Some(block) = self.buffer.take() {
            self.allocator.release(block);
        }

        self.size = 0;
        self.capacity = 0;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of element slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the fixed byte width of one element.
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Returns `true` if the buffer holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if a backing block is currently allocated.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns a reference to the allocator.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Returns a mutable reference to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Appends a copy of `value`, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `value.len() != elem_size`.
    /// - [`BufferError::AllocationFailed`] if growth fails. The buffer is
    ///   left exactly as it was.
    pub fn push(&mut self, value: &[u8]) -> Result<(), BufferError> {
        if value.len() != self.elem_size {
            return Err(BufferError::InvalidArgument);
        }

        if self.size >= self.capacity {
            self.grow()?;
        }

        let range = self.slot(self.size)?;
        let block = self.buffer.as_mut().ok_or(BufferError::InvalidArgument)?;
        block[range].copy_from_slice(value);
        self.size += 1;

        Ok(())
    }

    /// Removes the last element, copying it into `out` when supplied.
    ///
    /// After the removal the buffer halves its capacity if it is less than a
    /// quarter full.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if the buffer is empty or `out` has
    ///   the wrong width. Nothing is removed.
    /// - [`BufferError::ShrinkFailed`] if the follow-up shrink fails. The
    ///   element has been removed and `out` filled regardless.
    pub fn pop(&mut self, out: Option<&mut [u8]>) -> Result<(), BufferError> {
        if self.buffer.is_none() || self.size == 0 {
            return Err(BufferError::InvalidArgument);
        }

        if out.as_ref().is_some_and(|o| o.len() != self.elem_size) {
            return Err(BufferError::InvalidArgument);
        }

        self.size -= 1;

        if let Some(out) = out {
            let range = self.slot(self.size)?;
            let block = self.buffer.as_ref().ok_or(BufferError::InvalidArgument)?;
            out.copy_from_slice(&block[range]);
        }

        self.maybe_shrink()
            .map_err(|_| BufferError::ShrinkFailed)
    }

    /// Copies the last element into `out` without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the buffer is empty or `out`
    /// has the wrong width.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), BufferError> {
        if self.buffer.is_none() || self.size == 0 {
            return Err(BufferError::InvalidArgument);
        }

        self.get(self.size - 1, out)
    }

    /// Copies the element at `index` into `out`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if no block is allocated or `out` has
    ///   the wrong width.
    /// - [`BufferError::OutOfBounds`] if `index >= size`.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<(), BufferError> {
        let block = self.buffer.as_ref().ok_or(BufferError::InvalidArgument)?;

        if out.len() != self.elem_size {
            return Err(BufferError::InvalidArgument);
        }

        if index >= self.size {
            return Err(BufferError::OutOfBounds);
        }

        out.copy_from_slice(&block[self.slot(index)?]);

        Ok(())
    }

    /// Overwrites the live element at `index` with `value`.
    ///
    /// Slots past `size` are never written, even when they are within
    /// capacity.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if no block is allocated or `value`
    ///   has the wrong width.
    /// - [`BufferError::OutOfBounds`] if `index >= size`.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), BufferError> {
        if self.buffer.is_none() || value.len() != self.elem_size {
            return Err(BufferError::InvalidArgument);
        }

        if index >= self.size {
            return Err(BufferError::OutOfBounds);
        }

        let range = self.slot(index)?;
        let block = self.buffer.as_mut().ok_or(BufferError::InvalidArgument)?;
        block[range].copy_from_slice(value);

        Ok(())
    }

    /// Forgets all elements. Capacity and block contents are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Returns the whole allocated block, including slots past `size`.
    ///
    /// Only available in tests or with the `test-utils` feature.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn as_capacity_bytes(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or(&[])
    }

    fn slot(&self, index: usize) -> Result<Range<usize>, BufferError> {
        element_range(index, self.elem_size).ok_or(BufferError::OutOfBounds)
    }

    #[cold]
    fn grow(&mut self) -> Result<(), BufferError> {
        let new_capacity = if self.capacity == 0 {
            INITIAL_GROWTH_CAPACITY
        } else {
            self.capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(BufferError::AllocationFailed)?
        };

        self.resize(new_capacity)
    }

    fn maybe_shrink(&mut self) -> Result<(), BufferError> {
        if self.capacity > 1 && self.size < self.capacity / SHRINK_TRIGGER_DIVISOR {
            let new_capacity = (self.capacity / SHRINK_FACTOR).max(1);
            return self.resize(new_capacity);
        }

        Ok(())
    }

    /// Reallocates the block to hold exactly `new_capacity` elements.
    ///
    /// Growth zero-fills the added slots. Shrinking below `size` drops the
    /// trailing elements. On failure nothing changes.
    pub(crate) fn resize(&mut self, new_capacity: usize) -> Result<(), BufferError> {
        if new_capacity == 0 {
            return Err(BufferError::InvalidArgument);
        }

        if new_capacity == self.capacity {
            return Ok(());
        }

        let old_len = checked_byte_len(self.capacity, self.elem_size)
            .ok_or(BufferError::AllocationFailed)?;
        let new_len = checked_byte_len(new_capacity, self.elem_size)
            .ok_or(BufferError::AllocationFailed)?;

        match self.buffer.as_mut() {
            Some(block) => {
                self.allocator.reallocate(block, new_len)?;

                if new_len > old_len {
                    block[old_len..new_len].fill(0);
                }
            }
            None => {
                self.buffer = Some(self.allocator.allocate_zeroed(new_len)?);
            }
        }

        self.capacity = new_capacity;

        if self.size > new_capacity {
            self.size = new_capacity;
        }

        Ok(())
    }
}

impl<A: BufferAllocator> Drop for DynamicBuffer<A> {
    fn drop(&mut self) {
        self.destroy();
    }
}
