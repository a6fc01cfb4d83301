// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use core::marker::PhantomData;

use crate::dynamic_buffer::DynamicBuffer;
use crate::error::BufferError;
use crate::fixed_width::FixedWidth;
use crate::system::SystemAllocator;
use crate::traits::BufferAllocator;

/// Typed view over a [`DynamicBuffer`] whose element width is `T::WIDTH`.
///
/// Values are serialized through [`FixedWidth`] on the way in and out. The
/// capacity policy is exactly the one of the underlying buffer.
///
/// # Example
///
/// ```rust
/// use dynbuf::{BufferError, TypedBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buf = TypedBuffer::<i32>::new()?;
///     buf.push(-7)?;
///     buf.push(42)?;
///
///     assert_eq!(buf.peek()?, 42);
///     assert_eq!(buf.pop()?, 42);
///     assert_eq!(buf.get(0)?, -7);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct TypedBuffer<T: FixedWidth, A: BufferAllocator = SystemAllocator> {
    inner: DynamicBuffer<A>,
    _marker: PhantomData<T>,
}

impl<T: FixedWidth, A: BufferAllocator> core::fmt::Debug for TypedBuffer<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedBuffer")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: FixedWidth> TypedBuffer<T, SystemAllocator> {
    /// Creates an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `T::WIDTH` is zero.
    pub fn new() -> Result<Self, BufferError> {
        Self::new_in(SystemAllocator)
    }

    /// Creates a buffer with room for `capacity` values.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `T::WIDTH` is zero.
    /// - [`BufferError::AllocationFailed`] if the block cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        Self::with_capacity_in(capacity, SystemAllocator)
    }
}

impl<T: FixedWidth, A: BufferAllocator> TypedBuffer<T, A> {
    /// Creates an empty buffer backed by `allocator`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `T::WIDTH` is zero.
    pub fn new_in(allocator: A) -> Result<Self, BufferError> {
        Self::with_capacity_in(0, allocator)
    }

    /// Creates a buffer with room for `capacity` values, backed by `allocator`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if `T::WIDTH` is zero.
    /// - [`BufferError::AllocationFailed`] if the block cannot be allocated.
    pub fn with_capacity_in(capacity: usize, allocator: A) -> Result<Self, BufferError> {
        Ok(Self {
            inner: DynamicBuffer::with_capacity_in(T::WIDTH, capacity, allocator)?,
            _marker: PhantomData,
        })
    }

    /// Returns the number of live values.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns the number of value slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns `true` if the buffer holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the underlying type-erased buffer.
    pub fn as_dynamic(&self) -> &DynamicBuffer<A> {
        &self.inner
    }

    /// Returns the underlying type-erased buffer mutably.
    pub fn as_dynamic_mut(&mut self) -> &mut DynamicBuffer<A> {
        &mut self.inner
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if growth fails.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        let mut bytes = vec![0u8; T::WIDTH];
        value.write_to(&mut bytes);
        self.inner.push(&bytes)
    }

    /// Removes and returns the last value.
    ///
    /// A failed follow-up shrink does not lose the value: the removal is
    /// committed, so the value is returned and the buffer keeps its capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the buffer is empty.
    pub fn pop(&mut self) -> Result<T, BufferError> {
        let mut bytes = vec![0u8; T::WIDTH];

        match self.inner.pop(Some(bytes.as_mut_slice())) {
            Ok(()) => Ok(T::read_from(&bytes)),
            Err(e) if e.is_committed() => Ok(T::read_from(&bytes)),
            Err(e) => Err(e),
        }
    }

    /// Returns the last value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the buffer is empty.
    pub fn peek(&self) -> Result<T, BufferError> {
        let mut bytes = vec![0u8; T::WIDTH];
        self.inner.peek(&mut bytes)?;
        Ok(T::read_from(&bytes))
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if nothing was ever allocated.
    /// - [`BufferError::OutOfBounds`] if `index >= size`.
    pub fn get(&self, index: usize) -> Result<T, BufferError> {
        let mut bytes = vec![0u8; T::WIDTH];
        self.inner.get(index, &mut bytes)?;
        Ok(T::read_from(&bytes))
    }

    /// Overwrites the value at `index`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if nothing was ever allocated.
    /// - [`BufferError::OutOfBounds`] if `index >= size`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let mut bytes = vec![0u8; T::WIDTH];
        value.write_to(&mut bytes);
        self.inner.set(index, &bytes)
    }

    /// Forgets all values, keeping capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Releases the block and resets to the empty state.
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }
}
