// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::AllocError;

/// Source of backing memory for a [`DynamicBuffer`](crate::DynamicBuffer).
///
/// Blocks are plain `Vec<u8>` whose length is the usable byte count. The
/// buffer owns every block it receives and hands it back through
/// [`release`](BufferAllocator::release) exactly once.
pub trait BufferAllocator {
    /// Allocates a block of exactly `len` bytes, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the memory is not available.
    fn allocate_zeroed(&self, len: usize) -> Result<Vec<u8>, AllocError>;

    /// Resizes `block` to exactly `new_len` bytes.
    ///
    /// The first `min(block.len(), new_len)` bytes are preserved. The contents
    /// of any added range are unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the memory is not available. On
    /// error `block` is left untouched.
    fn reallocate(&self, block: &mut Vec<u8>, new_len: usize) -> Result<(), AllocError>;

    /// Returns a block to the allocator.
    fn release(&self, block: Vec<u8>);
}
