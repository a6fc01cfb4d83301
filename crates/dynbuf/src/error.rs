// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynbuf.

use thiserror::Error;

/// Error type for [`BufferAllocator`](crate::BufferAllocator) operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The allocator could not satisfy a request for `requested` bytes.
    #[error("allocator could not provide {requested} bytes")]
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
}

/// Error type for [`DynamicBuffer`](crate::DynamicBuffer) operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// Zero element size, a block whose width differs from the element size,
    /// or a removal/peek on an empty buffer.
    #[error("Invalid input")]
    InvalidArgument,

    /// The allocator could not satisfy a grow or shrink request, or the
    /// requested byte length does not fit in `usize`.
    #[error("Error allocating memory")]
    AllocationFailed,

    /// An indexed access referenced an index `>= size`.
    #[error("Out of bounds access attempted")]
    OutOfBounds,

    /// The element was removed, but shrinking the buffer afterwards failed.
    ///
    /// The buffer is still valid and keeps its previous capacity.
    #[error("Element removed, but shrinking the buffer failed")]
    ShrinkFailed,
}

impl BufferError {
    /// Returns `true` if the operation's primary effect was applied despite
    /// the error.
    ///
    /// Only [`BufferError::ShrinkFailed`] is committed: the element has been
    /// removed and copied out.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::ShrinkFailed)
    }
}

impl From<AllocError> for BufferError {
    fn from(_: AllocError) -> Self {
        Self::AllocationFailed
    }
}
