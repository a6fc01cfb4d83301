// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BufferAllocator, DynamicBuffer};

/// Checks the structural invariants that must hold after every public call.
pub(crate) fn assert_invariants<A: BufferAllocator>(buf: &DynamicBuffer<A>) {
    assert!(
        buf.size() <= buf.capacity(),
        "size {} exceeds capacity {}",
        buf.size(),
        buf.capacity()
    );
    assert_eq!(buf.capacity() == 0, !buf.is_allocated());
    assert_eq!(
        buf.as_capacity_bytes().len(),
        buf.capacity() * buf.elem_size()
    );
}

/// Pushes `0, 10, 20, ...` as little-endian `u32` values.
pub(crate) fn populate<A: BufferAllocator>(buf: &mut DynamicBuffer<A>, count: u32) {
    for i in 0..count {
        buf.push(&(i * 10).to_le_bytes())
            .expect("Failed to buf.push(..)");
    }
}

/// Reads the `u32` at `index`.
pub(crate) fn get_u32<A: BufferAllocator>(
    buf: &DynamicBuffer<A>,
    index: usize,
) -> Result<u32, crate::BufferError> {
    let mut out = [0u8; 4];
    buf.get(index, &mut out)?;
    Ok(u32::from_le_bytes(out))
}
