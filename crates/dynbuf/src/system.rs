// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use dynbuf_util::wipe_bytes;

use crate::error::AllocError;
use crate::traits::BufferAllocator;

/// Global-heap allocator.
///
/// Growth goes through `Vec::try_reserve_exact`, so exhaustion is reported as
/// [`AllocError::OutOfMemory`] instead of aborting. Bytes discarded by a
/// shrink and whole blocks on release are wiped before the memory is freed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl BufferAllocator for SystemAllocator {
    fn allocate_zeroed(&self, len: usize) -> Result<Vec<u8>, AllocError> {
        let mut block = Vec::new();
        block
            .try_reserve_exact(len)
            .map_err(|_| AllocError::OutOfMemory { requested: len })?;
        block.resize(len, 0);

        Ok(block)
    }

    fn reallocate(&self, block: &mut Vec<u8>, new_len: usize) -> Result<(), AllocError> {
        let old_len = block.len();

        if new_len > old_len {
            block
                .try_reserve_exact(new_len - old_len)
                .map_err(|_| AllocError::OutOfMemory { requested: new_len })?;
            block.resize(new_len, 0);
        } else if new_len < old_len {
            wipe_bytes(&mut block[new_len..]);
            block.truncate(new_len);
            block.shrink_to_fit();
        }

        Ok(())
    }

    fn release(&self, mut block: Vec<u8>) {
        wipe_bytes(&mut block);
    }
}
