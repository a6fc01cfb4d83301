// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::AllocError;
use crate::system::SystemAllocator;
use crate::traits::BufferAllocator;

/// Configurable behaviour for [`MockAllocator`].
///
/// The behaviour is sticky: it stays active until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    #[default]
    None,
    /// Every allocate and reallocate fails.
    FailAlways,
    /// Fail the Nth allocate-or-reallocate call (1-indexed: 1 = first call fails).
    FailAtNthCall(usize),
    /// Fail allocations and reallocations that increase the block size.
    FailAtGrow,
    /// Fail reallocations that decrease the block size.
    FailAtShrink,
}

/// Mock allocator for testing.
///
/// Wraps [`SystemAllocator`] but allows simulating failures via
/// [`MockAllocatorBehaviour`], and counts every call it receives.
#[derive(Debug, Default)]
pub struct MockAllocator {
    inner: SystemAllocator,
    behaviour: MockAllocatorBehaviour,
    call_count: Cell<usize>,
    allocate_count: Cell<usize>,
    reallocate_count: Cell<usize>,
    release_count: Cell<usize>,
}

impl MockAllocator {
    /// Creates a new mock allocator with the specified behaviour.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            behaviour,
            ..Self::default()
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockAllocatorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `allocate_zeroed` calls, including failed ones.
    pub fn allocate_count(&self) -> usize {
        self.allocate_count.get()
    }

    /// Number of `reallocate` calls, including failed ones.
    pub fn reallocate_count(&self) -> usize {
        self.reallocate_count.get()
    }

    /// Number of `release` calls.
    pub fn release_count(&self) -> usize {
        self.release_count.get()
    }

    /// Resets all call counters.
    pub fn reset_count(&self) {
        self.call_count.set(0);
        self.allocate_count.set(0);
        self.reallocate_count.set(0);
        self.release_count.set(0);
    }

    fn should_fail(&self, grows: bool) -> bool {
        let current = self.call_count.get() + 1;
        self.call_count.set(current);

        match self.behaviour {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthCall(n) => current == n,
            MockAllocatorBehaviour::FailAtGrow => grows,
            MockAllocatorBehaviour::FailAtShrink => !grows,
        }
    }
}

impl BufferAllocator for MockAllocator {
    fn allocate_zeroed(&self, len: usize) -> Result<Vec<u8>, AllocError> {
        self.allocate_count.set(self.allocate_count.get() + 1);

        if self.should_fail(true) {
            return Err(AllocError::OutOfMemory { requested: len });
        }

        self.inner.allocate_zeroed(len)
    }

    fn reallocate(&self, block: &mut Vec<u8>, new_len: usize) -> Result<(), AllocError> {
        self.reallocate_count.set(self.reallocate_count.get() + 1);

        if self.should_fail(new_len > block.len()) {
            return Err(AllocError::OutOfMemory { requested: new_len });
        }

        self.inner.reallocate(block, new_len)
    }

    fn release(&self, block: Vec<u8>) {
        self.release_count.set(self.release_count.get() + 1);
        self.inner.release(block);
    }
}
