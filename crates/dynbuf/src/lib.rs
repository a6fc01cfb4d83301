// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type-erased growable buffer of fixed-width elements.
//!
//! [`DynamicBuffer`] stores elements as opaque byte blocks of a width chosen
//! at construction. It never interprets element bytes; it only copies them.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: a push into a full buffer grows capacity
//!   0 → 1 → 2 → 4 → 8...
//! - **Hysteretic shrink**: a pop halves capacity only once the buffer is less
//!   than a quarter full, so alternating push/pop at a boundary never thrashes.
//! - **Zero-filled growth**: slots added by growth are zeroed.
//! - **Non-destructive failure**: a failed grow leaves the buffer untouched. A
//!   failed shrink after a pop is reported as [`BufferError::ShrinkFailed`]
//!   while the removal itself stands.
//!
//! # Example
//!
//! ```rust
//! use dynbuf::{BufferError, DynamicBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buf = DynamicBuffer::new(4)?;
//!     buf.push(&123u32.to_le_bytes())?;
//!
//!     let mut out = [0u8; 4];
//!     buf.pop(Some(&mut out))?;
//!     assert_eq!(u32::from_le_bytes(out), 123);
//!
//!     // Empty buffer: nothing to pop
//!     assert_eq!(buf.pop(None), Err(BufferError::InvalidArgument));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Typed access
//!
//! [`TypedBuffer`] layers a [`FixedWidth`] codec on top for callers that do
//! know their element type:
//!
//! ```rust
//! use dynbuf::TypedBuffer;
//!
//! let mut buf = TypedBuffer::<u64>::new().expect("Failed to TypedBuffer::new()");
//! buf.push(7).expect("Failed to push(..)");
//! assert_eq!(buf.get(0), Ok(7));
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocator failures:
//!
//! ```toml
//! [dev-dependencies]
//! dynbuf = { version = "*", features = ["test-utils"] }
//! ```
//!
//! ```rust,ignore
//! use dynbuf::DynamicBuffer;
//! use dynbuf::test_utils::{MockAllocator, MockAllocatorBehaviour};
//!
//! let allocator = MockAllocator::new(MockAllocatorBehaviour::FailAtGrow);
//! let mut buf = DynamicBuffer::new_in(4, allocator).unwrap();
//! assert!(buf.push(&[0u8; 4]).is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod consts;

mod dynamic_buffer;
mod error;
mod fixed_width;
mod support;
mod system;
mod traits;
mod typed_buffer;

pub use dynamic_buffer::DynamicBuffer;
pub use error::{AllocError, BufferError};
pub use fixed_width::FixedWidth;
pub use system::SystemAllocator;
pub use traits::BufferAllocator;
pub use typed_buffer::TypedBuffer;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
