// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers for fixed-width element buffers.
//!
//! Every byte offset a `dynbuf` buffer computes goes through this crate, so
//! overflow is handled in exactly one place.

#![cfg_attr(not(test), no_std)]

use core::ops::Range;

use zeroize::Zeroize;

/// Returns the byte length of `count` elements of `elem_size` bytes each.
///
/// Returns `None` if the product overflows `usize`.
///
/// # Example
///
/// ```
/// use dynbuf_util::checked_byte_len;
///
/// assert_eq!(checked_byte_len(16, 4), Some(64));
/// assert_eq!(checked_byte_len(usize::MAX, 2), None);
/// ```
#[inline(always)]
pub fn checked_byte_len(count: usize, elem_size: usize) -> Option<usize> {
    count.checked_mul(elem_size)
}

/// Returns the byte range occupied by the element at `index`.
///
/// The range is `[index * elem_size, (index + 1) * elem_size)`. Returns
/// `None` if either bound overflows `usize`.
///
/// # Example
///
/// ```
/// use dynbuf_util::element_range;
///
/// assert_eq!(element_range(0, 4), Some(0..4));
/// assert_eq!(element_range(7, 4), Some(28..32));
/// assert_eq!(element_range(usize::MAX, 4), None);
/// ```
#[inline(always)]
pub fn element_range(index: usize, elem_size: usize) -> Option<Range<usize>> {
    let start = index.checked_mul(elem_size)?;
    let end = start.checked_add(elem_size)?;

    Some(start..end)
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use dynbuf_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Wipes a byte slice with volatile writes.
///
/// Used on memory that is about to be handed back to the allocator, where a
/// plain `fill(0)` could be optimized away.
///
/// # Example
///
/// ```
/// use dynbuf_util::{is_slice_zeroized, wipe_bytes};
///
/// let mut data = [0xABu8; 32];
/// wipe_bytes(&mut data);
/// assert!(is_slice_zeroized(&data));
/// ```
#[inline]
pub fn wipe_bytes(slice: &mut [u8]) {
    slice.zeroize();
}
