// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity policy constants.

/// Capacity of the first allocation performed by growth on an empty buffer.
pub const INITIAL_GROWTH_CAPACITY: usize = 1;

/// Capacity multiplier applied when a push finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// A removal shrinks the buffer once `size < capacity / SHRINK_TRIGGER_DIVISOR`.
pub const SHRINK_TRIGGER_DIVISOR: usize = 4;

/// Capacity divisor applied when the shrink condition holds.
pub const SHRINK_FACTOR: usize = 2;
