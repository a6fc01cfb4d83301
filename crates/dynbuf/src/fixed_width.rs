// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A value with a fixed-width byte representation.
///
/// Implementors define how a value is laid out in the `WIDTH`-byte element
/// slots of a [`DynamicBuffer`](crate::DynamicBuffer). Both methods receive
/// slices of exactly `WIDTH` bytes.
pub trait FixedWidth: Sized {
    /// Number of bytes one value occupies.
    const WIDTH: usize;

    /// Serializes `self` into `dst`.
    fn write_to(&self, dst: &mut [u8]);

    /// Deserializes a value from `src`.
    fn read_from(src: &[u8]) -> Self;
}

/// Implements [`FixedWidth`] for a numeric primitive, little-endian.
macro_rules! impl_fixed_width_le {
    ($($type:ty),* $(,)?) => {
        $(
            impl FixedWidth for $type {
                const WIDTH: usize = core::mem::size_of::<$type>();

                #[inline(always)]
                fn write_to(&self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn read_from(src: &[u8]) -> Self {
                    let mut bytes = [0u8; core::mem::size_of::<$type>()];
                    bytes.copy_from_slice(src);
                    <$type>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed_width_le!(u8, u16, u32, u64, u128, usize);
impl_fixed_width_le!(i8, i16, i32, i64, i128, isize);
impl_fixed_width_le!(f32, f64);

impl<const N: usize> FixedWidth for [u8; N] {
    const WIDTH: usize = N;

    #[inline(always)]
    fn write_to(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }

    #[inline(always)]
    fn read_from(src: &[u8]) -> Self {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(src);
        bytes
    }
}
