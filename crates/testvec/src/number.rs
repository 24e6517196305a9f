//! An `Element` is a fixed-width number that can be laid out in memory.
//!
//! We provide implementations for the following types:
//!
//! * `i8` and `u8`, for byte-wide integer kernels.
//! * `u64`, for scalar parameters such as vector lengths.
//! * `f64`, for double-precision floating point kernels.

use core::fmt::{Debug, Display};

/// Numbers that can be serialized into an assembly data section.
pub trait Element: Copy + Default + PartialEq + PartialOrd + Debug + Display + Send + Sync {
    /// A type wide enough to hold the absolute difference of any two elements.
    type AbsDiff: Copy + PartialOrd + Debug + Display;

    /// The number of bytes used to represent this type.
    const NUM_BYTES: usize;

    /// The additive identity.
    const ZERO: Self;

    /// Converts the element to little endian bytes.
    fn to_le_bytes(self) -> Vec<u8>;

    /// Multiplies two elements under the overflow policy of the type.
    ///
    /// Integers wrap around modulo `2^bits`; floats follow IEEE 754.
    #[must_use]
    fn mul_wrapping(self, other: Self) -> Self;

    /// The exact absolute difference between two elements.
    #[must_use]
    fn abs_diff_wide(self, other: Self) -> Self::AbsDiff;

    /// Returns the name of the type.
    #[must_use]
    fn type_name<'a>() -> &'a str {
        core::any::type_name::<Self>()
    }
}

impl Element for i8 {
    type AbsDiff = u16;

    const NUM_BYTES: usize = 1;
    const ZERO: Self = 0;

    fn to_le_bytes(self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    /// The product is computed in `i16`, which cannot overflow for two `i8`
    /// operands, and then truncated to its low 8 bits with the top bit read
    /// back as the sign.
    #[allow(clippy::cast_possible_truncation)]
    fn mul_wrapping(self, other: Self) -> Self {
        let wide = i16::from(self) * i16::from(other);
        wide as Self
    }

    /// Computed in `i16`, so `0 - (-128)` is `128` rather than wrapping back
    /// to `-128`.
    fn abs_diff_wide(self, other: Self) -> Self::AbsDiff {
        (i16::from(self) - i16::from(other)).unsigned_abs()
    }
}

/// Macro to implement `Element` for unsigned integer types.
macro_rules! impl_element_uint {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                type AbsDiff = $ty;

                const NUM_BYTES: usize = core::mem::size_of::<$ty>();
                const ZERO: Self = 0;

                fn to_le_bytes(self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn mul_wrapping(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }

                fn abs_diff_wide(self, other: Self) -> Self::AbsDiff {
                    self.abs_diff(other)
                }
            }
        )*
    }
}

impl_element_uint!(u8, u64);

impl Element for f64 {
    type AbsDiff = Self;

    const NUM_BYTES: usize = 8;
    const ZERO: Self = 0.0;

    fn to_le_bytes(self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    fn mul_wrapping(self, other: Self) -> Self {
        self * other
    }

    fn abs_diff_wide(self, other: Self) -> Self::AbsDiff {
        (self - other).abs()
    }
}

/// Serializes a slice of elements into contiguous little endian bytes.
#[must_use]
pub fn to_le_bytes<T: Element>(values: &[T]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * T::NUM_BYTES);
    for &v in values {
        bytes.extend(v.to_le_bytes());
    }
    bytes
}
