//! Lane element types
//!
//! Every vector and mask in this crate is parameterized by one of ten
//! primitive element types. [`Element`] carries the type-level metadata the
//! comparison engine and the cast subsystem need: the element kind, its width,
//! and the unsigned integer type of the same width that backs a mask lane.

use core::fmt::{self, Debug, Display};
use core::ops::{BitAnd, BitOr, BitXor, Not};

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::arch::native;

/// The kind of value stored in one lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ElementKind {
    /// Width of one lane in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
        }
    }

    /// Width of one lane in bytes
    #[inline]
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Whether lanes of this kind are ordered with a sign (signed integers and floats)
    #[inline]
    pub const fn is_signed(self) -> bool {
        !self.is_unsigned()
    }

    /// Whether lanes of this kind are unsigned integers
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Whether lanes of this kind are IEEE 754 floats
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// The Rust name of the lane type
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A primitive type that can occupy a vector lane.
///
/// This trait is sealed: it is implemented for `i8`, `u8`, `i16`, `u16`,
/// `i32`, `u32`, `i64`, `u64`, `f32` and `f64` only.
pub trait Element:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + FromBytes
    + IntoBytes
    + Immutable
{
    /// Unsigned integer of the same width; one mask lane is stored as this type
    type Bits: MaskBits;

    /// Runtime description of this element type
    const KIND: ElementKind;

    /// The additive zero of this type
    const ZERO: Self;

    #[doc(hidden)]
    fn native_lt(a: &[Self], b: &[Self], out: &mut [Self::Bits]);

    #[doc(hidden)]
    fn native_eq(a: &[Self], b: &[Self], out: &mut [Self::Bits]);
}

/// The canonical lane patterns of a mask: every bit set, or none.
pub trait MaskBits:
    Element<Bits = Self>
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// All ones
    const TRUE: Self;
    /// All zeros
    const FALSE: Self;
}

macro_rules! impl_element {
    ($($ty:ty => $bits:ty, $kind:ident, $zero:expr, $lt:ident, $eq:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                type Bits = $bits;
                const KIND: ElementKind = ElementKind::$kind;
                const ZERO: Self = $zero;

                #[inline]
                fn native_lt(a: &[Self], b: &[Self], out: &mut [$bits]) {
                    native::$lt(a, b, out)
                }

                #[inline]
                fn native_eq(a: &[Self], b: &[Self], out: &mut [$bits]) {
                    native::$eq(a, b, out)
                }
            }
        )*
    };
}

impl_element! {
    i8 => u8, I8, 0, lt_i8, eq_i8;
    u8 => u8, U8, 0, lt_u8, eq_u8;
    i16 => u16, I16, 0, lt_i16, eq_i16;
    u16 => u16, U16, 0, lt_u16, eq_u16;
    i32 => u32, I32, 0, lt_i32, eq_i32;
    u32 => u32, U32, 0, lt_u32, eq_u32;
    i64 => u64, I64, 0, lt_i64, eq_i64;
    u64 => u64, U64, 0, lt_u64, eq_u64;
    f32 => u32, F32, 0.0, lt_f32, eq_f32;
    f64 => u64, F64, 0.0, lt_f64, eq_f64;
}

macro_rules! impl_mask_bits {
    ($($ty:ty),*) => {
        $(
            impl MaskBits for $ty {
                const TRUE: Self = <$ty>::MAX;
                const FALSE: Self = 0;
            }
        )*
    };
}

impl_mask_bits!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn width_of<T: Element>() -> usize {
        std::mem::size_of::<T>()
    }

    #[test]
    fn test_kind_widths_match_types() {
        assert_eq!(i8::KIND.bytes(), width_of::<i8>());
        assert_eq!(u16::KIND.bytes(), width_of::<u16>());
        assert_eq!(i32::KIND.bytes(), width_of::<i32>());
        assert_eq!(f32::KIND.bytes(), width_of::<f32>());
        assert_eq!(u64::KIND.bytes(), width_of::<u64>());
        assert_eq!(f64::KIND.bits(), 64);
    }

    #[test]
    fn test_bits_have_same_width() {
        assert_eq!(width_of::<<f32 as Element>::Bits>(), 4);
        assert_eq!(width_of::<<i8 as Element>::Bits>(), 1);
        assert_eq!(width_of::<<f64 as Element>::Bits>(), 8);
        assert_eq!(width_of::<<i16 as Element>::Bits>(), 2);
    }

    #[test]
    fn test_kind_classification() {
        assert!(ElementKind::I8.is_signed());
        assert!(ElementKind::F64.is_signed());
        assert!(ElementKind::F64.is_float());
        assert!(ElementKind::U32.is_unsigned());
        assert!(!ElementKind::U32.is_signed());
        assert!(!ElementKind::I64.is_float());
        assert_eq!(ElementKind::U16.to_string(), "u16");
    }

    #[test]
    fn test_mask_bit_patterns() {
        assert_eq!(<u8 as MaskBits>::TRUE, 0xFF);
        assert_eq!(<u16 as MaskBits>::TRUE, 0xFFFF);
        assert_eq!(<u32 as MaskBits>::TRUE, 0xFFFF_FFFF);
        assert_eq!(<u64 as MaskBits>::TRUE, u64::MAX);
        assert_eq!(<u32 as MaskBits>::FALSE, 0);
        assert_eq!(!<u8 as MaskBits>::TRUE, <u8 as MaskBits>::FALSE);
    }
}
