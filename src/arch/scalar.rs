//! Portable lane loops
//!
//! Used as the whole lowering when no SIMD instruction set is enabled (or the
//! `force-scalar` feature is on), and for the tail lanes that do not fill a
//! native segment otherwise.

use crate::element::MaskBits;

#[inline]
pub fn lt<T: PartialOrd, B: MaskBits>(a: &[T], b: &[T], out: &mut [B]) {
    for ((r, x), y) in out.iter_mut().zip(a).zip(b) {
        // `<` is false when either side is NaN
        *r = if x < y { B::TRUE } else { B::FALSE };
    }
}

#[inline]
pub fn eq<T: PartialEq, B: MaskBits>(a: &[T], b: &[T], out: &mut [B]) {
    for ((r, x), y) in out.iter_mut().zip(a).zip(b) {
        *r = if x == y { B::TRUE } else { B::FALSE };
    }
}

macro_rules! scalar_entry_points {
    ($($lt:ident, $eq:ident: $t:ty => $b:ty;)*) => {
        $(
            #[inline]
            pub fn $lt(a: &[$t], b: &[$t], out: &mut [$b]) {
                lt(a, b, out)
            }

            #[inline]
            pub fn $eq(a: &[$t], b: &[$t], out: &mut [$b]) {
                eq(a, b, out)
            }
        )*
    };
}

scalar_entry_points! {
    lt_i8, eq_i8: i8 => u8;
    lt_u8, eq_u8: u8 => u8;
    lt_i16, eq_i16: i16 => u16;
    lt_u16, eq_u16: u16 => u16;
    lt_i32, eq_i32: i32 => u32;
    lt_u32, eq_u32: u32 => u32;
    lt_i64, eq_i64: i64 => u64;
    lt_u64, eq_u64: u64 => u64;
    lt_f32, eq_f32: f32 => u32;
    lt_f64, eq_f64: f64 => u64;
}
