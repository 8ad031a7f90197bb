//! Lane-wise comparisons
//!
//! Every comparison takes two vectors of the same element type and lane
//! count and returns a [`Mask`] of the same shape. Integers compare with the
//! ordering of their own signedness; floats compare as IEEE 754 ordered
//! predicates, so any lane holding a NaN is false, except for [`cmp_ne`],
//! which is the unordered complement of [`cmp_eq`] and is true for NaN.
//!
//! Only less-than and equality reach the lowering layer. The other predicates
//! are built from those two:
//!
//! | Predicate | Built as          |
//! |-----------|-------------------|
//! | `a < b`   | native            |
//! | `a == b`  | native            |
//! | `a > b`   | `b < a`           |
//! | `a <= b`  | `a < b \| a == b` |
//! | `a >= b`  | `b < a \| a == b` |
//! | `a != b`  | `!(a == b)`       |
//!
//! Each predicate also has a broadcast form for a scalar on either side:
//! `cmp_lt_scalar(a, s)` compares against `s` in every lane, and
//! `scalar_cmp_lt(s, b)` puts `s` on the left.
//!
//! # Examples
//!
//! ```rust
//! use lanewise::{Vector, cmp_lt, cmp_lt_scalar};
//!
//! let a = Vector::from_array([1i32, 5, -3, 7]);
//! let b = Vector::from_array([2i32, 5, -1, 7]);
//! assert_eq!(cmp_lt(a, b).to_bools(), [true, false, true, false]);
//! assert_eq!(cmp_lt_scalar(a, 5).to_bools(), [true, false, true, false]);
//!
//! let x = Vector::from_array([f32::NAN, 1.0]);
//! let y = Vector::from_array([1.0, f32::NAN]);
//! assert!(cmp_lt(x, y).none());
//! ```

use crate::element::{Element, MaskBits};
use crate::mask::Mask;
use crate::vector::Vector;

/// Lane `i` is true iff `a[i] < b[i]`.
#[inline]
pub fn cmp_lt<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    let mut bits = [<T::Bits as MaskBits>::FALSE; N];
    T::native_lt(a.as_array(), b.as_array(), &mut bits);
    Mask::from_bits_unchecked(bits)
}

/// Lane `i` is true iff `a[i] == b[i]`.
#[inline]
pub fn cmp_eq<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    let mut bits = [<T::Bits as MaskBits>::FALSE; N];
    T::native_eq(a.as_array(), b.as_array(), &mut bits);
    Mask::from_bits_unchecked(bits)
}

/// Lane `i` is true iff `a[i] > b[i]`.
#[inline]
pub fn cmp_gt<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    cmp_lt(b, a)
}

/// Lane `i` is true iff `a[i] <= b[i]`.
#[inline]
pub fn cmp_le<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    cmp_lt(a, b) | cmp_eq(a, b)
}

/// Lane `i` is true iff `a[i] >= b[i]`.
#[inline]
pub fn cmp_ge<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    cmp_lt(b, a) | cmp_eq(a, b)
}

/// Lane `i` is true iff `a[i] != b[i]`, including when either side is NaN.
#[inline]
pub fn cmp_ne<T: Element, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Mask<T, N> {
    !cmp_eq(a, b)
}

macro_rules! broadcast_forms {
    ($($op:ident: $rhs:ident, $lhs:ident;)*) => {
        $(
            #[doc = concat!("[`", stringify!($op), "`] with `b` broadcast to every lane")]
            #[inline]
            pub fn $rhs<T: Element, const N: usize>(a: Vector<T, N>, b: T) -> Mask<T, N> {
                $op(a, Vector::splat(b))
            }

            #[doc = concat!("[`", stringify!($op), "`] with `a` broadcast to every lane")]
            #[inline]
            pub fn $lhs<T: Element, const N: usize>(a: T, b: Vector<T, N>) -> Mask<T, N> {
                $op(Vector::splat(a), b)
            }
        )*
    };
}

broadcast_forms! {
    cmp_lt: cmp_lt_scalar, scalar_cmp_lt;
    cmp_gt: cmp_gt_scalar, scalar_cmp_gt;
    cmp_le: cmp_le_scalar, scalar_cmp_le;
    cmp_ge: cmp_ge_scalar, scalar_cmp_ge;
    cmp_eq: cmp_eq_scalar, scalar_cmp_eq;
    cmp_ne: cmp_ne_scalar, scalar_cmp_ne;
}
