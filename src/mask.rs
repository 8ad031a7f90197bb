//! Lane masks
//!
//! A [`Mask`] holds one truth value per lane. Every lane is stored at the full
//! element width as the unsigned integer [`Element::Bits`]: all ones for true,
//! zero for false. That is the representation the comparison instructions
//! produce on x86 and NEON, so producing a mask from a comparison is a plain
//! store and unmasking it is free.
//!
//! A mask cannot be built from arbitrary integer lanes. It comes out of a
//! comparison, out of [`Mask::splat`] / [`Mask::from_bools`], or out of a
//! mask-to-mask reinterpretation, so every lane always holds one of the two
//! canonical patterns.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::element::{Element, MaskBits};
use crate::error::{Error, Result};
use crate::vector::Vector;

/// One truth value per lane of a `Vector<T, N>`.
///
/// # Examples
///
/// ```rust
/// use lanewise::{Mask, Vector, cmp_lt};
///
/// let m = cmp_lt(Vector::from_array([1i32, 5, -3, 7]), Vector::from_array([2, 5, -1, 7]));
/// assert_eq!(m.to_bools(), [true, false, true, false]);
/// assert_eq!(m.count_true(), 2);
/// assert_eq!(m, Mask::from_bools([true, false, true, false]));
/// ```
#[derive(Clone, Copy)]
pub struct Mask<T: Element, const N: usize> {
    bits: [T::Bits; N],
    _kind: PhantomData<T>,
}

impl<T: Element, const N: usize> Mask<T, N> {
    /// Wraps lanes already known to be `TRUE` or `FALSE`
    #[inline]
    pub(crate) const fn from_bits_unchecked(bits: [T::Bits; N]) -> Self {
        Self {
            bits,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn to_bits(self) -> [T::Bits; N] {
        self.bits
    }

    /// Reuses the lanes for another element type of the same width
    #[inline]
    pub(crate) fn retag<U: Element<Bits = T::Bits>>(self) -> Mask<U, N> {
        Mask::from_bits_unchecked(self.bits)
    }

    #[inline]
    fn lane_bits(value: bool) -> T::Bits {
        if value {
            <T::Bits as MaskBits>::TRUE
        } else {
            <T::Bits as MaskBits>::FALSE
        }
    }

    /// Every lane set to `value`
    #[inline]
    pub fn splat(value: bool) -> Self {
        Self::from_bits_unchecked([Self::lane_bits(value); N])
    }

    #[inline]
    pub fn from_bools(values: [bool; N]) -> Self {
        Self::from_bits_unchecked(values.map(Self::lane_bits))
    }

    #[inline]
    pub fn to_bools(self) -> [bool; N] {
        self.bits.map(|lane| lane != <T::Bits as MaskBits>::FALSE)
    }

    /// Number of lanes
    #[inline]
    pub const fn lanes() -> usize {
        N
    }

    /// The truth value of one lane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaneOutOfRange`] when `lane >= N`.
    pub fn test(&self, lane: usize) -> Result<bool> {
        self.bits
            .get(lane)
            .map(|bits| *bits != <T::Bits as MaskBits>::FALSE)
            .ok_or(Error::LaneOutOfRange { lane, lanes: N })
    }

    /// Whether at least one lane is true
    pub fn any(&self) -> bool {
        self.bits.iter().any(|bits| *bits != <T::Bits as MaskBits>::FALSE)
    }

    /// Whether every lane is true (vacuously true for `N == 0`)
    pub fn all(&self) -> bool {
        self.bits.iter().all(|bits| *bits != <T::Bits as MaskBits>::FALSE)
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    pub fn count_true(&self) -> usize {
        self.bits
            .iter()
            .filter(|bits| **bits != <T::Bits as MaskBits>::FALSE)
            .count()
    }

    /// The canonical boolean vector behind the mask: all ones per true lane,
    /// zero per false lane, at the element width of `T`.
    ///
    /// ```rust
    /// use lanewise::{Mask, Vector};
    ///
    /// let m = Mask::<f32, 4>::from_bools([true, false, false, true]);
    /// assert_eq!(m.unmask(), Vector::from_array([u32::MAX, 0, 0, u32::MAX]));
    /// ```
    #[inline]
    pub fn unmask(self) -> Vector<T::Bits, N> {
        Vector::from_array(self.bits)
    }

    /// Picks each lane from `if_true` where the mask is set and from
    /// `if_false` elsewhere.
    pub fn select(self, if_true: Vector<T, N>, if_false: Vector<T, N>) -> Vector<T, N> {
        let bools = self.to_bools();
        let (a, b) = (if_true.as_array(), if_false.as_array());
        Vector::from_array(core::array::from_fn(|lane| if bools[lane] { a[lane] } else { b[lane] }))
    }
}

impl<T: Element, const N: usize> Default for Mask<T, N> {
    /// All lanes false
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<T: Element, const N: usize> PartialEq for Mask<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Element, const N: usize> Eq for Mask<T, N> {}

impl<T: Element, const N: usize> Hash for Mask<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bools().hash(state);
    }
}

impl<T: Element, const N: usize> fmt::Debug for Mask<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mask").field(&self.to_bools()).finish()
    }
}

impl<T: Element, const N: usize> From<[bool; N]> for Mask<T, N> {
    fn from(values: [bool; N]) -> Self {
        Self::from_bools(values)
    }
}

impl<T: Element, const N: usize> From<Mask<T, N>> for [bool; N] {
    fn from(mask: Mask<T, N>) -> Self {
        mask.to_bools()
    }
}

macro_rules! impl_mask_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Element, const N: usize> $trait for Mask<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut bits = self.bits;
                for (lane, other) in bits.iter_mut().zip(rhs.bits) {
                    *lane = *lane $op other;
                }
                Self::from_bits_unchecked(bits)
            }
        }

        impl<T: Element, const N: usize> $assign_trait for Mask<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_mask_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_mask_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_mask_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T: Element, const N: usize> Not for Mask<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_bits_unchecked(self.bits.map(|lane| !lane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_lanes() {
        let m = Mask::<i16, 4>::from_bools([true, false, true, true]);
        assert_eq!(m.to_bits(), [0xFFFF, 0, 0xFFFF, 0xFFFF]);
        assert_eq!(Mask::<f64, 2>::splat(true).to_bits(), [u64::MAX; 2]);
        assert_eq!(Mask::<u8, 8>::default().to_bits(), [0; 8]);
    }

    #[test]
    fn test_queries() {
        let m = Mask::<u32, 4>::from_bools([false, true, false, true]);
        assert!(m.any());
        assert!(!m.all());
        assert!(!m.none());
        assert_eq!(m.count_true(), 2);
        assert_eq!(m.test(1), Ok(true));
        assert_eq!(m.test(2), Ok(false));
        assert_eq!(m.test(4), Err(Error::LaneOutOfRange { lane: 4, lanes: 4 }));

        assert!(Mask::<i8, 16>::splat(true).all());
        assert!(Mask::<i8, 16>::splat(false).none());
        assert_eq!(Mask::<i8, 16>::lanes(), 16);
    }

    #[test]
    fn test_logic_keeps_canonical_lanes() {
        let a = Mask::<i32, 4>::from_bools([true, true, false, false]);
        let b = Mask::<i32, 4>::from_bools([true, false, true, false]);

        assert_eq!((a & b).to_bools(), [true, false, false, false]);
        assert_eq!((a | b).to_bools(), [true, true, true, false]);
        assert_eq!((a ^ b).to_bools(), [false, true, true, false]);
        assert_eq!((!a).to_bits(), [0, 0, u32::MAX, u32::MAX]);

        let mut c = a;
        c |= b;
        c &= !b;
        assert_eq!(c.to_bools(), [false, true, false, false]);
        c ^= a;
        assert_eq!(c.to_bools(), [true, false, false, false]);
    }

    #[test]
    fn test_select() {
        let m = Mask::<f32, 4>::from_bools([true, false, false, true]);
        let picked = m.select(Vector::splat(1.0), Vector::from_array([-1.0, -2.0, -3.0, -4.0]));
        assert_eq!(picked.to_array(), [1.0, -2.0, -3.0, 1.0]);
    }

    #[test]
    fn test_retag_and_unmask() {
        let m = Mask::<i64, 2>::from_bools([false, true]);
        let u: Mask<f64, 2> = m.retag();
        assert_eq!(u.to_bools(), [false, true]);
        assert_eq!(m.unmask().to_array(), [0, u64::MAX]);
    }

    #[test]
    fn test_debug_output() {
        let m = Mask::<u8, 3>::from_bools([true, false, true]);
        assert_eq!(format!("{:?}", m), "Mask([true, false, true])");
    }
}
