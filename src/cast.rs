//! Bit reinterpretation between vectors and masks
//!
//! [`reinterpret`] copies the bits of one shape into another shape of the same
//! total size. Which physical route it takes is decided from the two types
//! alone:
//!
//! | Source | Destination | Route                                          |
//! |--------|-------------|------------------------------------------------|
//! | vector | vector      | MEMCPY: raw byte copy                          |
//! | vector | mask        | rejected while type checking                   |
//! | mask   | vector      | UNMASK: canonical lanes, then byte copy        |
//! | mask   | mask        | MEMCPY for equal lane widths, REMASK otherwise |
//!
//! REMASK unmasks the source, copies those bytes into an unsigned vector of the
//! destination lane width and derives the destination mask with
//! [`cmp_ne`](crate::cmp_ne) against zero, the same predicate the comparison
//! engine exposes. Every destination lane that overlaps a true source lane
//! becomes true.
//!
//! [`reinterpret_with`] picks the mask-to-mask route explicitly. It has no
//! effect on routes that do not go from a mask to a mask.
//!
//! # Examples
//!
//! ```rust
//! use lanewise::{Mask, Vector, cmp_lt, reinterpret};
//!
//! // Vector to vector: raw bits.
//! let v = Vector::from_array([1.0f32, -2.0, 0.5, 0.0]);
//! let bits: Vector<u32, 4> = reinterpret(v);
//! assert_eq!(bits[0], 1.0f32.to_bits());
//!
//! // Mask to vector: the canonical lanes.
//! let m = cmp_lt(Vector::from_array([1i32, 5, -3, 7]), Vector::from_array([2, 5, -1, 7]));
//! let bytes: Vector<u8, 16> = reinterpret(m);
//! assert_eq!(&bytes.as_array()[..8], &[0xFFu8, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
//!
//! // Mask to mask of another lane width: truth is carried over.
//! let wide: Mask<i64, 2> = reinterpret(m);
//! assert_eq!(wide.to_bools(), [true, true]);
//! ```
//!
//! A plain vector never becomes a mask:
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Vector, reinterpret};
//!
//! let v = Vector::<i32, 4>::splat(-1);
//! let _m: Mask<i32, 4> = reinterpret(v);
//! ```
//!
//! not even through an explicit route:
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Remask, Vector, reinterpret_with};
//!
//! let v = Vector::<u8, 16>::splat(0xFF);
//! let _m: Mask<u8, 16> = reinterpret_with::<Remask, _, _>(v);
//! ```
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Memcpy, Vector, reinterpret_with};
//!
//! let v = Vector::<f32, 8>::splat(1.0);
//! let _m: Mask<f32, 8> = reinterpret_with::<Memcpy, _, _>(v);
//! ```
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Unmask, Vector, reinterpret_with};
//!
//! let v = Vector::<u64, 2>::splat(u64::MAX);
//! let _m: Mask<u64, 2> = reinterpret_with::<Unmask, _, _>(v);
//! ```
//!
//! Both sides must have the same size:
//!
//! ```compile_fail,E0277
//! use lanewise::{Vector, reinterpret};
//!
//! let v = Vector::<u32, 4>::splat(1);
//! let _w: Vector<u8, 32> = reinterpret(v);
//! ```
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Vector, cmp_eq, reinterpret};
//!
//! let m = cmp_eq(Vector::<f64, 2>::zero(), Vector::zero());
//! let _n: Mask<f32, 8> = reinterpret(m);
//! ```
//!
//! And a byte copy between masks needs lanes of the same width:
//!
//! ```compile_fail,E0277
//! use lanewise::{Mask, Memcpy, Vector, cmp_lt, reinterpret_with};
//!
//! let m = cmp_lt(Vector::<i32, 4>::splat(0), Vector::splat(1));
//! let _n: Mask<i16, 8> = reinterpret_with::<Memcpy, _, _>(m);
//! ```

use core::marker::PhantomData;

use zerocopy::{FromZeros, IntoBytes};

use crate::element::{Element, MaskBits};
use crate::shape::{Lanes, MaskKind, MaskLanes, SameElementSize, SameSize, VectorKind};

/// The physical route of one reinterpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastStrategy {
    /// Raw byte copy
    Memcpy,
    /// Canonical lanes of the source mask, then a byte copy
    Unmask,
    /// Unmask, byte copy, then not-equal-zero per destination lane
    Remask,
    /// The conversion does not exist
    Reject,
}

impl CastStrategy {
    /// The route [`reinterpret`] takes for a pair of shapes with these
    /// properties.
    pub const fn select(src_is_mask: bool, dst_is_mask: bool, same_element_width: bool) -> Self {
        match (src_is_mask, dst_is_mask) {
            (false, false) => Self::Memcpy,
            (false, true) => Self::Reject,
            (true, false) => Self::Unmask,
            (true, true) if same_element_width => Self::Memcpy,
            (true, true) => Self::Remask,
        }
    }

    /// The route [`reinterpret`] takes from `T` to `R`.
    ///
    /// ```rust
    /// use lanewise::{CastStrategy, Mask, Vector};
    ///
    /// assert_eq!(CastStrategy::of::<Mask<i8, 16>, Mask<u8, 16>>(), CastStrategy::Memcpy);
    /// assert_eq!(CastStrategy::of::<Mask<i8, 16>, Mask<f64, 2>>(), CastStrategy::Remask);
    /// assert_eq!(CastStrategy::of::<Vector<i8, 16>, Mask<i8, 16>>(), CastStrategy::Reject);
    /// ```
    pub const fn of<T: Lanes, R: Lanes>() -> Self {
        Self::select(
            T::IS_MASK,
            R::IS_MASK,
            <T::Elem as Element>::KIND.bits() == <R::Elem as Element>::KIND.bits(),
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Memcpy => "memcpy",
            Self::Unmask => "unmask",
            Self::Remask => "remask",
            Self::Reject => "reject",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Selects the mask-to-mask route of [`reinterpret_with`].
pub trait MaskCast: sealed::Sealed + Copy + Default + 'static {
    /// The forced route, `None` when it depends on the lane widths
    const STRATEGY: Option<CastStrategy>;
}

/// Byte copy; mask lanes must have the same width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Memcpy;

/// Unmask, then byte copy; mask lanes must have the same width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unmask;

/// Unmask, byte copy, then not-equal-zero; any lane widths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Remask;

/// [`Memcpy`] for equal lane widths, [`Remask`] otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Auto;

macro_rules! mask_cast {
    ($($name:ident => $strategy:expr;)*) => {
        $(
            impl sealed::Sealed for $name {}

            impl MaskCast for $name {
                const STRATEGY: Option<CastStrategy> = $strategy;
            }
        )*
    };
}

mask_cast! {
    Memcpy => Some(CastStrategy::Memcpy);
    Unmask => Some(CastStrategy::Unmask);
    Remask => Some(CastStrategy::Remask);
    Auto => None;
}

/// The route [`Auto`] takes between two mask lane representations
pub trait DefaultMaskCast<Dst: MaskBits>: MaskBits {
    type Strategy: MaskCast;
}

macro_rules! default_mask_cast {
    ($($src:ty => [$($dst:ty: $strategy:ident),*];)*) => {
        $($(
            impl DefaultMaskCast<$dst> for $src {
                type Strategy = $strategy;
            }
        )*)*
    };
}

default_mask_cast! {
    u8 => [u8: Memcpy, u16: Remask, u32: Remask, u64: Remask];
    u16 => [u8: Remask, u16: Memcpy, u32: Remask, u64: Remask];
    u32 => [u8: Remask, u16: Remask, u32: Memcpy, u64: Remask];
    u64 => [u8: Remask, u16: Remask, u32: Remask, u64: Memcpy];
}

/// Type-level key of the dispatch table: source kind, destination kind and
/// the requested mask-to-mask strategy.
pub struct Route<Src, Dst, S>(PhantomData<(Src, Dst, S)>);

/// One row of the dispatch table.
#[diagnostic::on_unimplemented(
    message = "no reinterpretation route from `{T}` to `{R}`",
    label = "cannot reinterpret `{T}` as `{R}`"
)]
pub trait CastRoute<T: Lanes, R: Lanes> {
    fn cast(t: T) -> R;
}

/// The mask lane representation of a shape's element type
type LaneBits<T> = <<T as Lanes>::Elem as Element>::Bits;

/// Raw byte copy between two shapes of the same size.
#[inline]
fn bitcopy<T: Lanes, R: Lanes>(t: T) -> R {
    const {
        assert!(
            core::mem::size_of::<T::Raw>() == core::mem::size_of::<R::Raw>(),
            "Size mismatch"
        )
    };
    let src = t.into_raw();
    let mut dst = <R::Raw as FromZeros>::new_zeroed();
    dst.as_mut_bytes().copy_from_slice(src.as_bytes());
    R::from_raw(dst)
}

impl<T, R, S> CastRoute<T, R> for Route<VectorKind, VectorKind, S>
where
    T: Lanes<Kind = VectorKind>,
    R: Lanes<Kind = VectorKind>,
    S: MaskCast,
{
    #[inline]
    fn cast(t: T) -> R {
        bitcopy(t)
    }
}

/// Plain lanes read as a mask.
///
/// Has no implementations: a mask only comes from a comparison or from
/// another mask.
#[diagnostic::on_unimplemented(
    message = "conversion from non-mask type to a mask type is not allowed",
    label = "cannot reinterpret `{Self}` as `{R}`",
    note = "masks come from comparisons, `Mask::splat`, `Mask::from_bools` or other masks"
)]
pub trait VectorToMask<R>: sealed::Sealed {
    fn into_mask(self) -> R;
}

impl<T, R, S> CastRoute<T, R> for Route<VectorKind, MaskKind, S>
where
    T: Lanes<Kind = VectorKind> + VectorToMask<R>,
    R: Lanes<Kind = MaskKind>,
    S: MaskCast,
{
    #[inline]
    fn cast(t: T) -> R {
        t.into_mask()
    }
}

impl<T, R, S> CastRoute<T, R> for Route<MaskKind, VectorKind, S>
where
    T: MaskLanes,
    R: Lanes<Kind = VectorKind>,
    S: MaskCast,
{
    #[inline]
    fn cast(t: T) -> R {
        bitcopy::<T::Base, R>(t.unmask())
    }
}

impl<T, R> CastRoute<T, R> for Route<MaskKind, MaskKind, Memcpy>
where
    T: MaskLanes,
    R: MaskLanes,
    LaneBits<T>: SameElementSize<LaneBits<R>>,
{
    #[inline]
    fn cast(t: T) -> R {
        bitcopy(t)
    }
}

impl<T, R> CastRoute<T, R> for Route<MaskKind, MaskKind, Unmask>
where
    T: MaskLanes,
    R: MaskLanes,
    LaneBits<T>: SameElementSize<LaneBits<R>>,
{
    #[inline]
    fn cast(t: T) -> R {
        bitcopy::<T::Base, R>(t.unmask())
    }
}

impl<T, R> CastRoute<T, R> for Route<MaskKind, MaskKind, Remask>
where
    T: MaskLanes,
    R: MaskLanes,
{
    #[inline]
    fn cast(t: T) -> R {
        R::remask(bitcopy::<T::Base, R::Base>(t.unmask()))
    }
}

/// The mask-to-mask route [`Auto`] resolves to
type AutoRoute<T, R> =
    Route<MaskKind, MaskKind, <LaneBits<T> as DefaultMaskCast<LaneBits<R>>>::Strategy>;

impl<T, R> CastRoute<T, R> for Route<MaskKind, MaskKind, Auto>
where
    T: MaskLanes,
    R: MaskLanes,
    LaneBits<T>: DefaultMaskCast<LaneBits<R>>,
    AutoRoute<T, R>: CastRoute<T, R>,
{
    #[inline]
    fn cast(t: T) -> R {
        <AutoRoute<T, R> as CastRoute<T, R>>::cast(t)
    }
}

/// Reinterprets `t` as `R`, choosing the route from the two types.
///
/// Fails to compile when the sizes differ or when `R` is a mask and `T` is
/// not. See the [module documentation](self) for the routes.
#[inline]
pub fn reinterpret<R, T>(t: T) -> R
where
    T: Lanes,
    R: Lanes,
    T::SizeTag: SameSize<R::SizeTag>,
    Route<T::Kind, R::Kind, Auto>: CastRoute<T, R>,
{
    <Route<T::Kind, R::Kind, Auto> as CastRoute<T, R>>::cast(t)
}

/// Reinterprets `t` as `R` with an explicit mask-to-mask route.
///
/// ```rust
/// use lanewise::{Mask, Remask, Unmask, reinterpret_with};
///
/// let m = Mask::<i8, 16>::from_bools([true; 16]);
/// let same: Mask<u8, 16> = reinterpret_with::<Unmask, _, _>(m);
/// assert!(same.all());
///
/// let wide: Mask<u16, 8> = reinterpret_with::<Remask, _, _>(m);
/// assert!(wide.all());
/// ```
#[inline]
pub fn reinterpret_with<S, R, T>(t: T) -> R
where
    S: MaskCast,
    T: Lanes,
    R: Lanes,
    T::SizeTag: SameSize<R::SizeTag>,
    Route<T::Kind, R::Kind, S>: CastRoute<T, R>,
{
    <Route<T::Kind, R::Kind, S> as CastRoute<T, R>>::cast(t)
}
