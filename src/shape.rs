//! Reinterpretable shapes
//!
//! [`Lanes`] is implemented for every [`Vector`] and [`Mask`] whose total size
//! is one of 64, 128, 256 or 512 bits:
//!
//! | Element width | Lane counts      |
//! |---------------|------------------|
//! | 8 bits        | 8, 16, 32, 64    |
//! | 16 bits       | 4, 8, 16, 32     |
//! | 32 bits       | 2, 4, 8, 16      |
//! | 64 bits       | 1, 2, 4, 8       |
//!
//! The total size is a type, [`Lanes::SizeTag`], so two shapes of different
//! sizes are told apart while type checking and a reinterpretation between them
//! is rejected before any code is generated.
//!
//! Comparisons do not need any of this; they accept any `N`.

use core::fmt::Debug;

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::cmp::cmp_ne;
use crate::element::{Element, MaskBits};
use crate::mask::Mask;
use crate::vector::Vector;

pub(crate) mod sealed {
    use super::*;

    pub trait Sealed {}

    /// Raw storage of a shape, used for the byte copy behind every cast
    pub trait Repr: Sized {
        type Raw: Copy + FromBytes + IntoBytes + Immutable;

        fn into_raw(self) -> Self::Raw;

        fn from_raw(raw: Self::Raw) -> Self;
    }
}

/// Total size class of a shape
pub trait SizeTag: sealed::Sealed + Copy + Debug + Default + Send + Sync + 'static {
    const BITS: usize;
}

macro_rules! size_tags {
    ($($name:ident = $bits:literal),*) => {
        $(
            #[doc = concat!("Shapes occupying ", stringify!($bits), " bits")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl SizeTag for $name {
                const BITS: usize = $bits;
            }

            impl SameSize<$name> for $name {}
        )*
    };
}

size_tags!(Bits64 = 64, Bits128 = 128, Bits256 = 256, Bits512 = 512);

/// Whether a shape is a plain vector or a mask
pub trait LaneKind: sealed::Sealed + Copy + Debug + Default + Send + Sync + 'static {
    const IS_MASK: bool;
}

/// Marks [`Vector`] shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VectorKind;

/// Marks [`Mask`] shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaskKind;

impl sealed::Sealed for VectorKind {}
impl sealed::Sealed for MaskKind {}

impl LaneKind for VectorKind {
    const IS_MASK: bool = false;
}

impl LaneKind for MaskKind {
    const IS_MASK: bool = true;
}

/// A vector or mask shape that takes part in reinterpretation.
///
/// Sealed; see the module documentation for the implemented shapes.
pub trait Lanes: sealed::Repr + Copy + Debug + Send + Sync + 'static {
    type Elem: Element;
    type Kind: LaneKind;
    type SizeTag: SizeTag;

    const LANES: usize;
    const BITS: usize = <Self::SizeTag as SizeTag>::BITS;
    const IS_MASK: bool = <Self::Kind as LaneKind>::IS_MASK;
}

/// A mask shape and the plain vector it unmasks to.
pub trait MaskLanes: Lanes<Kind = MaskKind> {
    /// The unsigned vector of the same shape holding the canonical lanes
    type Base: Lanes<
            Kind = VectorKind,
            SizeTag = Self::SizeTag,
            Elem = <Self::Elem as Element>::Bits,
        >;

    /// All ones per true lane, zero per false lane
    fn unmask(self) -> Self::Base;

    /// A lane is true iff the base lane is non-zero
    fn remask(base: Self::Base) -> Self;
}

/// Two shapes occupy the same number of bits.
#[diagnostic::on_unimplemented(
    message = "size mismatch: `{Self}` and `{Other}` are different sizes",
    label = "cannot reinterpret between shapes of different sizes"
)]
pub trait SameSize<Other: SizeTag>: SizeTag {}

/// Two mask lane representations have the same width.
#[diagnostic::on_unimplemented(
    message = "conversions between masks with different element size is not allowed",
    label = "`{Self}` lanes cannot be copied into `{Other}` lanes",
    note = "use the `Remask` strategy to re-derive the mask lane by lane"
)]
pub trait SameElementSize<Other: MaskBits>: MaskBits {}

impl<B: MaskBits> SameElementSize<B> for B {}

macro_rules! shapes {
    ($($t:ty => $bits:ty: [$($n:literal => $size:ident),*];)*) => {
        $($(
            impl sealed::Repr for Vector<$t, $n> {
                type Raw = [$t; $n];

                #[inline]
                fn into_raw(self) -> Self::Raw {
                    self.to_array()
                }

                #[inline]
                fn from_raw(raw: Self::Raw) -> Self {
                    Vector::from_array(raw)
                }
            }

            impl Lanes for Vector<$t, $n> {
                type Elem = $t;
                type Kind = VectorKind;
                type SizeTag = $size;
                const LANES: usize = $n;
            }

            impl sealed::Repr for Mask<$t, $n> {
                type Raw = [$bits; $n];

                #[inline]
                fn into_raw(self) -> Self::Raw {
                    self.to_bits()
                }

                #[inline]
                fn from_raw(raw: Self::Raw) -> Self {
                    Mask::from_bits_unchecked(raw)
                }
            }

            impl Lanes for Mask<$t, $n> {
                type Elem = $t;
                type Kind = MaskKind;
                type SizeTag = $size;
                const LANES: usize = $n;
            }

            impl MaskLanes for Mask<$t, $n> {
                type Base = Vector<$bits, $n>;

                #[inline]
                fn unmask(self) -> Self::Base {
                    Mask::unmask(self)
                }

                #[inline]
                fn remask(base: Self::Base) -> Self {
                    cmp_ne(base, Vector::zero()).retag()
                }
            }
        )*)*
    };
}

shapes! {
    i8 => u8: [8 => Bits64, 16 => Bits128, 32 => Bits256, 64 => Bits512];
    u8 => u8: [8 => Bits64, 16 => Bits128, 32 => Bits256, 64 => Bits512];
    i16 => u16: [4 => Bits64, 8 => Bits128, 16 => Bits256, 32 => Bits512];
    u16 => u16: [4 => Bits64, 8 => Bits128, 16 => Bits256, 32 => Bits512];
    i32 => u32: [2 => Bits64, 4 => Bits128, 8 => Bits256, 16 => Bits512];
    u32 => u32: [2 => Bits64, 4 => Bits128, 8 => Bits256, 16 => Bits512];
    f32 => u32: [2 => Bits64, 4 => Bits128, 8 => Bits256, 16 => Bits512];
    i64 => u64: [1 => Bits64, 2 => Bits128, 4 => Bits256, 8 => Bits512];
    u64 => u64: [1 => Bits64, 2 => Bits128, 4 => Bits256, 8 => Bits512];
    f64 => u64: [1 => Bits64, 2 => Bits128, 4 => Bits256, 8 => Bits512];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint<T: Lanes>() -> (usize, usize, bool) {
        (T::BITS, T::LANES, T::IS_MASK)
    }

    #[test]
    fn test_shape_metadata() {
        assert_eq!(footprint::<Vector<i8, 16>>(), (128, 16, false));
        assert_eq!(footprint::<Mask<f32, 8>>(), (256, 8, true));
        assert_eq!(footprint::<Vector<u64, 1>>(), (64, 1, false));
        assert_eq!(footprint::<Mask<u16, 32>>(), (512, 32, true));
    }

    fn same_size<A: SameSize<B>, B: SizeTag>() -> (usize, usize) {
        (A::BITS, B::BITS)
    }

    #[test]
    fn test_every_tag_matches_itself() {
        assert_eq!(same_size::<Bits64, Bits64>(), (64, 64));
        assert_eq!(same_size::<Bits128, Bits128>(), (128, 128));
        assert_eq!(same_size::<Bits256, Bits256>(), (256, 256));
        assert_eq!(same_size::<Bits512, Bits512>(), (512, 512));
    }

    #[test]
    fn test_size_matches_storage() {
        fn check<T: Lanes>() {
            assert_eq!(std::mem::size_of::<T>() * 8, T::BITS);
            assert_eq!(std::mem::size_of::<<T as sealed::Repr>::Raw>() * 8, T::BITS);
        }

        check::<Vector<i16, 4>>();
        check::<Mask<i16, 4>>();
        check::<Vector<f64, 8>>();
        check::<Mask<f64, 8>>();
        check::<Vector<u8, 64>>();
        check::<Mask<i32, 2>>();
    }

    #[test]
    fn test_unmask_and_remask() {
        let m = Mask::<f32, 4>::from_bools([true, false, true, false]);
        let base = MaskLanes::unmask(m);
        assert_eq!(base.to_array(), [u32::MAX, 0, u32::MAX, 0]);

        // Any non-zero lane counts as true.
        let back = <Mask<f32, 4> as MaskLanes>::remask(Vector::from_array([1, 0, 0x8000_0000, 0]));
        assert_eq!(back, m);
        assert_eq!(back.to_bits(), [u32::MAX, 0, u32::MAX, 0]);
    }
}
