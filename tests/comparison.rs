//! Lane-wise comparison properties
//!
//! Every predicate is checked against the scalar operator applied lane by
//! lane, for every element type and for lane counts that fit one register,
//! span several registers, and leave a tail.

use lanewise::{
    Error, Vector, cmp_eq, cmp_ge, cmp_ge_scalar, cmp_gt, cmp_le, cmp_lt, cmp_lt_scalar, cmp_ne,
    scalar_cmp_lt, scalar_cmp_ne,
};
use proptest::prelude::*;
use rstest::rstest;

macro_rules! lane_properties {
    ($($module:ident: $t:ty, $n:literal;)*) => {
        $(
            mod $module {
                use super::*;

                fn lanes() -> impl Strategy<Value = Vector<$t, $n>> {
                    prop::collection::vec(any::<$t>(), $n)
                        .prop_map(|lanes| Vector::<$t, $n>::from_slice(&lanes).unwrap())
                }

                fn expected(
                    a: Vector<$t, $n>,
                    b: Vector<$t, $n>,
                    op: fn(&$t, &$t) -> bool,
                ) -> [bool; $n] {
                    std::array::from_fn(|i| op(&a[i], &b[i]))
                }

                proptest! {
                    #[test]
                    fn prop_lt_matches_lanes(a in lanes(), b in lanes()) {
                        prop_assert_eq!(cmp_lt(a, b).to_bools(), expected(a, b, PartialOrd::lt));
                    }

                    #[test]
                    fn prop_derived_predicates_match_lanes(a in lanes(), b in lanes()) {
                        prop_assert_eq!(cmp_gt(a, b).to_bools(), expected(a, b, PartialOrd::gt));
                        prop_assert_eq!(cmp_le(a, b).to_bools(), expected(a, b, PartialOrd::le));
                        prop_assert_eq!(cmp_ge(a, b).to_bools(), expected(a, b, PartialOrd::ge));
                        prop_assert_eq!(cmp_eq(a, b).to_bools(), expected(a, b, PartialEq::eq));
                        prop_assert_eq!(cmp_ne(a, b).to_bools(), expected(a, b, PartialEq::ne));
                    }

                    #[test]
                    fn prop_self_comparison(a in lanes()) {
                        // Only NaN lanes differ from themselves.
                        prop_assert!(cmp_lt(a, a).none());
                        prop_assert_eq!(cmp_eq(a, a), !cmp_ne(a, a));
                    }

                    #[test]
                    fn prop_scalar_broadcast(a in lanes(), s in any::<$t>()) {
                        let splat = Vector::<$t, $n>::splat(s);
                        prop_assert_eq!(cmp_lt_scalar(a, s), cmp_lt(a, splat));
                        prop_assert_eq!(scalar_cmp_lt(s, a), cmp_lt(splat, a));
                        prop_assert_eq!(cmp_ge_scalar(a, s), cmp_ge(a, splat));
                        prop_assert_eq!(scalar_cmp_ne(s, a), cmp_ne(splat, a));
                    }
                }
            }
        )*
    };
}

lane_properties! {
    i8x16: i8, 16;
    i8x67: i8, 67;
    u8x32: u8, 32;
    u8x64: u8, 64;
    i16x8: i16, 8;
    u16x13: u16, 13;
    i32x4: i32, 4;
    i32x37: i32, 37;
    u32x16: u32, 16;
    i64x2: i64, 2;
    u64x5: u64, 5;
    f32x8: f32, 8;
    f32x19: f32, 19;
    f64x4: f64, 4;
    f64x3: f64, 3;
}

#[test]
fn test_documented_example() {
    let a = Vector::from_array([1i32, 5, -3, 7]);
    let b = Vector::from_array([2i32, 5, -1, 7]);
    assert_eq!(cmp_lt(a, b).to_bools(), [true, false, true, false]);
}

#[rstest]
#[case::nan_left(f32::NAN, 1.0, false)]
#[case::nan_right(1.0, f32::NAN, false)]
#[case::nan_both(f32::NAN, f32::NAN, false)]
#[case::signed_zeros(-0.0, 0.0, false)]
#[case::negative_infinity(f32::NEG_INFINITY, f32::MIN, true)]
#[case::infinity(f32::MAX, f32::INFINITY, true)]
#[case::subnormal(0.0, f32::MIN_POSITIVE / 2.0, true)]
fn test_f32_lt_cases(#[case] a: f32, #[case] b: f32, #[case] expected: bool) {
    let m = cmp_lt(Vector::<f32, 8>::splat(a), Vector::splat(b));
    assert_eq!(m.all(), expected);
    assert_eq!(m.none(), !expected);
}

#[rstest]
#[case::nan_left(f64::NAN, 1.0, false)]
#[case::nan_right(1.0, f64::NAN, false)]
#[case::ordered(-1.5, 2.25, true)]
#[case::equal(3.0, 3.0, false)]
fn test_f64_lt_cases(#[case] a: f64, #[case] b: f64, #[case] expected: bool) {
    let m = cmp_lt_scalar(Vector::<f64, 5>::splat(a), b);
    assert_eq!(m.to_bools(), [expected; 5]);
}

#[rstest]
#[case::top_bit(0x80, 0x7F)]
#[case::all_ones(0xFF, 0x00)]
#[case::sign_bit_only(0x80, 0x00)]
fn test_unsigned_order_ignores_sign_bit(#[case] high: u8, #[case] low: u8) {
    let a = Vector::<u8, 32>::splat(low);
    let b = Vector::<u8, 32>::splat(high);
    assert!(cmp_lt(a, b).all());
    assert!(cmp_gt(b, a).all());

    // The same bits read as signed order the other way round.
    let sa = Vector::<i8, 32>::splat(low as i8);
    let sb = Vector::<i8, 32>::splat(high as i8);
    assert!(cmp_lt(sb, sa).all());
}

#[rstest]
#[case::u16(u16::MAX as u64, 1)]
#[case::u32(u32::MAX as u64, 1 << 31)]
#[case::u64(u64::MAX, 1 << 63)]
fn test_unsigned_wide_lanes(#[case] high: u64, #[case] low: u64) {
    assert!(cmp_lt(Vector::<u64, 4>::splat(low), Vector::splat(high)).all());
    assert!(cmp_ge_scalar(Vector::<u64, 4>::splat(high), low).all());
}

#[test]
fn test_mixed_lanes_across_segments() {
    // Alternating answers make a misplaced segment boundary visible.
    let a: Vector<i16, 41> =
        Vector::from_array(std::array::from_fn(|i| if i % 2 == 0 { -5 } else { 5 }));
    let m = cmp_lt_scalar(a, 0);
    for lane in 0..41 {
        assert_eq!(m.test(lane), Ok(lane % 2 == 0), "lane {}", lane);
    }
    assert_eq!(m.test(41), Err(Error::LaneOutOfRange { lane: 41, lanes: 41 }));
}
