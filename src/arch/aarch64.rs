//! NEON lowering for aarch64
//!
//! NEON has a native less-than and equality for every element type, including
//! unsigned, 64-bit and double precision lanes, so each entry point is a single
//! 128-bit segment loop followed by the portable tail.

use core::arch::aarch64::*;

use super::scalar;

macro_rules! neon_fn {
    ($name:ident, $t:ty => $b:ty, $load:ident, $store:ident, $cmp:ident) => {
        pub fn $name(a: &[$t], b: &[$t], out: &mut [$b]) {
            debug_assert_eq!(a.len(), b.len());
            debug_assert_eq!(a.len(), out.len());

            const STEP: usize = 16 / core::mem::size_of::<$t>();
            let mut i = 0;

            // SAFETY: NEON is enabled at build time; every load and store covers
            // lanes `i..i + STEP`, inside `a`, `b` and `out`.
            unsafe {
                while i + STEP <= a.len() {
                    let va = $load(a.as_ptr().add(i));
                    let vb = $load(b.as_ptr().add(i));
                    $store(out.as_mut_ptr().add(i), $cmp(va, vb));
                    i += STEP;
                }
            }

            scalar::$name(&a[i..], &b[i..], &mut out[i..]);
        }
    };
}

// Less than
neon_fn!(lt_i8, i8 => u8, vld1q_s8, vst1q_u8, vcltq_s8);
neon_fn!(lt_u8, u8 => u8, vld1q_u8, vst1q_u8, vcltq_u8);
neon_fn!(lt_i16, i16 => u16, vld1q_s16, vst1q_u16, vcltq_s16);
neon_fn!(lt_u16, u16 => u16, vld1q_u16, vst1q_u16, vcltq_u16);
neon_fn!(lt_i32, i32 => u32, vld1q_s32, vst1q_u32, vcltq_s32);
neon_fn!(lt_u32, u32 => u32, vld1q_u32, vst1q_u32, vcltq_u32);
neon_fn!(lt_i64, i64 => u64, vld1q_s64, vst1q_u64, vcltq_s64);
neon_fn!(lt_u64, u64 => u64, vld1q_u64, vst1q_u64, vcltq_u64);
neon_fn!(lt_f32, f32 => u32, vld1q_f32, vst1q_u32, vcltq_f32);
neon_fn!(lt_f64, f64 => u64, vld1q_f64, vst1q_u64, vcltq_f64);

// Equality
neon_fn!(eq_i8, i8 => u8, vld1q_s8, vst1q_u8, vceqq_s8);
neon_fn!(eq_u8, u8 => u8, vld1q_u8, vst1q_u8, vceqq_u8);
neon_fn!(eq_i16, i16 => u16, vld1q_s16, vst1q_u16, vceqq_s16);
neon_fn!(eq_u16, u16 => u16, vld1q_u16, vst1q_u16, vceqq_u16);
neon_fn!(eq_i32, i32 => u32, vld1q_s32, vst1q_u32, vceqq_s32);
neon_fn!(eq_u32, u32 => u32, vld1q_u32, vst1q_u32, vceqq_u32);
neon_fn!(eq_i64, i64 => u64, vld1q_s64, vst1q_u64, vceqq_s64);
neon_fn!(eq_u64, u64 => u64, vld1q_u64, vst1q_u64, vceqq_u64);
neon_fn!(eq_f32, f32 => u32, vld1q_f32, vst1q_u32, vceqq_f32);
neon_fn!(eq_f64, f64 => u64, vld1q_f64, vst1q_u64, vceqq_f64);
