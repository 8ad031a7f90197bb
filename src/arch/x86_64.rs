//! x86_64 lowering (SSE2, SSE4.1, SSE4.2, AVX2)
//!
//! Each entry point walks the lanes in native segments: 256-bit AVX2 segments
//! first when AVX2 is enabled at build time, then 128-bit SSE segments, then
//! the portable loop for whatever is left.
//!
//! SSE2 only has signed integer less-than. Unsigned lanes are biased by the
//! sign bit first, which maps unsigned order onto signed order. 64-bit lanes
//! need SSE4.1 (equality) and SSE4.2 (ordering); without them the 128-bit pass
//! is skipped for those element types.

use core::arch::x86_64::*;

use super::scalar;

/// Processes whole segments of `$width` bytes starting at lane `start` and
/// returns the first lane it did not touch.
macro_rules! segment_fn {
    (
        $name:ident, $width:literal, $t:ty => $b:ty, $load:ident, $store:ident,
        |$x:ident, $y:ident| $op:expr
    ) => {
        #[inline]
        pub(super) fn $name(a: &[$t], b: &[$t], out: &mut [$b], start: usize) -> usize {
            const STEP: usize = $width / core::mem::size_of::<$t>();
            let mut i = start;
            // SAFETY: the instruction set is enabled at build time, and every
            // load and store covers lanes `i..i + STEP`, which lie inside `a`, `b`
            // and `out` (all three have the same length).
            unsafe {
                while i + STEP <= a.len() {
                    let $x = $load(a.as_ptr().add(i).cast());
                    let $y = $load(b.as_ptr().add(i).cast());
                    $store(out.as_mut_ptr().add(i).cast(), $op);
                    i += STEP;
                }
            }
            i
        }
    };
}

/// Stand-in for a segment pass the enabled instruction sets cannot express.
macro_rules! no_segment_fn {
    ($name:ident, $t:ty => $b:ty) => {
        #[inline(always)]
        pub(super) fn $name(_: &[$t], _: &[$t], _: &mut [$b], start: usize) -> usize {
            start
        }
    };
}

macro_rules! entry_point {
    ($name:ident, $t:ty => $b:ty, avx2: $avx2:ident, sse: $sse:ident) => {
        pub fn $name(a: &[$t], b: &[$t], out: &mut [$b]) {
            debug_assert_eq!(a.len(), b.len());
            debug_assert_eq!(a.len(), out.len());

            let i = 0;
            #[cfg(target_feature = "avx2")]
            let i = $avx2(a, b, out, i);
            let i = $sse(a, b, out, i);
            scalar::$name(&a[i..], &b[i..], &mut out[i..]);
        }
    };
}

// ============================================================================
// 128-bit SSE segments
// ============================================================================

// Less than (signed)
segment_fn!(lt_i8_sse2, 16, i8 => u8, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmplt_epi8(x, y)
});
segment_fn!(lt_i16_sse2, 16, i16 => u16, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmplt_epi16(x, y)
});
segment_fn!(lt_i32_sse2, 16, i32 => u32, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmplt_epi32(x, y)
});

// Less than (unsigned, sign-biased)
segment_fn!(lt_u8_sse2, 16, u8 => u8, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    let bias = _mm_set1_epi8(i8::MIN);
    _mm_cmplt_epi8(_mm_xor_si128(x, bias), _mm_xor_si128(y, bias))
});
segment_fn!(lt_u16_sse2, 16, u16 => u16, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    let bias = _mm_set1_epi16(i16::MIN);
    _mm_cmplt_epi16(_mm_xor_si128(x, bias), _mm_xor_si128(y, bias))
});
segment_fn!(lt_u32_sse2, 16, u32 => u32, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    let bias = _mm_set1_epi32(i32::MIN);
    _mm_cmplt_epi32(_mm_xor_si128(x, bias), _mm_xor_si128(y, bias))
});

// Less than (64-bit, SSE4.2 only has greater than)
#[cfg(target_feature = "sse4.2")]
segment_fn!(lt_i64_sse42, 16, i64 => u64, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpgt_epi64(y, x)
});
#[cfg(target_feature = "sse4.2")]
segment_fn!(lt_u64_sse42, 16, u64 => u64, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    let bias = _mm_set1_epi64x(i64::MIN);
    _mm_cmpgt_epi64(_mm_xor_si128(y, bias), _mm_xor_si128(x, bias))
});
#[cfg(not(target_feature = "sse4.2"))]
no_segment_fn!(lt_i64_sse42, i64 => u64);
#[cfg(not(target_feature = "sse4.2"))]
no_segment_fn!(lt_u64_sse42, u64 => u64);

// Less than (float, ordered: NaN lanes are false)
segment_fn!(lt_f32_sse2, 16, f32 => u32, _mm_loadu_ps, _mm_storeu_si128, |x, y| {
    _mm_castps_si128(_mm_cmplt_ps(x, y))
});
segment_fn!(lt_f64_sse2, 16, f64 => u64, _mm_loadu_pd, _mm_storeu_si128, |x, y| {
    _mm_castpd_si128(_mm_cmplt_pd(x, y))
});

// Equality
segment_fn!(eq_i8_sse2, 16, i8 => u8, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi8(x, y)
});
segment_fn!(eq_u8_sse2, 16, u8 => u8, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi8(x, y)
});
segment_fn!(eq_i16_sse2, 16, i16 => u16, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi16(x, y)
});
segment_fn!(eq_u16_sse2, 16, u16 => u16, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi16(x, y)
});
segment_fn!(eq_i32_sse2, 16, i32 => u32, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi32(x, y)
});
segment_fn!(eq_u32_sse2, 16, u32 => u32, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi32(x, y)
});
#[cfg(target_feature = "sse4.1")]
segment_fn!(eq_i64_sse41, 16, i64 => u64, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi64(x, y)
});
#[cfg(target_feature = "sse4.1")]
segment_fn!(eq_u64_sse41, 16, u64 => u64, _mm_loadu_si128, _mm_storeu_si128, |x, y| {
    _mm_cmpeq_epi64(x, y)
});
#[cfg(not(target_feature = "sse4.1"))]
no_segment_fn!(eq_i64_sse41, i64 => u64);
#[cfg(not(target_feature = "sse4.1"))]
no_segment_fn!(eq_u64_sse41, u64 => u64);
segment_fn!(eq_f32_sse2, 16, f32 => u32, _mm_loadu_ps, _mm_storeu_si128, |x, y| {
    _mm_castps_si128(_mm_cmpeq_ps(x, y))
});
segment_fn!(eq_f64_sse2, 16, f64 => u64, _mm_loadu_pd, _mm_storeu_si128, |x, y| {
    _mm_castpd_si128(_mm_cmpeq_pd(x, y))
});

// ============================================================================
// 256-bit AVX2 segments
// ============================================================================

#[cfg(target_feature = "avx2")]
mod avx2 {
    use core::arch::x86_64::*;

    // Less than (signed, via greater than with swapped operands)
    segment_fn!(lt_i8_avx2, 32, i8 => u8, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpgt_epi8(y, x)
    });
    segment_fn!(lt_i16_avx2, 32, i16 => u16, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpgt_epi16(y, x)
    });
    segment_fn!(lt_i32_avx2, 32, i32 => u32, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpgt_epi32(y, x)
    });
    segment_fn!(lt_i64_avx2, 32, i64 => u64, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpgt_epi64(y, x)
    });

    // Less than (unsigned, sign-biased)
    segment_fn!(lt_u8_avx2, 32, u8 => u8, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        let bias = _mm256_set1_epi8(i8::MIN);
        _mm256_cmpgt_epi8(_mm256_xor_si256(y, bias), _mm256_xor_si256(x, bias))
    });
    segment_fn!(lt_u16_avx2, 32, u16 => u16, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        let bias = _mm256_set1_epi16(i16::MIN);
        _mm256_cmpgt_epi16(_mm256_xor_si256(y, bias), _mm256_xor_si256(x, bias))
    });
    segment_fn!(lt_u32_avx2, 32, u32 => u32, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        let bias = _mm256_set1_epi32(i32::MIN);
        _mm256_cmpgt_epi32(_mm256_xor_si256(y, bias), _mm256_xor_si256(x, bias))
    });
    segment_fn!(lt_u64_avx2, 32, u64 => u64, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        let bias = _mm256_set1_epi64x(i64::MIN);
        _mm256_cmpgt_epi64(_mm256_xor_si256(y, bias), _mm256_xor_si256(x, bias))
    });

    // Less than (float, ordered and non-signaling)
    segment_fn!(lt_f32_avx2, 32, f32 => u32, _mm256_loadu_ps, _mm256_storeu_si256, |x, y| {
        _mm256_castps_si256(_mm256_cmp_ps::<_CMP_LT_OQ>(x, y))
    });
    segment_fn!(lt_f64_avx2, 32, f64 => u64, _mm256_loadu_pd, _mm256_storeu_si256, |x, y| {
        _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_LT_OQ>(x, y))
    });

    // Equality
    segment_fn!(eq_i8_avx2, 32, i8 => u8, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi8(x, y)
    });
    segment_fn!(eq_u8_avx2, 32, u8 => u8, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi8(x, y)
    });
    segment_fn!(eq_i16_avx2, 32, i16 => u16, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi16(x, y)
    });
    segment_fn!(eq_u16_avx2, 32, u16 => u16, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi16(x, y)
    });
    segment_fn!(eq_i32_avx2, 32, i32 => u32, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi32(x, y)
    });
    segment_fn!(eq_u32_avx2, 32, u32 => u32, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi32(x, y)
    });
    segment_fn!(eq_i64_avx2, 32, i64 => u64, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi64(x, y)
    });
    segment_fn!(eq_u64_avx2, 32, u64 => u64, _mm256_loadu_si256, _mm256_storeu_si256, |x, y| {
        _mm256_cmpeq_epi64(x, y)
    });
    segment_fn!(eq_f32_avx2, 32, f32 => u32, _mm256_loadu_ps, _mm256_storeu_si256, |x, y| {
        _mm256_castps_si256(_mm256_cmp_ps::<_CMP_EQ_OQ>(x, y))
    });
    segment_fn!(eq_f64_avx2, 32, f64 => u64, _mm256_loadu_pd, _mm256_storeu_si256, |x, y| {
        _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_EQ_OQ>(x, y))
    });
}

#[cfg(target_feature = "avx2")]
use self::avx2::*;

// ============================================================================
// Entry points
// ============================================================================

entry_point!(lt_i8, i8 => u8, avx2: lt_i8_avx2, sse: lt_i8_sse2);
entry_point!(lt_u8, u8 => u8, avx2: lt_u8_avx2, sse: lt_u8_sse2);
entry_point!(lt_i16, i16 => u16, avx2: lt_i16_avx2, sse: lt_i16_sse2);
entry_point!(lt_u16, u16 => u16, avx2: lt_u16_avx2, sse: lt_u16_sse2);
entry_point!(lt_i32, i32 => u32, avx2: lt_i32_avx2, sse: lt_i32_sse2);
entry_point!(lt_u32, u32 => u32, avx2: lt_u32_avx2, sse: lt_u32_sse2);
entry_point!(lt_i64, i64 => u64, avx2: lt_i64_avx2, sse: lt_i64_sse42);
entry_point!(lt_u64, u64 => u64, avx2: lt_u64_avx2, sse: lt_u64_sse42);
entry_point!(lt_f32, f32 => u32, avx2: lt_f32_avx2, sse: lt_f32_sse2);
entry_point!(lt_f64, f64 => u64, avx2: lt_f64_avx2, sse: lt_f64_sse2);

entry_point!(eq_i8, i8 => u8, avx2: eq_i8_avx2, sse: eq_i8_sse2);
entry_point!(eq_u8, u8 => u8, avx2: eq_u8_avx2, sse: eq_u8_sse2);
entry_point!(eq_i16, i16 => u16, avx2: eq_i16_avx2, sse: eq_i16_sse2);
entry_point!(eq_u16, u16 => u16, avx2: eq_u16_avx2, sse: eq_u16_sse2);
entry_point!(eq_i32, i32 => u32, avx2: eq_i32_avx2, sse: eq_i32_sse2);
entry_point!(eq_u32, u32 => u32, avx2: eq_u32_avx2, sse: eq_u32_sse2);
entry_point!(eq_i64, i64 => u64, avx2: eq_i64_avx2, sse: eq_i64_sse41);
entry_point!(eq_u64, u64 => u64, avx2: eq_u64_avx2, sse: eq_u64_sse41);
entry_point!(eq_f32, f32 => u32, avx2: eq_f32_avx2, sse: eq_f32_sse2);
entry_point!(eq_f64, f64 => u64, avx2: eq_f64_avx2, sse: eq_f64_sse2);
