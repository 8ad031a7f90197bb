//! Native lowering layer
//!
//! The comparison engine never names an instruction. It hands equally sized
//! lane slices to the entry points of the `native` module, which is picked
//! once, when the crate is compiled:
//!
//! | Target                      | Segments                    | Module      |
//! |-----------------------------|-----------------------------|-------------|
//! | x86_64 + AVX2               | 256-bit, then 128-bit, tail | `x86_64`    |
//! | x86_64 (SSE2 baseline)      | 128-bit, tail               | `x86_64`    |
//! | aarch64 + NEON              | 128-bit, tail               | `aarch64`   |
//! | anything else, `force-scalar` | one lane at a time        | `scalar`    |
//!
//! There is no runtime feature detection. Build with
//! `RUSTFLAGS="-C target-feature=+avx2"` (or `-C target-cpu=native`) to get the
//! wider segments.
//!
//! Vectors wider than one native register are split into native segments,
//! compared segment by segment, and the lanes that do not fill a whole segment
//! go through the portable loop. The result does not depend on the split.

use core::fmt;

use bitflags::bitflags;

pub(crate) mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "sse2", not(feature = "force-scalar")))]
pub(crate) mod x86_64;

#[cfg(all(target_arch = "aarch64", target_feature = "neon", not(feature = "force-scalar")))]
pub(crate) mod aarch64;

#[cfg(all(target_arch = "x86_64", target_feature = "sse2", not(feature = "force-scalar")))]
pub(crate) use self::x86_64 as native;

#[cfg(all(target_arch = "aarch64", target_feature = "neon", not(feature = "force-scalar")))]
pub(crate) use self::aarch64 as native;

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "sse2", not(feature = "force-scalar")),
    all(target_arch = "aarch64", target_feature = "neon", not(feature = "force-scalar"))
)))]
pub(crate) use self::scalar as native;

bitflags! {
    /// Instruction sets enabled for the target this crate was compiled for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct Isa: u32 {
        const SSE2 = 1 << 0;
        const SSE4_1 = 1 << 1;
        const SSE4_2 = 1 << 2;
        const AVX = 1 << 3;
        const AVX2 = 1 << 4;
        const NEON = 1 << 5;
    }
}

impl Isa {
    /// The instruction sets enabled at build time.
    ///
    /// This reflects `-C target-feature` / `-C target-cpu`, not the CPU the
    /// program happens to run on.
    pub const fn active() -> Self {
        let mut bits = 0;
        if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
            bits |= Self::SSE2.bits();
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "sse4.1")) {
            bits |= Self::SSE4_1.bits();
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "sse4.2")) {
            bits |= Self::SSE4_2.bits();
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "avx")) {
            bits |= Self::AVX.bits();
        }
        if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
            bits |= Self::AVX2.bits();
        }
        if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            bits |= Self::NEON.bits();
        }
        Self::from_bits_retain(bits)
    }
}

/// The lowering the comparison engine was compiled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lowering {
    /// Portable lane loop
    Scalar,
    /// 128-bit SSE2 segments (SSE4.1/4.2 used for 64-bit lanes when enabled)
    Sse2,
    /// 256-bit AVX2 segments, then 128-bit SSE segments
    Avx2,
    /// 128-bit NEON segments
    Neon,
}

impl Lowering {
    /// The lowering selected for this build
    pub const fn current() -> Self {
        if cfg!(feature = "force-scalar") {
            Self::Scalar
        } else if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
            Self::Avx2
        } else if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
            Self::Sse2
        } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            Self::Neon
        } else {
            Self::Scalar
        }
    }

    /// Width in bytes of the widest native segment, `None` for the lane loop
    pub const fn segment_bytes(self) -> Option<usize> {
        match self {
            Self::Scalar => None,
            Self::Sse2 | Self::Neon => Some(16),
            Self::Avx2 => Some(32),
        }
    }

    /// Number of `T` lanes compared by one native segment (1 for the lane loop)
    pub const fn segment_lanes<T>(self) -> usize {
        match self.segment_bytes() {
            Some(bytes) => bytes / core::mem::size_of::<T>(),
            None => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
            Self::Avx2 => "avx2",
            Self::Neon => "neon",
        }
    }
}

impl fmt::Display for Lowering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reports the lowering this build uses and emits it as a `tracing` debug event.
///
/// # Examples
///
/// ```rust
/// use lanewise::arch::{Lowering, describe};
///
/// assert_eq!(describe(), Lowering::current());
/// ```
pub fn describe() -> Lowering {
    let lowering = Lowering::current();
    tracing::debug!(
        %lowering,
        isa = ?Isa::active(),
        segment_bytes = ?lowering.segment_bytes(),
        "native lowering selected at build time"
    );
    lowering
}
