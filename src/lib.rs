//! Lanewise - portable fixed-width vector lanes
//!
//! This library provides lane-wise comparisons over fixed-width numeric
//! vectors and type-checked bit reinterpretation between vectors and masks,
//! lowered to SSE2/AVX2 or NEON when the target enables them and to a portable
//! lane loop otherwise.
//!
//! # Features
//!
//! - **Comparison engine**: `cmp_lt`, `cmp_gt`, `cmp_le`, `cmp_ge`, `cmp_eq`
//!   and `cmp_ne` for `i8`..`u64`, `f32` and `f64`, any lane count, with scalar
//!   broadcast on either side
//! - **Masks**: one truth value per lane in the full-width representation the
//!   hardware comparisons produce; masks cannot be forged from arbitrary lanes
//! - **Reinterpretation**: `reinterpret` between vectors and masks of the same
//!   size, with mask-to-mask routes that keep lane truth across lane widths
//! - **Static rejection**: size mismatches and vector-to-mask conversions fail
//!   to compile
//!
//! # Example - Comparing lanes
//!
//! ```rust
//! use lanewise::{Vector, cmp_lt, cmp_lt_scalar};
//!
//! let a = Vector::from_array([1i32, 5, -3, 7]);
//! let b = Vector::from_array([2i32, 5, -1, 7]);
//!
//! let m = cmp_lt(a, b);
//! assert_eq!(m.to_bools(), [true, false, true, false]);
//!
//! // Pick the smaller lane
//! assert_eq!(m.select(a, b).to_array(), [1, 5, -3, 7]);
//!
//! // Broadcast a scalar
//! assert_eq!(cmp_lt_scalar(a, 0).count_true(), 1);
//! ```
//!
//! # Example - Reinterpreting a mask
//!
//! ```rust
//! use lanewise::{Mask, Vector, cmp_gt, reinterpret};
//!
//! let bytes = Vector::from_array([0u8, 9, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
//! let nonzero = cmp_gt(bytes, Vector::zero());
//!
//! // Which 64-bit halves contain a non-zero byte?
//! let halves: Mask<u64, 2> = reinterpret(nonzero);
//! assert_eq!(halves.to_bools(), [true, true]);
//!
//! // The canonical lanes of the mask
//! let lanes: Vector<u8, 16> = reinterpret(nonzero);
//! assert_eq!(lanes[1], 0xFF);
//! ```
//!
//! # Build-time lowering
//!
//! The instruction set is chosen from the target features the crate is
//! compiled with; there is no runtime detection. [`arch::describe`] reports
//! the choice.
//!
//! # Cargo features
//!
//! - `std` (default): links the standard library; without it the crate is
//!   `no_std`
//! - `force-scalar`: always use the portable lane loop
//! - `serde`: serialization of the metadata types

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod arch;
pub mod cast;
pub mod cmp;
pub mod element;
pub mod error;
pub mod mask;
pub mod shape;
pub mod vector;

pub use arch::{Isa, Lowering};
pub use cast::{Auto, CastStrategy, MaskCast, Memcpy, Remask, Unmask, reinterpret, reinterpret_with};
pub use cmp::{
    cmp_eq, cmp_eq_scalar, cmp_ge, cmp_ge_scalar, cmp_gt, cmp_gt_scalar, cmp_le, cmp_le_scalar,
    cmp_lt, cmp_lt_scalar, cmp_ne, cmp_ne_scalar, scalar_cmp_eq, scalar_cmp_ge, scalar_cmp_gt,
    scalar_cmp_le, scalar_cmp_lt, scalar_cmp_ne,
};
pub use element::{Element, ElementKind, MaskBits};
pub use error::{Error, Result};
pub use mask::Mask;
pub use shape::{Bits64, Bits128, Bits256, Bits512, Lanes, MaskLanes, SizeTag};
pub use vector::Vector;
