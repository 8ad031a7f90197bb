//! Error types for the runtime helpers of lanewise.
//!
//! Comparisons and casts never fail at runtime; every illegal combination is
//! rejected when the calling code is compiled. The only runtime failures come
//! from building vectors out of slices and from lane-indexed queries.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
