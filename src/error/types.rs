//! Error types for lane construction and lane queries.
use thiserror::Error;

/// Main error type for lanewise operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A slice did not hold exactly as many elements as the vector has lanes
    #[error("Lane count mismatch: expected {expected} lanes, got {got}")]
    LaneCount { expected: usize, got: usize },

    /// A lane index past the end of a vector or mask
    #[error("Lane {lane} is out of range for a {lanes}-lane value")]
    LaneOutOfRange { lane: usize, lanes: usize },
}

/// Result type for lanewise operations.
pub type Result<T> = core::result::Result<T, Error>;
