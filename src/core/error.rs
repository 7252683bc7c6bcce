//! Errors. Only the runtime boundary can fail; the typed path can't.

#[cfg(feature = "alloc")]
use alloc::string::String;

use thiserror::Error;

/// Runtime data didn't have the length the type asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("length mismatch: expected {expected} elements, found {found}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

impl LengthMismatch {
    #[inline(always)]
    pub const fn new(expected: usize, found: usize) -> Self {
        Self { expected, found }
    }
}

/// Why a checked fold gave up.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// Converting into a fixed length failed.
    #[error(transparent)]
    Length(#[from] LengthMismatch),
    /// An accumulator didn't have the shape its motive expects at `index`.
    #[error("motive mismatch at step {index}: expected {expected}, found {found}")]
    MotiveMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}
