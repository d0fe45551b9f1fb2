//! Errors raised by the bounded search routines, the matrix and the comparator adapter.

use thiserror::Error;

/// Failures surfaced synchronously to the caller. Nothing in the crate retries or
/// swallows one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("lower bound {lower} must be less than or equal to upper bound {upper}")]
    InvertedBounds { lower: usize, upper: usize },

    #[error("upper bound {upper} must be less than the sequence length {len}")]
    UpperBoundOutOfRange { upper: usize, len: usize },

    #[error("cell ({row}, {column}) is outside a {rows}x{columns} matrix")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("{len} cells cannot fill a {rows}x{columns} matrix")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        len: usize,
    },

    #[error("operand cannot be compared as {expected}")]
    TypeMismatch { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, CollectionError>;
