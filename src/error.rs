//! # Error reporting
//!
//! All failures are caller contract violations: a bad construction argument, an index outside of
//! a vector's range, or operands of a different shape. They are returned instead of panicking, so
//! that callers can match on them.
use thiserror::Error;

use crate::io::error::ParseError;

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The (length, start index) pair that binary operations require to be equal.
pub type Shape = (usize, usize);

/// Any failure encountered while creating, indexing, combining or reading vectors and matrices.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector was requested with a length of zero or larger than `MAX_VECTOR_SIZE`.
    #[error("invalid vector length {length}, should be between 1 and {max}", max = crate::MAX_VECTOR_SIZE)]
    InvalidLength {
        /// Requested length.
        length: usize,
    },
    /// A vector was requested with a negative start index, or one so large that the indices of
    /// its elements can't be represented.
    #[error("invalid start index {start_index}, can't be negative or put the end past usize::MAX")]
    InvalidStartIndex {
        /// Requested start index.
        start_index: i128,
    },
    /// A matrix was requested with an order of zero or larger than `MAX_MATRIX_SIZE`.
    #[error("invalid matrix order {order}, should be between 1 and {max}", max = crate::MAX_MATRIX_SIZE)]
    InvalidOrder {
        /// Requested order.
        order: usize,
    },
    /// An element or row was accessed outside of the valid range `start..end`.
    #[error("index {index} out of range {start}..{end}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// First valid position.
        start: usize,
        /// One past the last valid position.
        end: usize,
    },
    /// Operands of an element-wise operation differ in length or start index.
    #[error("shape mismatch: (length, start index) {left:?} versus {right:?}")]
    ShapeMismatch {
        /// Shape of the left hand side.
        left: Shape,
        /// Shape of the right hand side.
        right: Shape,
    },
    /// Text input could not be read into a vector or matrix.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
