//! # Upper triangular matrices
//!
//! Dense vectors of a fixed length that are indexed from a configurable start index, and square
//! upper triangular matrices stored as rows of such vectors. Row `i` of a matrix only stores the
//! columns `i` and higher, so that the zeros below the diagonal take no memory and can't be
//! written to.
//!
//! ```
//! use utmatrix::UpperTriangularMatrix;
//!
//! let mut a = UpperTriangularMatrix::<i32>::new(3)?;
//! a[0][2] = 4;
//! let b = a.add(&a)?;
//! assert_eq!(b[0][2], 8);
//! assert!(b.get(2, 0).is_err());
//! # Ok::<(), utmatrix::Error>(())
//! ```
#![warn(missing_docs)]

pub mod data;
pub mod error;
pub mod io;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::matrix::UpperTriangularMatrix;
pub use data::linear_algebra::vector::DynamicVector;
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
