//! # Linear algebra primitives
//!
//! Dense vectors that are indexed from an arbitrary start index, and upper triangular matrices
//! that are stored as rows of such vectors.

pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `DynamicVector` can be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest order an `UpperTriangularMatrix` can be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
