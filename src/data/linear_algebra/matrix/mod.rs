//! # Matrix implementations
//!
//! Square matrices whose rows are `DynamicVector`s. Only the upper triangular shape is supported.
pub use upper_triangular::UpperTriangular as UpperTriangularMatrix;

mod upper_triangular;
