//! # Vector types
//!
//! A dense vector of fixed length whose valid indices start at a configurable offset. Vectors of
//! these vectors are used as the row storage of matrices.
pub use dynamic::Dynamic as DynamicVector;

mod dynamic;
