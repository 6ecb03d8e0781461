//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures, reading and writing them is done in `io`.

pub mod linear_algebra;
