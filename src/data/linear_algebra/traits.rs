//! # Traits for elements of vectors and matrices
//!
//! Elements are only required to behave like values of a ring: they have a zero, can be added,
//! subtracted and multiplied, and can be compared for equality. Division is never needed.
//!
//! Both traits are implemented automatically for all types satisfying their bounds.
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Element of a `DynamicVector` or `UpperTriangularMatrix`.
///
/// Needed to create zero-initialised storage and to derive a few practical traits for the
/// aforementioned types.
pub trait Element:
    Zero +
    PartialEq +
    Clone +
    Debug +
{
}
impl<T: Zero + PartialEq + Clone + Debug> Element for T {
}

/// Element that the element-wise operations can be computed for.
///
/// The right hand side is taken by reference, so that only the left hand side needs to be cloned
/// out of the vector's storage.
pub trait Ring:
    Element +
    for<'r> Add<&'r Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
{
}
impl<T> Ring for T
where
    T: Element,
    T: for<'r> Add<&'r T, Output=T>,
    T: for<'r> Sub<&'r T, Output=T>,
    T: for<'r> Mul<&'r T, Output=T>,
{
}
