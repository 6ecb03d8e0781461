//! # Dynamic vector
//!
//! Wrapping a `Vec` such that it has a fixed length and is addressed through a start index rather
//! than from zero.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::traits::{Element, Ring};
use crate::error::{Error, Result, Shape};

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// Valid indices are `start_index..start_index + len`. Cloning creates independent storage, and
/// `clone_from` replaces both the values and the shape of the vector it is called on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dynamic<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T: Element> Dynamic<T> {
    /// Create a vector of zeros.
    ///
    /// # Arguments
    ///
    /// * `length`: Number of elements, at least one and at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Index of the first element, can't be negative.
    ///
    /// # Errors
    ///
    /// `InvalidLength` or `InvalidStartIndex` when the arguments are out of range.
    pub fn new(length: usize, start_index: isize) -> Result<Self> {
        let start_index = usize::try_from(start_index).map_err(|_| {
            debug!(start_index, "rejected negative start index");
            Error::InvalidStartIndex { start_index: start_index as i128 }
        })?;
        check_length(length)?;
        check_end_index(length, start_index)?;
        trace!(length, start_index, "creating vector");

        Ok(Self { data: vec![T::zero(); length], start_index, })
    }

    /// Set every element to zero, keeping the shape.
    pub fn reset_to_zero(&mut self) {
        for value in &mut self.data {
            value.set_zero();
        }
    }

    /// Set every element to `value`, keeping the shape.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Dynamic<T> {
    /// Wrap existing values.
    ///
    /// # Arguments
    ///
    /// * `data`: Values in index order. Its length becomes the length of the vector.
    /// * `start_index`: Index of the first element.
    ///
    /// # Errors
    ///
    /// `InvalidLength` when `data` is empty or larger than `MAX_VECTOR_SIZE`, `InvalidStartIndex`
    /// when the index one past the last element doesn't fit in a `usize`.
    pub fn from_elements(data: Vec<T>, start_index: usize) -> Result<Self> {
        check_length(data.len())?;
        check_end_index(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`, a vector holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the index of the last element.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    /// The (length, start index) pair that operands of element-wise operations must agree on.
    pub fn shape(&self) -> Shape {
        (self.len(), self.start_index)
    }

    /// Reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start_index..end_index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start_index..end_index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Iterate over the values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The values as a slice, the element at `start_index` being at position zero.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector, returning the underlying values.
    pub fn into_elements(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, index: usize) -> Result<usize> {
        if (self.start_index..self.end_index()).contains(&index) {
            Ok(index - self.start_index)
        } else {
            debug!(index, start = self.start_index, end = self.end_index(), "index out of range");
            Err(Error::IndexOutOfRange { index, start: self.start_index, end: self.end_index() })
        }
    }

    pub(crate) fn check_shape<S>(&self, other: &Dynamic<S>) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            debug!(left = ?self.shape(), right = ?other.shape(), "operand shapes differ");
            Err(Error::ShapeMismatch { left: self.shape(), right: other.shape() })
        }
    }

    fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        Self { data: self.data.iter().map(f).collect(), start_index: self.start_index, }
    }
}

fn check_length(length: usize) -> Result<()> {
    if (1..=MAX_VECTOR_SIZE).contains(&length) {
        Ok(())
    } else {
        debug!(length, "rejected vector length");
        Err(Error::InvalidLength { length })
    }
}

fn check_end_index(length: usize, start_index: usize) -> Result<()> {
    if start_index.checked_add(length).is_some() {
        Ok(())
    } else {
        debug!(length, start_index, "rejected start index, end index overflows");
        Err(Error::InvalidStartIndex { start_index: start_index as i128 })
    }
}

#[allow(clippy::should_implement_trait)]
impl<T: Ring> Dynamic<T> {
    /// Add `value` to every element, leaving this vector unchanged.
    pub fn add_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() + value)
    }

    /// Subtract `value` from every element, leaving this vector unchanged.
    pub fn sub_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() - value)
    }

    /// Multiply every element with `value`, leaving this vector unchanged.
    pub fn mul_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() * value)
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths or start indices differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |left, right| left.clone() + right)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths or start indices differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |left, right| left.clone() - right)
    }

    /// Calculate the inner product between two vectors.
    ///
    /// Products are accumulated in index order, starting from zero.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths or start indices differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_shape(other)?;

        Ok(self.data.iter().zip(&other.data)
            .fold(T::zero(), |total, (left, right)| total + &(left.clone() * right)))
    }

    fn zip_with(&self, other: &Self, mut f: impl FnMut(&T, &T) -> T) -> Result<Self> {
        self.check_shape(other)?;

        let data = self.data.iter().zip(&other.data)
            .map(|(left, right)| f(left, right))
            .collect();
        Ok(Self { data, start_index: self.start_index, })
    }
}

/// Operations on a vector of rows, as used by matrices.
impl<T: Ring> Dynamic<Dynamic<T>> {
    /// Row-wise sum.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the outer shapes differ, or if any pair of rows differs in shape.
    pub fn add_rows(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Dynamic::<T>::add)
    }

    /// Row-wise difference.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the outer shapes differ, or if any pair of rows differs in shape.
    pub fn sub_rows(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Dynamic::<T>::sub)
    }

    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Dynamic<T>, &Dynamic<T>) -> Result<Dynamic<T>>,
    ) -> Result<Self> {
        self.check_shape(other)?;

        let data = self.data.iter().zip(&other.data)
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { data, start_index: self.start_index, })
    }
}

impl<T> Index<usize> for Dynamic<T> {
    type Output = T;

    /// # Panics
    ///
    /// If `index` is out of range, use `get` to handle that case.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Dynamic<T> {
    /// # Panics
    ///
    /// If `index` is out of range, use `get_mut` to handle that case.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> IntoIterator for &'a Dynamic<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values separated by a single space, without a trailing newline.
impl<T: Display> Display for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
