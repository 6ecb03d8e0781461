//! # Upper triangular matrix
//!
//! Rows are stored as vectors of decreasing length and increasing start index: row `i` of a
//! matrix of order `n` has length `n - i` and starts at column `i`. The zero elements below the
//! diagonal are never stored, and accessing them fails through the row's own bounds check.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::traits::{Element, Ring};
use crate::data::linear_algebra::vector::DynamicVector;
use crate::error::{Error, Result};

/// Square matrix with only zeros below the diagonal.
///
/// Wraps a vector of rows. Equality, addition and subtraction are those of the vector of rows.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UpperTriangular<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T: Element> UpperTriangular<T> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns, at least one and at most `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidOrder` if the order is out of range.
    pub fn new(order: usize) -> Result<Self> {
        if !(1..=MAX_MATRIX_SIZE).contains(&order) {
            debug!(order, "rejected matrix order");
            return Err(Error::InvalidOrder { order });
        }

        let rows = (0..order)
            .map(|i| DynamicVector::new(order - i, i as isize))
            .collect::<Result<Vec<_>>>()?;
        trace!(order, "created upper triangular matrix");

        Ok(Self { rows: DynamicVector::from_elements(rows, 0)?, })
    }
}

impl<T> UpperTriangular<T> {
    /// Adopt a vector of rows as a matrix.
    ///
    /// The shape is not validated: row `i` should have length `rows.len() - i` and start index
    /// `i`, and `rows` itself should start at index zero. This is the caller's responsibility,
    /// a malformed matrix behaves unpredictably in later operations.
    pub fn from_vector_of_rows(rows: DynamicVector<DynamicVector<T>>) -> Self {
        debug_assert!(is_upper_triangular_shape(&rows));

        Self { rows, }
    }

    /// Number of rows, which equals the number of columns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// The underlying vector of rows.
    pub fn rows(&self) -> &DynamicVector<DynamicVector<T>> {
        &self.rows
    }

    /// Consume the matrix, returning the underlying vector of rows.
    pub fn into_rows(self) -> DynamicVector<DynamicVector<T>> {
        self.rows
    }

    /// Row `i`, whose valid column indices are `i..order`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not a row of this matrix.
    pub fn get_row(&self, i: usize) -> Result<&DynamicVector<T>> {
        self.rows.get(i)
    }

    /// Mutable row `i`, whose valid column indices are `i..order`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not a row of this matrix.
    pub fn get_row_mut(&mut self, i: usize) -> Result<&mut DynamicVector<T>> {
        self.rows.get_mut(i)
    }

    /// Value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `i <= j < order`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.get_row(i)?.get(j)
    }

    /// Mutable value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `i <= j < order`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        self.get_row_mut(i)?.get_mut(j)
    }
}

#[allow(clippy::should_implement_trait)]
impl<T: Ring> UpperTriangular<T> {
    /// Matrix sum.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the orders differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_order(other)?;

        self.rows.add_rows(&other.rows).map(Self::from_vector_of_rows)
    }

    /// Matrix difference.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the orders differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_order(other)?;

        self.rows.sub_rows(&other.rows).map(Self::from_vector_of_rows)
    }

    fn check_order(&self, other: &Self) -> Result<()> {
        self.rows.check_shape(&other.rows)
    }
}

fn is_upper_triangular_shape<T>(rows: &DynamicVector<DynamicVector<T>>) -> bool {
    rows.start_index() == 0 && rows.iter()
        .enumerate()
        .all(|(i, row)| row.start_index() == i && row.len() == rows.len() - i)
}

impl<T> Index<usize> for UpperTriangular<T> {
    type Output = DynamicVector<T>;

    /// # Panics
    ///
    /// If `i` is not a row of this matrix, use `get_row` to handle that case.
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T> IndexMut<usize> for UpperTriangular<T> {
    /// # Panics
    ///
    /// If `i` is not a row of this matrix, use `get_row_mut` to handle that case.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// Every row on its own line, values separated by a single space.
impl<T: Display> Display for UpperTriangular<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
