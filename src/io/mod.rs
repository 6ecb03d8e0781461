//! # Reading and writing of vectors and matrices
//!
//! Values are written as text, separated by a single space. A matrix is written one row per line.
//! Reading accepts any whitespace between values, including line breaks, and only consumes as
//! many values as the vector or matrix being read has elements.
use std::fmt::Display;
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::vec;

use tracing::debug;

use crate::data::linear_algebra::matrix::UpperTriangularMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::DynamicVector;
use crate::error::Result;
use crate::io::error::ParseError;

pub mod error;

/// Reads whitespace separated tokens from a buffered reader, one line at a time.
///
/// Tokens that were read from a line but not yet consumed are kept for the next read, so that
/// several vectors or matrices can be read from a single stream.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: vec::IntoIter<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader, pending: Vec::new().into_iter(), }
    }

    /// Read a single non-negative integer, typically the order of the matrices that follow.
    ///
    /// # Errors
    ///
    /// If the stream ends or the token is not a non-negative integer.
    pub fn read_order(&mut self) -> std::result::Result<usize, ParseError> {
        self.parse_token(0)
    }

    /// Overwrite all values of a vector, in index order.
    ///
    /// # Errors
    ///
    /// If the stream ends before `vector.len()` values were read, or a value can't be parsed. The
    /// vector is left unchanged in that case, but the tokens up to the failing one are consumed.
    pub fn read_vector<T>(&mut self, vector: &mut DynamicVector<T>) -> std::result::Result<(), ParseError>
    where
        T: FromStr<Err: Display>,
    {
        let values = self.parse_tokens(vector.len(), 0)?;
        debug!(read = values.len(), "read vector");
        overwrite(vector, values);

        Ok(())
    }

    /// Overwrite all values of a matrix, row by row.
    ///
    /// Row `i` consumes `order - i` values.
    ///
    /// # Errors
    ///
    /// If the stream ends before the matrix was filled, or a value can't be parsed. The matrix is
    /// left unchanged in that case, but the tokens up to the failing one are consumed.
    pub fn read_matrix<T>(&mut self, matrix: &mut UpperTriangularMatrix<T>) -> std::result::Result<(), ParseError>
    where
        T: FromStr<Err: Display>,
    {
        let mut position = 0;
        let mut rows = Vec::with_capacity(matrix.order());
        for i in 0..matrix.order() {
            let row = self.parse_tokens(matrix[i].len(), position)?;
            position += row.len();
            rows.push(row);
        }
        debug!(order = matrix.order(), read = position, "read matrix");

        for (i, values) in rows.into_iter().enumerate() {
            overwrite(&mut matrix[i], values);
        }

        Ok(())
    }

    /// Create a matrix of the given order and read its values.
    ///
    /// # Errors
    ///
    /// `InvalidOrder` if no matrix of this order can be created, `Parse` if reading fails.
    pub fn read_new_matrix<T>(&mut self, order: usize) -> Result<UpperTriangularMatrix<T>>
    where
        T: Element + FromStr<Err: Display>,
    {
        let mut matrix = UpperTriangularMatrix::new(order)?;
        self.read_matrix(&mut matrix)?;

        Ok(matrix)
    }

    /// Parse the next `count` tokens.
    ///
    /// # Arguments
    ///
    /// * `count`: Number of tokens to parse.
    /// * `position`: Number of tokens already consumed by the calling read, used for reporting.
    fn parse_tokens<T: FromStr<Err: Display>>(
        &mut self,
        count: usize,
        position: usize,
    ) -> std::result::Result<Vec<T>, ParseError> {
        (position..position + count)
            .map(|position| self.parse_token(position))
            .collect()
    }

    fn parse_token<T: FromStr<Err: Display>>(&mut self, position: usize) -> std::result::Result<T, ParseError> {
        let token = self.next_token()?
            .ok_or(ParseError::MissingToken { position })?;

        token.parse().map_err(|error: T::Err| ParseError::InvalidToken {
            position,
            reason: error.to_string(),
            token,
        })
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

fn overwrite<T>(vector: &mut DynamicVector<T>, values: Vec<T>) {
    debug_assert_eq!(vector.len(), values.len());

    for (target, value) in vector.iter_mut().zip(values) {
        *target = value;
    }
}

/// Write the values of a vector separated by a single space, without a trailing newline.
///
/// # Errors
///
/// If writing fails.
pub fn write_vector<T: Display>(writer: &mut impl Write, vector: &DynamicVector<T>) -> io::Result<()> {
    write!(writer, "{}", vector)
}

/// Write each row of a matrix on its own line, values separated by a single space.
///
/// # Errors
///
/// If writing fails.
pub fn write_matrix<T: Display>(writer: &mut impl Write, matrix: &UpperTriangularMatrix<T>) -> io::Result<()> {
    write!(writer, "{}", matrix)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use num_rational::Rational64;

    use crate::data::linear_algebra::matrix::UpperTriangularMatrix;
    use crate::data::linear_algebra::vector::DynamicVector;
    use crate::error::Error;
    use crate::io::{TokenReader, write_matrix, write_vector};
    use crate::io::error::ParseError;

    fn reader(text: &str) -> TokenReader<Cursor<&[u8]>> {
        TokenReader::new(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn read_vector() {
        let mut v = DynamicVector::<i32>::new(4, 2).unwrap();
        let mut input = reader("1 2\n  3\n\n-4 5");
        input.read_vector(&mut v).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, -4]);

        // The remaining token is kept for the next read
        let mut w = DynamicVector::<i32>::new(1, 0).unwrap();
        input.read_vector(&mut w).unwrap();
        assert_eq!(w[0], 5);
    }

    #[test]
    fn read_vector_errors() {
        let mut v = DynamicVector::<i32>::new(3, 0).unwrap();
        assert!(matches!(
            reader("1 2").read_vector(&mut v),
            Err(ParseError::MissingToken { position: 2 }),
        ));

        let result = reader("1 x 3").read_vector(&mut v);
        match result {
            Err(ParseError::InvalidToken { position, token, .. }) => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            },
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn failed_read_leaves_values() {
        let mut v = DynamicVector::from_elements(vec![7, 8, 9], 0).unwrap();
        assert!(reader("1 2 x").read_vector(&mut v).is_err());
        assert_eq!(v.as_slice(), &[7, 8, 9]);

        let mut m = UpperTriangularMatrix::<i32>::new(2).unwrap();
        m[0][0] = 4;
        assert!(reader("1 2").read_matrix(&mut m).is_err());
        assert_eq!(m.to_string(), "4 0\n0\n");
    }

    #[test]
    fn read_matrix() {
        let mut m = UpperTriangularMatrix::<Rational64>::new(3).unwrap();
        reader("1 2 3\n1/2 -5\n7").read_matrix(&mut m).unwrap();

        assert_eq!(m[0][2], Rational64::new(3, 1));
        assert_eq!(m[1][1], Rational64::new(1, 2));
        assert_eq!(m[1][2], Rational64::new(-5, 1));
        assert_eq!(m[2][2], Rational64::new(7, 1));

        // Positions count over all rows
        let mut m = UpperTriangularMatrix::<i32>::new(3).unwrap();
        assert!(matches!(
            reader("1 2 3 4 5").read_matrix(&mut m),
            Err(ParseError::MissingToken { position: 5 }),
        ));
    }

    #[test]
    fn read_new_matrix() {
        let mut input = reader("2\n1 2\n3\n");
        let order = input.read_order().unwrap();
        let m = input.read_new_matrix::<i32>(order).unwrap();
        assert_eq!(m.to_string(), "1 2\n3\n");

        assert!(matches!(reader("").read_new_matrix::<i32>(0), Err(Error::InvalidOrder { order: 0 })));
        assert!(matches!(reader("1").read_new_matrix::<i32>(2), Err(Error::Parse(_))));
        assert!(matches!(reader("-3").read_order(), Err(ParseError::InvalidToken { .. })));
    }

    #[test]
    fn write() {
        let v = DynamicVector::from_elements(vec![1, 2, 3], 4).unwrap();
        let mut output = Vec::new();
        write_vector(&mut output, &v).unwrap();
        assert_eq!(output, b"1 2 3");

        let mut m = UpperTriangularMatrix::<i32>::new(2).unwrap();
        m[0][0] = 1;
        m[1][1] = 2;
        let mut output = Vec::new();
        write_matrix(&mut output, &m).unwrap();
        assert_eq!(output, b"1 0\n2\n");
    }
}
