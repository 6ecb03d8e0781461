//! Arbitrary precision rationals whose sum doesn't fit in 64 bits.
use std::io::Cursor;

use num_rational::BigRational;

use crate::data::linear_algebra::matrix::UpperTriangularMatrix;
use crate::data::linear_algebra::vector::DynamicVector;
use crate::io::{TokenReader, write_matrix};

type T = BigRational;

const INPUT_LITERAL_STRING: &str = "2
9223372036854775807 1/2
-9223372036854775808
9223372036854775807 1/3
-9223372036854775808
";

const OUTPUT_LITERAL_STRING: &str = "18446744073709551614 5/6
-18446744073709551616
";

fn rows(values: [&[&str]; 2]) -> UpperTriangularMatrix<T> {
    let rows: Vec<DynamicVector<T>> = values.iter()
        .enumerate()
        .map(|(i, row)| {
            let row: Vec<T> = row.iter().map(|value| value.parse().unwrap()).collect();
            DynamicVector::from_elements(row, i).unwrap()
        })
        .collect();

    UpperTriangularMatrix::from_vector_of_rows(DynamicVector::from_elements(rows, 0).unwrap())
}

pub fn left_form() -> UpperTriangularMatrix<T> {
    rows([&["9223372036854775807", "1/2"], &["-9223372036854775808"]])
}

pub fn right_form() -> UpperTriangularMatrix<T> {
    rows([&["9223372036854775807", "1/3"], &["-9223372036854775808"]])
}

pub fn sum_form() -> UpperTriangularMatrix<T> {
    rows([&["18446744073709551614", "5/6"], &["-18446744073709551616"]])
}

#[test]
fn conversion_pipeline() {
    let mut reader = TokenReader::new(Cursor::new(INPUT_LITERAL_STRING.as_bytes()));
    let order = reader.read_order().unwrap();

    let left = reader.read_new_matrix::<T>(order).unwrap();
    assert_eq!(left, left_form());
    let right = reader.read_new_matrix::<T>(order).unwrap();
    assert_eq!(right, right_form());

    let sum = left.add(&right).unwrap();
    assert_eq!(sum, sum_form());

    let mut output = Vec::new();
    write_matrix(&mut output, &sum).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), OUTPUT_LITERAL_STRING);
}

#[test]
fn beyond_64_bits() {
    let sum = left_form().add(&right_form()).unwrap();
    let max: T = BigRational::from_integer(i64::MAX.into());
    assert!(sum[0][0] > max);
    assert_eq!(sum.sub(&right_form()).unwrap(), left_form());
}
