//! # Error reporting for reading of vectors and matrices
//!
//! Reading fails when the underlying reader fails, when the input ends before every element was
//! read, or when a token can't be parsed into the element type.
use std::io;

use thiserror::Error;

/// A `ParseError` describes why text input could not be read into a vector or matrix.
///
/// Positions count the tokens consumed by a single read call, starting at zero. For a matrix, that
/// is the position in the flattened sequence of its rows.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// The input ended before enough tokens were read.
    #[error("input ended while expecting token {position}")]
    MissingToken {
        /// Index of the first token that could not be read.
        position: usize,
    },
    /// A token could not be parsed into the element type.
    #[error("failed to parse token {position} (\"{token}\"): {reason}")]
    InvalidToken {
        /// Index of the token.
        position: usize,
        /// The text as read.
        token: String,
        /// The element type's description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::io::error::ParseError;

    #[test]
    fn display() {
        let error = ParseError::InvalidToken {
            position: 2,
            token: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to parse token 2 (\"x\"): invalid digit found in string",
        );

        let error = ParseError::MissingToken { position: 0 };
        assert_eq!(error.to_string(), "input ended while expecting token 0");
    }

    #[test]
    fn from_io() {
        let error: ParseError = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();
        assert!(matches!(error, ParseError::Io(_)));
    }
}
