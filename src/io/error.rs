//! # Error reporting for reading of matrices and value lists
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::algorithm::scan::ScanError;
use crate::data::bounded::CapacityError;
use crate::data::linear_algebra::matrix::MatrixError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input couldn't be opened, or reading was interrupted.
    #[error("could not read the input: {0}")]
    IO(#[from] io::Error),
    /// A token that should have been an integer isn't one.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The dimension that was read doesn't describe a matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// The input ended before the dimension was read.
    #[error("the input is empty, expected a dimension")]
    MissingDimension,
    /// The input ended before all `n * n` values were read.
    #[error("expected {expected} matrix values, but the input ended after {found}")]
    MissingValues {
        /// `n * n` for dimension `n`.
        expected: usize,
        /// Number of values read before the input ended.
        found: usize,
    },
    /// A value below the diagonal differs from its mirror image above the diagonal.
    ///
    /// Only reported when reading strictly.
    #[error("value {lower} at ({row}, {column}) differs from value {upper} at ({column}, {row})")]
    Asymmetric {
        /// Row of the value below the diagonal.
        row: usize,
        /// Column of the value below the diagonal.
        column: usize,
        /// Value at (`column`, `row`).
        upper: i64,
        /// Value at (`row`, `column`).
        lower: i64,
    },
}

/// A `ReportError` is created when the results of an array scan couldn't be written.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("could not write the report: {0}")]
    IO(#[from] io::Error),
    /// The scan doesn't accept the values.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// There are more values than the array may hold.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// A token that could not be read as an integer.
///
/// Contains the offending text and its position among all tokens read, such that the end user can
/// find it.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("malformed input: token {position}, \"{token}\", is not an integer ({source})")]
pub struct ParseError {
    token: String,
    position: usize,
    source: ParseIntError,
}

impl ParseError {
    /// Create a new `ParseError`.
    ///
    /// # Arguments
    ///
    /// * `token`: Text that failed to parse.
    /// * `position`: 1-based index of the token in the input.
    /// * `source`: Why parsing failed.
    pub fn new(token: impl Into<String>, position: usize, source: ParseIntError) -> Self {
        Self { token: token.into(), position, source, }
    }

    /// Text that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 1-based index of the token in the input.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Parse a single token as an integer.
pub(crate) fn parse_integer(token: &str, position: usize) -> Result<i64, ParseError> {
    token.parse().map_err(|error| ParseError::new(token, position, error))
}
