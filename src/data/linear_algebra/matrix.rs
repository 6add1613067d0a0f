//! # Matrix implementations
//!
//! Square integer matrices with a compacted storage layout. Coordinates handed to these types are
//! 1-based, like the usual mathematical notation `a_ij` with `1 <= i, j <= n`.
use thiserror::Error;

pub use symmetric::PackedSymmetric;

mod symmetric;

/// Problems constructing or indexing a matrix.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MatrixError {
    /// The dimension is not positive, or the number of stored values can't be represented.
    #[error("dimension must be a positive integer of manageable size, got {dimension}")]
    InvalidDimension {
        #[allow(missing_docs)]
        dimension: i64,
    },
    /// A row or column index outside of `1..=dimension`.
    #[error("coordinate ({row}, {column}) is outside of a {dimension}x{dimension} matrix")]
    OutOfRange {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        dimension: usize,
    },
}
