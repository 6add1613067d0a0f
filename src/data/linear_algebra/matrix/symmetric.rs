//! # Packed symmetric matrix
//!
//! A symmetric matrix is determined by its lower triangle, so only that half is stored. The values
//! are laid out column after column: column `1` holds `n` values, column `2` holds `n - 1` values
//! and so on, which brings the total to `n (n + 1) / 2`.
use std::fmt;
use std::fmt::Display;
use std::mem;

use itertools::Itertools;

use crate::data::linear_algebra::matrix::MatrixError;

/// Symmetric `n` x `n` integer matrix that stores only the values on and below the diagonal.
///
/// Reads above the diagonal are served from the mirrored entry below it, writes above the diagonal
/// are redirected to that mirrored entry.
///
/// The size is fixed at creation, all values start out as zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct PackedSymmetric {
    /// Lower triangle including the diagonal, column major.
    data: Vec<i64>,
    dimension: usize,
}

impl PackedSymmetric {
    /// Create a zero matrix of size `dimension` x `dimension`.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Number of rows (and columns).
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if the dimension is not positive, or so large that the stored values
    /// can't be allocated.
    pub fn new(dimension: i64) -> Result<Self, MatrixError> {
        let invalid = MatrixError::InvalidDimension { dimension };

        if dimension <= 0 {
            return Err(invalid);
        }
        let n = usize::try_from(dimension).map_err(|_| invalid)?;
        let size = n.checked_add(1)
            .and_then(|n_plus_one| n.checked_mul(n_plus_one))
            .map(|product| product / 2)
            .filter(|&size| size <= isize::MAX as usize / mem::size_of::<i64>())
            .ok_or(invalid)?;

        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| invalid)?;
        data.resize(size, 0);

        Ok(Self { data, dimension: n, })
    }

    /// Number of rows, which equals the number of columns.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of values stored, `n (n + 1) / 2`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The stored lower triangle, column major.
    ///
    /// Column `1` from the diagonal down comes first, then column `2` from the diagonal down and so
    /// on. For dimension `3` the order is (1, 1), (2, 1), (3, 1), (2, 2), (3, 2), (3, 3).
    pub fn packed(&self) -> &[i64] {
        &self.data
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Arguments
    ///
    /// * `row`: Value in range `1..=self.dimension()`.
    /// * `column`: Value in range `1..=self.dimension()`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when either index is outside of `1..=self.dimension()`.
    pub fn get(&self, row: usize, column: usize) -> Result<i64, MatrixError> {
        self.check_bounds(row, column)?;

        Ok(self.value(row, column))
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// Coordinates above the diagonal are swapped first, so `set(1, 3, x)` and `set(3, 1, x)` have
    /// the same effect.
    ///
    /// # Arguments
    ///
    /// * `row`: Value in range `1..=self.dimension()`.
    /// * `column`: Value in range `1..=self.dimension()`.
    /// * `value`: New value for both (`row`, `column`) and (`column`, `row`).
    ///
    /// # Errors
    ///
    /// `OutOfRange` when either index is outside of `1..=self.dimension()`. Nothing is written in
    /// that case.
    pub fn set(&mut self, row: usize, column: usize, value: i64) -> Result<(), MatrixError> {
        self.check_bounds(row, column)?;

        let (row, column) = canonical(row, column);
        let index = offset(self.dimension, row, column);
        self.data[index] = value;

        Ok(())
    }

    /// Iterate over the rows of the full matrix.
    ///
    /// Each row is computed when it is requested. Calling this method again starts over at the
    /// first row.
    pub fn dense_rows(&self) -> impl ExactSizeIterator<Item = Vec<i64>> + '_ {
        (0..self.dimension).map(move |i| {
            (1..=self.dimension).map(|column| self.value(i + 1, column)).collect()
        })
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        let in_range = |index: usize| (1..=self.dimension).contains(&index);

        if in_range(row) && in_range(column) {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange { row, column, dimension: self.dimension, })
        }
    }

    fn value(&self, row: usize, column: usize) -> i64 {
        debug_assert!((1..=self.dimension).contains(&row));
        debug_assert!((1..=self.dimension).contains(&column));

        let (row, column) = canonical(row, column);
        self.data[offset(self.dimension, row, column)]
    }
}

/// Mirror a coordinate above the diagonal to the one below it.
fn canonical(row: usize, column: usize) -> (usize, usize) {
    if row >= column {
        (row, column)
    } else {
        (column, row)
    }
}

/// Position of a lower triangle coordinate in the packed data.
///
/// Column `column` starts after the `n + (n - 1) + ... + (n - column + 2)` values of the columns
/// before it, that is, after `(column - 1) (2n - column + 2) / 2` values. One of the two factors is
/// always even.
///
/// # Arguments
///
/// * `n`: Dimension of the matrix.
/// * `row`: 1-based row index, at least `column`.
/// * `column`: 1-based column index.
pub(super) fn offset(n: usize, row: usize, column: usize) -> usize {
    debug_assert!(1 <= column && column <= row && row <= n);

    (column - 1) * (2 * n + 2 - column) / 2 + (row - column)
}

impl Display for PackedSymmetric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.dense_rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
