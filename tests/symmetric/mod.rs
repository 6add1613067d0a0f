//! # Symmetric matrices
//!
//! Reading, populating and rendering through the public interface.
use std::io::Cursor;
use std::path::{Path, PathBuf};

use packsym::data::linear_algebra::matrix::{MatrixError, PackedSymmetric};
use packsym::io::console::{read_symmetric, Strictness, write_dense};
use packsym::io::error::ImportError;
use packsym::io::import;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn matrix_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("matrices")
}

/// Compute the path of a matrix file, based on its name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    matrix_file_directory().join(name).with_extension("txt")
}

fn render(matrix: &PackedSymmetric) -> String {
    let mut output = Vec::new();
    write_dense(matrix, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn populate_lower_triangle() {
    let mut matrix = PackedSymmetric::new(3).unwrap();
    let values = [(1, 1, 1), (2, 1, 2), (2, 2, 3), (3, 1, 4), (3, 2, 5), (3, 3, 6)];
    for (row, column, value) in values {
        matrix.set(row, column, value).unwrap();
    }

    assert_eq!(matrix.size(), 6);
    assert_eq!(render(&matrix), "1 2 4\n2 3 5\n4 5 6\n");
    for (row, column, value) in values {
        assert_eq!(matrix.get(column, row), Ok(value));
    }
}

#[test]
fn console_session() {
    // Every value typed on its own line, like answering a prompt
    let input = ["3", "1", "2", "4", "2", "3", "5", "4", "5", "6"].join("\n");

    let matrix = read_symmetric(Cursor::new(input), Strictness::Strict).unwrap();
    assert_eq!(render(&matrix), "1 2 4\n2 3 5\n4 5 6\n");
}

#[test]
fn from_file() {
    let matrix = import(&get_test_file_path("three"), Strictness::Strict).unwrap();
    assert_eq!(matrix.packed(), &[1, 2, 4, 3, 5, 6]);
}

#[test]
fn upper_triangle_of_file_is_ignored() {
    let path = get_test_file_path("lower_only");

    let matrix = import(&path, Strictness::Lenient).unwrap();
    assert_eq!(render(&matrix), "1 2 4\n2 3 5\n4 5 6\n");

    assert!(matches!(
        import(&path, Strictness::Strict),
        Err(ImportError::Asymmetric { row: 2, column: 1, upper: 0, lower: 2 }),
    ));
}

#[test]
fn truncated_file() {
    let result = import(&get_test_file_path("truncated"), Strictness::Lenient);

    assert!(matches!(result, Err(ImportError::MissingValues { expected: 16, found: 3 })));
}

#[test]
fn missing_file() {
    let result = import(&get_test_file_path("does_not_exist"), Strictness::Lenient);

    assert!(matches!(result, Err(ImportError::IO(_))));
}

#[test]
fn invalid_dimensions() {
    for dimension in [0, -5] {
        assert_eq!(PackedSymmetric::new(dimension), Err(MatrixError::InvalidDimension { dimension }));
    }
}

#[test]
fn half_the_memory() {
    for n in 1..=50 {
        let matrix = PackedSymmetric::new(n).unwrap();
        let n = n as usize;

        assert_eq!(matrix.dimension(), n);
        assert_eq!(matrix.size(), n * (n + 1) / 2);
        assert_eq!(matrix.dense_rows().map(|row| row.len()).sum::<usize>(), n * n);
    }
}

#[test]
fn every_coordinate_is_independent() {
    let n = 6;
    let mut matrix = PackedSymmetric::new(n as i64).unwrap();
    for row in 1..=n {
        for column in 1..=row {
            matrix.set(row, column, (10 * row + column) as i64).unwrap();
        }
    }

    for row in 1..=n {
        for column in 1..=n {
            let (high, low) = (row.max(column), row.min(column));
            assert_eq!(matrix.get(row, column), Ok((10 * high + low) as i64));
        }
    }
    assert!(matches!(matrix.get(7, 1), Err(MatrixError::OutOfRange { row: 7, column: 1, dimension: 6 })));
}
