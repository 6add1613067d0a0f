//! # Console input and output
//!
//! Matrices are read as whitespace separated integers: first the dimension `n`, then all `n * n`
//! values row by row. Input is consumed lazily, line by line, so an interactive session doesn't
//! need to be closed before the matrix is complete.
use std::io;
use std::io::{BufRead, Write};
use std::vec;

use crate::data::linear_algebra::matrix::PackedSymmetric;
use crate::io::error::{ImportError, parse_integer, ParseError};

/// How to treat input that isn't symmetric.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Strictness {
    /// Keep the value below the diagonal, ignore the value above it.
    #[default]
    Lenient,
    /// Reject the input.
    Strict,
}

/// Read a symmetric matrix.
///
/// Every value is written with `PackedSymmetric::set`. Because the value at (`column`, `row`)
/// comes before the value at (`row`, `column`) for `row > column`, the values below the diagonal
/// are the ones that remain.
///
/// # Arguments
///
/// * `reader`: Source of the text. Tokens after the last matrix value are not read.
/// * `strictness`: Whether asymmetric input is an error.
///
/// # Errors
///
/// When the input can't be read, contains a token that isn't an integer, has an invalid dimension,
/// ends too early or, when reading strictly, isn't symmetric.
pub fn read_symmetric<R: BufRead>(
    reader: R,
    strictness: Strictness,
) -> Result<PackedSymmetric, ImportError> {
    let mut tokens = Tokens::new(reader);

    let dimension = tokens.next_integer()?.ok_or(ImportError::MissingDimension)?;
    let mut matrix = PackedSymmetric::new(dimension)?;

    let n = matrix.dimension();
    let expected = n.saturating_mul(n);
    let mut found = 0;
    for row in 1..=n {
        for column in 1..=n {
            let value = tokens.next_integer()?
                .ok_or(ImportError::MissingValues { expected, found, })?;
            found += 1;

            if strictness == Strictness::Strict && row > column {
                // Still holds the value read for (column, row)
                let upper = matrix.get(row, column)?;
                if upper != value {
                    return Err(ImportError::Asymmetric { row, column, upper, lower: value, });
                }
            }
            matrix.set(row, column, value)?;
        }
    }

    Ok(matrix)
}

/// Write all `n * n` values of a matrix, one line per row.
pub fn write_dense<W: Write>(matrix: &PackedSymmetric, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", matrix)?;
    writer.flush()
}

/// Read a list of integers separated by commas, whitespace or both.
///
/// # Errors
///
/// If any of the items isn't an integer.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_integer(token, index + 1))
        .collect()
}

/// Whitespace separated tokens, read one line at a time.
struct Tokens<R> {
    lines: io::Lines<R>,
    pending: vec::IntoIter<String>,
    /// Number of tokens handed out so far.
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            position: 0,
        }
    }

    /// The next token as an integer, `None` at the end of the input.
    fn next_integer(&mut self) -> Result<Option<i64>, ImportError> {
        loop {
            if let Some(token) = self.pending.next() {
                self.position += 1;
                return Ok(Some(parse_integer(&token, self.position)?));
            }

            match self.lines.next() {
                Some(line) => {
                    self.pending = line?
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                None => return Ok(None),
            }
        }
    }
}
