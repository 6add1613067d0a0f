//! # Reading and writing of matrices
//!
//! This module provides the console side of the exercises: reading a symmetric matrix from text,
//! rendering it as a full square of numbers, reading lists of integers and reporting the results of
//! the array exercises.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data::linear_algebra::matrix::PackedSymmetric;
use crate::io::console::Strictness;
use crate::io::error::ImportError;

pub mod console;
pub mod error;
pub mod report;

/// Import a symmetric matrix from a file.
///
/// The file has the same contents as what would otherwise be typed on the console, see
/// `console::read_symmetric`.
///
/// # Errors
///
/// When the file cannot be found or read, or its contents don't describe a symmetric matrix.
pub fn import(file_path: &Path, strictness: Strictness) -> Result<PackedSymmetric, ImportError> {
    let file = File::open(file_path)?;

    console::read_symmetric(BufReader::new(file), strictness)
}
