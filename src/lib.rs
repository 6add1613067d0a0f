//! # Packed symmetric matrices and array exercises
//!
//! A symmetric matrix is stored using only its lower triangle, halving the memory of a dense
//! matrix while keeping constant time access to every coordinate. Next to it live a few classic
//! exercises over integer arrays (gaps, duplicates, pairs with a given sum, both extremes in one
//! scan) and a string permutation generator.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
