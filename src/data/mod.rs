//! # Storing of matrices and arrays in memory
//!
//! This module provides the data structures that the exercises operate on. Algorithms working on
//! plain slices live in `algorithm`.

pub mod bounded;
pub mod linear_algebra;
