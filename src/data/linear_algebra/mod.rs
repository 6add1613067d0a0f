//! # Linear algebra primitives
//!
//! Matrices stored in a compacted format.

pub mod matrix;
