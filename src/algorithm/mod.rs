//! # Algorithms
//!
//! Searches over integer slices and generation of string permutations. None of these keep any
//! state between calls; they read their input and return what they found.

pub mod permutation;
pub mod scan;
