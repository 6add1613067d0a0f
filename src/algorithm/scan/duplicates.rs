//! # Duplicates
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

/// Two positions holding the same value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Duplicate<I> {
    /// Lower index.
    pub first: usize,
    /// Higher index.
    pub second: usize,
    /// The shared value.
    pub value: I,
}

impl<I: Display> Display for Duplicate<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Found duplicate values at elements {} and {} with a value of {}",
            self.first, self.second, self.value,
        )
    }
}

/// Find equal neighbours in sorted values.
///
/// A run of `k` equal values is reported as the `k - 1` neighbouring pairs it consists of.
///
/// # Arguments
///
/// * `values`: Sorted values, such that equal values are next to each other.
pub fn adjacent_duplicates<I: Copy + PartialEq>(values: &[I]) -> Vec<Duplicate<I>> {
    values.iter()
        .copied()
        .tuple_windows()
        .enumerate()
        .filter(|&(_, (left, right))| left == right)
        .map(|(first, (value, _))| Duplicate { first, second: first + 1, value })
        .collect()
}

/// Find duplicates in values in any order.
///
/// Every index that has an equal value somewhere after it is reported once, paired with the nearest
/// such later index. Takes quadratic time.
pub fn duplicates<I: Copy + PartialEq>(values: &[I]) -> Vec<Duplicate<I>> {
    values.iter()
        .enumerate()
        .filter_map(|(first, &value)| {
            values[first + 1..].iter()
                .position(|&other| other == value)
                .map(|distance| Duplicate { first, second: first + 1 + distance, value })
        })
        .collect()
}
