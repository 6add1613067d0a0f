//! # Array scans
//!
//! Classic single-array exercises: finding gaps in sorted data, finding duplicates, finding pairs
//! that add up to a target and finding both extremes in a single pass.
//!
//! All routines take a slice and report element positions as 0-based indices into it. Nothing
//! found is an empty `Vec` or `None`.
use thiserror::Error;

pub use duplicates::{adjacent_duplicates, Duplicate, duplicates};
pub use extremes::{Extremes, extremes};
pub use gaps::{first_gap, Gap, gap_mask, gaps};
pub use pair_sum::{Pair, pairs_with_sum, pairs_with_sum_sorted};

mod duplicates;
mod extremes;
mod gaps;
mod pair_sum;

/// A scan that can't produce a meaningful answer for its input.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScanError {
    /// Fewer elements than the scan needs.
    #[error("need an array of size >= {required}, got {len}")]
    TooShort {
        /// Minimum number of elements.
        required: usize,
        /// Number of elements received.
        len: usize,
    },
    /// A scan for sorted input received values that are not in ascending order.
    #[error("the values need to be sorted in ascending order, element {index} is smaller than the one before it")]
    Unsorted {
        /// First index whose value is smaller than its predecessor.
        index: usize,
    },
}
