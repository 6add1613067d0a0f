//! # Pairs with a given sum
use std::fmt;
use std::fmt::Display;

use num_traits::PrimInt;

use crate::algorithm::scan::ScanError;

/// Two positions whose values add up to `sum`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pair<I> {
    /// Lower index.
    pub first: usize,
    /// Higher index.
    pub second: usize,
    /// The target that was searched for.
    pub sum: I,
}

impl<I: Display> Display for Pair<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Found two values at elements {} and {} with a sum of {}",
            self.first, self.second, self.sum,
        )
    }
}

/// Find, for each index, the nearest later index such that the two values add up to `sum`.
///
/// Sums that would overflow never match. Takes quadratic time.
///
/// # Arguments
///
/// * `values`: Values in any order.
/// * `sum`: Target for the addition of two values.
///
/// # Return value
///
/// Pairs ordered by their `first` index, at most one for each `first` index.
pub fn pairs_with_sum<I: PrimInt>(values: &[I], sum: I) -> Vec<Pair<I>> {
    values.iter()
        .enumerate()
        .filter_map(|(first, &left)| {
            values[first + 1..].iter()
                .position(|right| left.checked_add(right) == Some(sum))
                .map(|distance| Pair { first, second: first + 1 + distance, sum })
        })
        .collect()
}

/// Find the same pairs as `pairs_with_sum`, using that the values are sorted.
///
/// For each index the search stops as soon as the sum of the two values exceeds `sum`, as all
/// values further along are at least as large.
///
/// # Arguments
///
/// * `values`: Ascending values.
/// * `sum`: Target for the addition of two values.
///
/// # Errors
///
/// `Unsorted` if `values` is not in ascending order, the early exit would miss pairs otherwise.
pub fn pairs_with_sum_sorted<I: PrimInt>(values: &[I], sum: I) -> Result<Vec<Pair<I>>, ScanError> {
    if let Some(index) = values.windows(2).position(|window| window[1] < window[0]) {
        return Err(ScanError::Unsorted { index: index + 1, });
    }

    let pairs = values.iter()
        .enumerate()
        .filter_map(|(first, &left)| {
            values[first + 1..].iter()
                // An overflowing sum is too large exactly when the right value is positive
                .take_while(|&&right| left.checked_add(&right).map_or(right < I::zero(), |total| total <= sum))
                .position(|right| left.checked_add(right) == Some(sum))
                .map(|distance| Pair { first, second: first + 1 + distance, sum })
        })
        .collect();

    Ok(pairs)
}
