//! # Missing values
//!
//! In a sorted array of consecutive integers, a step of more than one between neighbours means
//! that values are missing.
use std::fmt;
use std::fmt::Display;
use std::iter;

use itertools::Itertools;
use num_traits::PrimInt;

/// Two neighbouring elements with at least one value missing between them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Gap<I> {
    /// Index of the element before the gap; the element after it is at `index + 1`.
    pub index: usize,
    /// Value at `index`.
    pub before: I,
    /// Value at `index + 1`.
    pub after: I,
}

impl<I: PrimInt> Gap<I> {
    /// The values strictly between `before` and `after`, ascending.
    pub fn missing(self) -> impl Iterator<Item = I> {
        let after = self.after;

        iter::successors(self.before.checked_add(&I::one()), |value| value.checked_add(&I::one()))
            .take_while(move |&value| value < after)
    }
}

impl<I: Display> Display for Gap<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Found a missing value between element: {}, value change of {} to {}",
            self.index, self.before, self.after,
        )
    }
}

/// Whether stepping from `before` to `after` skips at least one value.
///
/// Written without a subtraction so that neighbours far apart can't overflow.
fn skips_values<I: PrimInt>(before: I, after: I) -> bool {
    before.checked_add(&I::one()).is_some_and(|next| after > next)
}

fn all_gaps<I: PrimInt>(values: &[I]) -> impl Iterator<Item = Gap<I>> + '_ {
    values.iter()
        .copied()
        .tuple_windows()
        .enumerate()
        .filter(|&(_, (before, after))| skips_values(before, after))
        .map(|(index, (before, after))| Gap { index, before, after })
}

/// Find the first place where values are missing.
///
/// # Arguments
///
/// * `values`: Ascending values.
///
/// # Return value
///
/// The first gap, or `None` if neighbouring values never differ by more than one.
pub fn first_gap<I: PrimInt>(values: &[I]) -> Option<Gap<I>> {
    all_gaps(values).next()
}

/// Find all places where values are missing, ordered by index.
///
/// # Arguments
///
/// * `values`: Ascending values.
pub fn gaps<I: PrimInt>(values: &[I]) -> Vec<Gap<I>> {
    all_gaps(values).collect()
}

/// Mark, for each index, whether a gap follows the element at that index.
///
/// The result has the same length as `values`; the last entry is always `false`.
pub fn gap_mask<I: PrimInt>(values: &[I]) -> Vec<bool> {
    let mut mask = vec![false; values.len()];
    for gap in all_gaps(values) {
        mask[gap.index] = true;
    }

    mask
}
