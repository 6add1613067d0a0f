//! # Minimum and maximum in one scan
use std::fmt;
use std::fmt::Display;

use crate::algorithm::scan::ScanError;

/// Smallest and largest value of an array.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Extremes<I> {
    #[allow(missing_docs)]
    pub minimum: I,
    #[allow(missing_docs)]
    pub maximum: I,
}

impl<I: Display> Display for Extremes<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "The maximum value is {} and the minimum value is {}", self.maximum, self.minimum)
    }
}

/// Find the minimum and maximum while reading each value once.
///
/// The first two values seed both extremes with a single comparison. After that a value only
/// needs to be compared with the maximum when it isn't below the minimum.
///
/// # Errors
///
/// When there are fewer than two values.
pub fn extremes<I: Copy + Ord>(values: &[I]) -> Result<Extremes<I>, ScanError> {
    let [first, second, rest @ ..] = values else {
        return Err(ScanError::TooShort { required: 2, len: values.len(), });
    };

    let (mut minimum, mut maximum) = if first >= second {
        (*second, *first)
    } else {
        (*first, *second)
    };
    for &value in rest {
        if value < minimum {
            minimum = value;
        } else if value > maximum {
            maximum = value;
        }
    }

    Ok(Extremes { minimum, maximum })
}
