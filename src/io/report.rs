//! # Reports of the array exercises
//!
//! Runs a scan and writes its findings as text, one line per finding. When nothing was found, a
//! single line says so.
use std::fmt::Display;
use std::io;
use std::io::Write;

use clap::ValueEnum;

use crate::algorithm::scan;
use crate::algorithm::scan::ScanError;
use crate::data::bounded::Bounded;
use crate::io::error::ReportError;

/// One of the seven array exercises.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Routine {
    /// First gap in sorted values
    Missing,
    /// All gaps in sorted values
    AllMissing,
    /// Equal neighbours in sorted values
    Duplicates,
    /// Equal values anywhere
    DuplicatesUnsorted,
    /// Pairs adding up to the sum
    PairSum,
    /// Pairs adding up to the sum in sorted values
    PairSumSorted,
    /// Minimum and maximum
    Extremes,
}

impl Routine {
    /// Short description of the exercise, used as a heading.
    ///
    /// # Arguments
    ///
    /// * `sum`: Target of the pair searches, not shown for the other routines.
    pub fn describe(self, sum: i64) -> String {
        match self {
            Routine::Missing => "finding a missing element in a sorted array".to_string(),
            Routine::AllMissing => "finding missing elements in a sorted array".to_string(),
            Routine::Duplicates => "finding duplicates in an array".to_string(),
            Routine::DuplicatesUnsorted => "finding duplicates in an unsorted array".to_string(),
            Routine::PairSum => format!("finding a pair of elements with the sum of {}", sum),
            Routine::PairSumSorted => format!("finding a pair of elements with the sum of {} in a sorted array", sum),
            Routine::Extremes => "finding the max and min in one scan of an array".to_string(),
        }
    }
}

/// The data sets of the seven exercises, in order, with the target sum where one is used.
pub fn demonstration_data() -> Vec<(Routine, Vec<i64>, i64)> {
    vec![
        (Routine::Missing, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12], 0),
        (Routine::AllMissing, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 15], 0),
        (Routine::Duplicates, vec![1, 2, 2, 4, 5, 6, 6, 9, 10, 12, 15], 0),
        (Routine::DuplicatesUnsorted, vec![15, 2, 2, 4, 25, 6, 6, 10, 10, 10, 15], 0),
        (Routine::PairSum, vec![15, 2, 2, 6, 25, 6, 6, 10, 0, 10, 12], 10),
        (Routine::PairSumSorted, vec![1, 2, 2, 4, 5, 6, 6, 9, 10, 12, 15], 6),
        (Routine::Extremes, vec![15, 2, 2, 66, 25, 0, 6, 140, 10, 0, 15], 0),
    ]
}

/// Run all seven exercises on their data sets, each under a numbered heading.
///
/// # Errors
///
/// If a data set holds more than `capacity` values, or writing fails.
pub fn demonstrations<W: Write>(out: &mut W, capacity: usize) -> Result<(), ReportError> {
    for (number, (routine, data, sum)) in demonstration_data().into_iter().enumerate() {
        let values = Bounded::new(data, capacity)?;
        writeln!(out, "Example {}, {}.", number + 1, routine.describe(sum))?;
        report(out, routine, &values, sum)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Run a routine and write one line per finding, or a single line if nothing was found.
///
/// Too few values for `Extremes` is reported as a line of output, not as an error.
///
/// # Errors
///
/// `Scan` if `PairSumSorted` receives values that aren't sorted, `IO` if writing fails.
pub fn report<W: Write>(
    out: &mut W,
    routine: Routine,
    values: &Bounded<i64>,
    sum: i64,
) -> Result<(), ReportError> {
    let values: &[i64] = values;

    match routine {
        Routine::Missing => lines(out, scan::first_gap(values).as_slice(), "Nothing missing here")?,
        Routine::AllMissing => lines(out, &scan::gaps(values), "Nothing missing here")?,
        Routine::Duplicates => lines(out, &scan::adjacent_duplicates(values), "No duplicates found")?,
        Routine::DuplicatesUnsorted => lines(out, &scan::duplicates(values), "No duplicates found")?,
        Routine::PairSum => lines(out, &scan::pairs_with_sum(values, sum), "No operands found")?,
        Routine::PairSumSorted => lines(out, &scan::pairs_with_sum_sorted(values, sum)?, "No operands found")?,
        Routine::Extremes => match scan::extremes(values) {
            Ok(extremes) => writeln!(out, "{}", extremes)?,
            Err(ScanError::TooShort { required, .. }) => writeln!(out, "Need an array of size >= {}", required)?,
            Err(error) => return Err(error.into()),
        },
    }

    Ok(())
}

fn lines<W: Write, T: Display>(out: &mut W, found: &[T], nothing: &str) -> io::Result<()> {
    if found.is_empty() {
        writeln!(out, "{}", nothing)
    } else {
        found.iter().try_for_each(|item| writeln!(out, "{}", item))
    }
}
