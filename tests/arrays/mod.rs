//! # Array exercises
//!
//! The seven exercises on their classic data sets, run on bounded arrays as an external user
//! would.
use itertools::Itertools;

use packsym::algorithm::scan;
use packsym::algorithm::scan::{Duplicate, Extremes, Gap, ScanError};
use packsym::data::bounded::{Bounded, CapacityError, DEFAULT_CAPACITY};
use packsym::io::console::parse_values;

fn array(values: &[i64]) -> Bounded<i64> {
    Bounded::try_from(values.to_vec()).unwrap()
}

#[test]
fn missing_element() {
    let values = array(&[1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);

    assert_eq!(scan::first_gap(&values), Some(Gap { index: 5, before: 6, after: 8 }));
}

#[test]
fn missing_elements() {
    let values = array(&[1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 15]);

    let found = scan::gaps(&values);
    assert_eq!(found.iter().map(|gap| gap.index).collect::<Vec<_>>(), vec![5, 8, 9]);
    assert_eq!(found.iter().map(ToString::to_string).collect::<Vec<_>>(), vec![
        "Found a missing value between element: 5, value change of 6 to 8",
        "Found a missing value between element: 8, value change of 10 to 12",
        "Found a missing value between element: 9, value change of 12 to 15",
    ]);

    let mask = scan::gap_mask(&values);
    assert_eq!(mask.len(), values.len());
    assert_eq!(mask.iter().positions(|&marked| marked).collect::<Vec<_>>(), vec![5, 8, 9]);
}

#[test]
fn sorted_duplicates() {
    let values = array(&[1, 2, 2, 4, 5, 6, 6, 9, 10, 12, 15]);

    assert_eq!(scan::adjacent_duplicates(&values), vec![
        Duplicate { first: 1, second: 2, value: 2 },
        Duplicate { first: 5, second: 6, value: 6 },
    ]);
}

#[test]
fn unsorted_duplicates() {
    let values = array(&[15, 2, 2, 4, 25, 6, 6, 10, 10, 10, 15]);

    let lines = scan::duplicates(&values).iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(lines, vec![
        "Found duplicate values at elements 0 and 10 with a value of 15",
        "Found duplicate values at elements 1 and 2 with a value of 2",
        "Found duplicate values at elements 5 and 6 with a value of 6",
        "Found duplicate values at elements 7 and 8 with a value of 10",
        "Found duplicate values at elements 8 and 9 with a value of 10",
    ]);
}

#[test]
fn pair_with_sum() {
    let values = array(&[15, 2, 2, 6, 25, 6, 6, 10, 0, 10, 12]);

    let lines = scan::pairs_with_sum(&values, 10).iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(lines, vec![
        "Found two values at elements 7 and 8 with a sum of 10",
        "Found two values at elements 8 and 9 with a sum of 10",
    ]);
}

#[test]
fn pair_with_sum_sorted() {
    let values = array(&[1, 2, 2, 4, 5, 6, 6, 9, 10, 12, 15]);

    let found = scan::pairs_with_sum_sorted(&values, 6).unwrap();
    assert_eq!(
        found.iter().map(|pair| (pair.first, pair.second)).collect::<Vec<_>>(),
        vec![(0, 4), (1, 3), (2, 3)],
    );
}

#[test]
fn max_and_min() {
    let values = array(&[15, 2, 2, 66, 25, 0, 6, 140, 10, 0, 15]);

    assert_eq!(scan::extremes(&values), Ok(Extremes { minimum: 0, maximum: 140 }));
    assert_eq!(scan::extremes(&array(&[3])), Err(ScanError::TooShort { required: 2, len: 1 }));
}

#[test]
fn user_values() {
    let values = Bounded::new(parse_values("4, -2, 9, 4").unwrap(), 4).unwrap();

    assert_eq!(scan::duplicates(&values).len(), 1);
    assert_eq!(scan::pairs_with_sum(&values, 2).len(), 2);
    assert!(Bounded::new(parse_values("1 2 3 4 5").unwrap(), 4).is_err());
}

#[test]
fn capacity_is_enforced() {
    let mut values = array(&[0; DEFAULT_CAPACITY]);

    assert_eq!(
        values.push(1),
        Err(CapacityError::Exceeded { capacity: DEFAULT_CAPACITY, len: DEFAULT_CAPACITY + 1 }),
    );
    assert_eq!(values.len(), DEFAULT_CAPACITY);
}
