//! # Bounded array
//!
//! Wrapping a `Vec` such that it never grows beyond a capacity chosen at creation.
use std::fmt;
use std::fmt::Display;
use std::ops::Deref;

use itertools::Itertools;
use thiserror::Error;

/// Capacity used when none is specified.
pub const DEFAULT_CAPACITY: usize = 20;

/// Attempt to hold more values than the capacity allows.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CapacityError {
    /// The values, possibly including one that was about to be pushed, don't fit.
    #[error("{len} values don't fit in an array of capacity {capacity}")]
    Exceeded {
        /// Maximum number of values.
        capacity: usize,
        /// Number of values that was requested.
        len: usize,
    },
}

/// A sequence of values with a maximum length.
///
/// Dereferences to a slice, so all read-only slice methods (and the scans in
/// `algorithm::scan`) can be used directly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bounded<I> {
    data: Vec<I>,
    capacity: usize,
}

impl<I> Bounded<I> {
    /// Wrap values, checking that they fit.
    ///
    /// # Arguments
    ///
    /// * `data`: Initial values.
    /// * `capacity`: Maximum number of values this array may ever hold.
    ///
    /// # Errors
    ///
    /// If there are more values than the capacity allows.
    pub fn new(data: Vec<I>, capacity: usize) -> Result<Self, CapacityError> {
        if data.len() > capacity {
            return Err(CapacityError::Exceeded { capacity, len: data.len(), });
        }

        Ok(Self { data, capacity, })
    }

    /// Wrap values using the `DEFAULT_CAPACITY`.
    pub fn with_default_capacity(data: Vec<I>) -> Result<Self, CapacityError> {
        Self::new(data, DEFAULT_CAPACITY)
    }

    /// Append a value at the end.
    ///
    /// # Errors
    ///
    /// When the array is already full. The array is left unchanged.
    pub fn push(&mut self, value: I) -> Result<(), CapacityError> {
        if self.data.len() == self.capacity {
            return Err(CapacityError::Exceeded { capacity: self.capacity, len: self.capacity + 1, });
        }

        self.data.push(value);
        Ok(())
    }

    /// Maximum number of values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether no more values can be pushed.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// View the values as a slice.
    pub fn as_slice(&self) -> &[I] {
        &self.data
    }

    /// Take the values out.
    pub fn into_inner(self) -> Vec<I> {
        self.data
    }
}

impl<I> Deref for Bounded<I> {
    type Target = [I];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<I> TryFrom<Vec<I>> for Bounded<I> {
    type Error = CapacityError;

    fn try_from(data: Vec<I>) -> Result<Self, Self::Error> {
        Self::with_default_capacity(data)
    }
}

impl<I: Display> Display for Bounded<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
