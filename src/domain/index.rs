//! One-based display index.

use std::fmt;

/// A position in a displayed list.
///
/// Users refer to list entries by their 1-based position; internal code
/// indexes with 0-based offsets. `Index` keeps the two from being mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize); // zero-based

/// Error returned when a 1-based index is not positive.
#[derive(Debug, Clone, thiserror::Error)]
#[error("index must be a positive integer")]
pub struct ParseIndexError;

impl Index {
    /// Creates an index from a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `ParseIndexError` if `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Result<Self, ParseIndexError> {
        one_based.checked_sub(1).map(Self).ok_or(ParseIndexError)
    }

    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
