//! This module defines [`Point`], a single location on the map grid.
use std::fmt;

/// A location on the map grid, addressed by row and column.
///
/// Points are ordered by row first, then column, which is the order used to
/// break ties everywhere in the crate so that queries are reproducible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

impl Point {
    /// Creates a new `Point` at the given row and column.
    pub const fn new(row: i32, column: i32) -> Self {
        Point { row, column }
    }

    /// The 8-directional grid distance to `other`:
    /// `max(|Δrow|, |Δcolumn|)`.
    pub fn chebyshev_distance(&self, other: Point) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.column - other.column).unsigned_abs();
        dr.max(dc)
    }

    /// Returns true if `other` is within one step on every axis and is not
    /// this point itself.
    pub fn is_adjacent(&self, other: Point) -> bool {
        *self != other && self.chebyshev_distance(other) <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
