//! Compass directions and the per-tile direction bitmask used for rivers.
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::point::Point;

/// One of the eight compass directions, or [`Direction::Nowhere`] when two
/// points coincide.
///
/// North is the direction of decreasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North = 0,
    Northeast = 1,
    East = 2,
    Southeast = 3,
    South = 4,
    Southwest = 5,
    West = 6,
    Northwest = 7,
    Nowhere = 8,
}

impl Direction {
    /// Iterates over the eight compass directions, excluding `Nowhere`.
    pub fn compass() -> impl Iterator<Item = Direction> {
        Direction::iter().filter(|d| *d != Direction::Nowhere)
    }

    /// The direction of travel from `from` to `to`, derived from the signum
    /// of the coordinate deltas. Points further than one step apart map onto
    /// the same eight directions.
    pub fn between(from: Point, to: Point) -> Direction {
        match ((to.row - from.row).signum(), (to.column - from.column).signum()) {
            (-1, 0) => Direction::North,
            (-1, 1) => Direction::Northeast,
            (0, 1) => Direction::East,
            (1, 1) => Direction::Southeast,
            (1, 0) => Direction::South,
            (1, -1) => Direction::Southwest,
            (0, -1) => Direction::West,
            (-1, -1) => Direction::Northwest,
            _ => Direction::Nowhere,
        }
    }

    /// The unit (row, column) step for this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::Northeast => (-1, 1),
            Direction::East => (0, 1),
            Direction::Southeast => (1, 1),
            Direction::South => (1, 0),
            Direction::Southwest => (1, -1),
            Direction::West => (0, -1),
            Direction::Northwest => (-1, -1),
            Direction::Nowhere => (0, 0),
        }
    }

    /// True for the four diagonal directions.
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.vector();
        dr != 0 && dc != 0
    }
}

/// A compact set of [`Direction`]s, stored as a bitmask.
///
/// Used for the river directions recorded on a tile. A tile with a river
/// flowing through it typically records the direction of flow on both the
/// entry and exit sides.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet(u16);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// Returns this set with `direction` added. `Nowhere` is never stored.
    pub fn with(self, direction: Direction) -> Self {
        match direction {
            Direction::Nowhere => self,
            d => DirectionSet(self.0 | 1 << d as u16),
        }
    }

    pub fn insert(&mut self, direction: Direction) {
        *self = self.with(direction);
    }

    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Nowhere => false,
            d => self.0 & (1 << d as u16) != 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the directions present in the set, north first.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        let mask = self.0;
        Direction::compass().filter(move |d| mask & (1 << *d as u16) != 0)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::EMPTY, DirectionSet::with)
    }
}
