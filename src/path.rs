//! This module defines the `Path` result of a travel-distance query.
use std::collections::VecDeque;

use crate::{point::Point, MovementCost, UNREACHABLE};

/// The result of a pathfinding query: the ordered points of the route and
/// its total movement cost.
///
/// An unreachable destination is represented by [`Path::unreachable`]: an
/// empty point list with the sentinel cost. That is a normal outcome, not an
/// error.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: VecDeque<Point>,
    cost: MovementCost,
}

impl Path {
    /// Create a new path from a vector of points and its total cost.
    pub fn new(points: Vec<Point>, cost: MovementCost) -> Self {
        Path {
            points: points.into_iter().collect(),
            cost,
        }
    }

    /// The "no route exists" result.
    pub fn unreachable() -> Self {
        Path {
            points: VecDeque::new(),
            cost: UNREACHABLE,
        }
    }

    /// True if this path represents an unreachable destination.
    pub fn is_unreachable(&self) -> bool {
        self.cost >= UNREACHABLE
    }

    /// The points of the route, origin first.
    pub fn points(&self) -> &[Point] {
        self.points.as_slices().0
    }

    /// The total movement cost of the route.
    pub fn cost(&self) -> MovementCost {
        self.cost
    }

    /// The number of points on the route, including the origin.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the route passes through `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Removes and returns the first point of the route.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop_front()
    }

    /// The next point on the route without removing it.
    pub fn peek(&self) -> Option<Point> {
        self.points.front().copied()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.cost == other.cost
    }
}

impl Eq for Path {}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::collections::vec_deque::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
