//! In-bounds neighbor enumeration around a point.
use crate::{map::Dimensions, point::Point};

/// Iterator over the in-bounds points adjacent to a center point.
///
/// Yields points in row-major order (lowest row first, then lowest column),
/// excluding the center itself and anything outside the map. The iterator is
/// `Clone`, so a sequence can be restarted by cloning a fresh instance.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Point,
    dimensions: Dimensions,
    radius: i32,
    dr: i32,
    dc: i32,
}

impl Neighbors {
    /// Neighbors within a single step of `center` (at most 8).
    pub fn new(center: Point, dimensions: Dimensions) -> Self {
        Self::with_radius(center, dimensions, 1)
    }

    /// Neighbors within `radius` steps of `center`.
    ///
    /// Panics if `radius` is zero.
    pub fn with_radius(center: Point, dimensions: Dimensions, radius: u32) -> Self {
        if radius == 0 {
            panic!("Neighbor radius must be at least 1");
        }

        let radius = radius as i32;
        Neighbors {
            center,
            dimensions,
            radius,
            dr: -radius,
            dc: -radius,
        }
    }

    fn advance(&mut self) {
        self.dc += 1;
        if self.dc > self.radius {
            self.dc = -self.radius;
            self.dr += 1;
        }
    }
}

impl Iterator for Neighbors {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.dr <= self.radius {
            let (dr, dc) = (self.dr, self.dc);
            self.advance();

            if dr == 0 && dc == 0 {
                continue;
            }

            let candidate = Point::new(self.center.row + dr, self.center.column + dc);
            if self.dimensions.contains(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
