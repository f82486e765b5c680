//! The read-only map query interface consumed by the pathfinder, and a
//! concrete grid-backed implementation of it.
use ndarray::Array2;
use smallvec::SmallVec;

use crate::{
    dir::{Direction, DirectionSet},
    point::Point,
    terrain::{Fixture, TerrainType},
};

/// The size of a map in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: u32,
    pub columns: u32,
}

impl Dimensions {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Dimensions { rows, columns }
    }

    /// Whether `point` lies within `[0, rows) x [0, columns)`.
    pub fn contains(&self, point: Point) -> bool {
        point.row >= 0
            && point.column >= 0
            && (point.row as u32) < self.rows
            && (point.column as u32) < self.columns
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only queries the pathfinder makes against a world map.
///
/// The pathfinder never mutates the map and never caches answers to these
/// queries beyond a single relaxation step, so implementations are free to
/// compute them on the fly.
pub trait TravelMap {
    /// The map size. Points outside these bounds are invalid geometry.
    fn dimensions(&self) -> Dimensions;

    /// Every currently enumerable location on the map, in row-major order.
    fn locations(&self) -> Vec<Point>;

    /// The base terrain at `point`, or `None` if it has never been surveyed.
    fn base_terrain(&self, point: Point) -> Option<TerrainType>;

    /// Whether the tile at `point` is mountainous terrain.
    fn is_mountainous(&self, point: Point) -> bool;

    /// The fixtures present on the tile at `point`.
    fn fixtures_at(&self, point: Point) -> &[Fixture];

    /// The river directions recorded on the tile at `point`.
    fn river_directions(&self, point: Point) -> DirectionSet;
}

impl<M: TravelMap + ?Sized> TravelMap for &M {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn locations(&self) -> Vec<Point> {
        (**self).locations()
    }

    fn base_terrain(&self, point: Point) -> Option<TerrainType> {
        (**self).base_terrain(point)
    }

    fn is_mountainous(&self, point: Point) -> bool {
        (**self).is_mountainous(point)
    }

    fn fixtures_at(&self, point: Point) -> &[Fixture] {
        (**self).fixtures_at(point)
    }

    fn river_directions(&self, point: Point) -> DirectionSet {
        (**self).river_directions(point)
    }
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Cell {
    terrain: Option<TerrainType>,
    mountainous: bool,
    fixtures: SmallVec<[Fixture; 2]>,
    rivers: DirectionSet,
}

/// A dense, in-memory [`TravelMap`] backed by a 2D array of cells.
///
/// Intended for tests, tools, and hosts that already hold the whole map in
/// memory. Hosts with their own map representation implement [`TravelMap`]
/// directly instead.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    cells: Array2<Cell>,
}

impl GridMap {
    /// Creates a map of the given size with every tile set to `terrain`.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: u32, columns: u32, terrain: TerrainType) -> Self {
        if rows == 0 || columns == 0 {
            panic!("Map dimensions must be at least 1x1");
        }

        let cell = Cell {
            terrain: Some(terrain),
            ..Cell::default()
        };

        GridMap {
            cells: Array2::from_elem((rows as usize, columns as usize), cell),
        }
    }

    fn cell(&self, point: Point) -> Option<&Cell> {
        if !self.dimensions().contains(point) {
            return None;
        }
        self.cells.get((point.row as usize, point.column as usize))
    }

    fn cell_mut(&mut self, point: Point) -> &mut Cell {
        if !self.dimensions().contains(point) {
            panic!("{point} is out of bounds");
        }
        &mut self.cells[(point.row as usize, point.column as usize)]
    }

    /// Sets the terrain at `point`. `None` marks the tile as never surveyed.
    ///
    /// Panics if `point` is out of bounds.
    pub fn set_terrain(&mut self, point: Point, terrain: Option<TerrainType>) {
        self.cell_mut(point).terrain = terrain;
    }

    /// Marks or unmarks the tile at `point` as mountainous.
    pub fn set_mountainous(&mut self, point: Point, mountainous: bool) {
        self.cell_mut(point).mountainous = mountainous;
    }

    /// Adds a fixture to the tile at `point`.
    pub fn add_fixture(&mut self, point: Point, fixture: Fixture) {
        self.cell_mut(point).fixtures.push(fixture);
    }

    /// Records a river direction on the tile at `point`.
    pub fn add_river(&mut self, point: Point, direction: Direction) {
        self.cell_mut(point).rivers.insert(direction);
    }
}

impl TravelMap for GridMap {
    fn dimensions(&self) -> Dimensions {
        let (rows, columns) = self.cells.dim();
        Dimensions::new(rows as u32, columns as u32)
    }

    fn locations(&self) -> Vec<Point> {
        let dims = self.dimensions();
        let mut locations = Vec::with_capacity(dims.len());
        for row in 0..dims.rows as i32 {
            for column in 0..dims.columns as i32 {
                locations.push(Point::new(row, column));
            }
        }
        locations
    }

    fn base_terrain(&self, point: Point) -> Option<TerrainType> {
        self.cell(point).and_then(|c| c.terrain)
    }

    fn is_mountainous(&self, point: Point) -> bool {
        self.cell(point).is_some_and(|c| c.mountainous)
    }

    fn fixtures_at(&self, point: Point) -> &[Fixture] {
        self.cell(point).map_or(&[], |c| &c.fixtures)
    }

    fn river_directions(&self, point: Point) -> DirectionSet {
        self.cell(point).map_or(DirectionSet::EMPTY, |c| c.rivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_contains() {
        let dims = Dimensions::new(3, 4);
        assert!(dims.contains(Point::new(0, 0)));
        assert!(dims.contains(Point::new(2, 3)));
        assert!(!dims.contains(Point::new(3, 0)));
        assert!(!dims.contains(Point::new(0, 4)));
        assert!(!dims.contains(Point::new(-1, 0)));
        assert_eq!(dims.len(), 12);
    }

    #[test]
    fn test_locations_row_major() {
        let map = GridMap::new(2, 3, TerrainType::Plains);
        assert_eq!(
            map.locations(),
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_grid_map_queries() {
        let mut map = GridMap::new(4, 4, TerrainType::Steppe);
        let p = Point::new(1, 2);

        map.set_terrain(p, Some(TerrainType::Jungle));
        map.set_mountainous(p, true);
        map.add_fixture(p, Fixture::Forest);
        map.add_river(p, Direction::East);

        assert_eq!(map.base_terrain(p), Some(TerrainType::Jungle));
        assert!(map.is_mountainous(p));
        assert_eq!(map.fixtures_at(p), &[Fixture::Forest]);
        assert!(map.river_directions(p).contains(Direction::East));

        let untouched = Point::new(0, 0);
        assert_eq!(map.base_terrain(untouched), Some(TerrainType::Steppe));
        assert!(!map.is_mountainous(untouched));
        assert!(map.fixtures_at(untouched).is_empty());
        assert!(map.river_directions(untouched).is_empty());
    }

    #[test]
    fn test_unsurveyed_tile() {
        let mut map = GridMap::new(2, 2, TerrainType::Plains);
        map.set_terrain(Point::new(1, 1), None);
        assert_eq!(map.base_terrain(Point::new(1, 1)), None);
    }

    #[test]
    fn test_queries_outside_bounds() {
        let map = GridMap::new(2, 2, TerrainType::Plains);
        let outside = Point::new(5, 5);
        assert_eq!(map.base_terrain(outside), None);
        assert!(!map.is_mountainous(outside));
        assert!(map.fixtures_at(outside).is_empty());
        assert!(map.river_directions(outside).is_empty());
    }

    #[test]
    fn test_trait_through_reference() {
        let map = GridMap::new(2, 2, TerrainType::Plains);
        fn dims<M: TravelMap>(map: M) -> Dimensions {
            map.dimensions()
        }
        assert_eq!(dims(&map), Dimensions::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_zero_dimension_panics() {
        let _ = GridMap::new(0, 5, TerrainType::Plains);
    }
}
