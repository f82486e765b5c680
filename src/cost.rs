//! The directional movement cost function.
use crate::{
    dir::Direction,
    map::TravelMap,
    point::Point,
    MovementCost, UNREACHABLE,
};

/// Surcharge for a mountainous tile.
pub const MOUNTAIN_SURCHARGE: MovementCost = 1;
/// Surcharge for a tile with vegetation on it.
pub const VEGETATION_SURCHARGE: MovementCost = 1;

/// The movement-point rate of a single tile: terrain base cost plus
/// mountain, vegetation, and fixture surcharges.
///
/// [`UNREACHABLE`] for impassable terrain and for tiles that have never
/// been surveyed; ground the explorer has not seen cannot be planned
/// through.
pub fn tile_cost<M: TravelMap>(map: &M, point: Point) -> MovementCost {
    let Some(terrain) = map.base_terrain(point) else {
        return UNREACHABLE;
    };

    let base = terrain.base_cost();
    if base >= UNREACHABLE {
        return UNREACHABLE;
    }

    let mut cost = base;
    if map.is_mountainous(point) {
        cost += MOUNTAIN_SURCHARGE;
    }

    let fixtures = map.fixtures_at(point);
    if fixtures.iter().any(|f| f.is_vegetation()) {
        cost += VEGETATION_SURCHARGE;
    }
    cost + fixtures.iter().map(|f| f.cost_modifier()).sum::<MovementCost>()
}

/// The cost in movement points of crossing the edge from `from` onto `to`.
///
/// Crossing is charged at the rate of the harder of the two tiles, so with
/// no rivers involved the cost is the same in both directions. A river
/// recorded at both endpoints in the direction of travel halves the step,
/// which is the only way the reverse step can cost more. For distinct
/// points the result is always at least 1, which the pathfinder's callback
/// contract requires; an edge touching an impassable or unsurveyed tile
/// costs [`UNREACHABLE`].
///
/// # Arguments
/// * `map` - The map to query terrain, fixtures, and rivers from.
/// * `from` - The tile being left.
/// * `to` - The tile being entered.
pub fn movement_cost<M: TravelMap>(map: &M, from: Point, to: Point) -> MovementCost {
    let direction = Direction::between(from, to);
    if direction == Direction::Nowhere {
        return 0;
    }

    let leaving = tile_cost(map, from);
    let entering = tile_cost(map, to);
    if leaving >= UNREACHABLE || entering >= UNREACHABLE {
        return UNREACHABLE;
    }

    let mut cost = leaving.max(entering);

    // Traveling with the current of a river recorded at both endpoints
    // halves the cost of the step.
    if map.river_directions(from).contains(direction)
        && map.river_directions(to).contains(direction)
    {
        cost = ((cost + 1) / 2).max(1);
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::GridMap;
    use crate::terrain::{Fixture, TerrainType};
    use rand::prelude::*;

    #[test]
    fn test_plains_step() {
        let map = GridMap::new(3, 3, TerrainType::Plains);
        assert_eq!(movement_cost(&map, Point::new(0, 0), Point::new(0, 1)), 1);
        assert_eq!(movement_cost(&map, Point::new(0, 0), Point::new(1, 1)), 1);
    }

    #[test]
    fn test_same_point_costs_nothing() {
        let map = GridMap::new(3, 3, TerrainType::Plains);
        assert_eq!(movement_cost(&map, Point::new(1, 1), Point::new(1, 1)), 0);
    }

    #[test]
    fn test_harder_tile_sets_the_rate() {
        let mut map = GridMap::new(3, 3, TerrainType::Plains);
        map.set_terrain(Point::new(1, 1), Some(TerrainType::Jungle));

        // Same rate whichever endpoint is the jungle.
        assert_eq!(movement_cost(&map, Point::new(0, 0), Point::new(1, 1)), 2);
        assert_eq!(movement_cost(&map, Point::new(1, 1), Point::new(0, 0)), 2);
    }

    #[test]
    fn test_ocean_is_impassable() {
        let mut map = GridMap::new(3, 3, TerrainType::Plains);
        map.set_terrain(Point::new(1, 1), Some(TerrainType::Ocean));
        assert_eq!(
            movement_cost(&map, Point::new(0, 0), Point::new(1, 1)),
            UNREACHABLE
        );
    }

    #[test]
    fn test_unsurveyed_is_impassable() {
        let mut map = GridMap::new(3, 3, TerrainType::Plains);
        map.set_terrain(Point::new(1, 1), None);
        assert_eq!(
            movement_cost(&map, Point::new(0, 0), Point::new(1, 1)),
            UNREACHABLE
        );
    }

    #[test]
    fn test_surcharges_stack() {
        let mut map = GridMap::new(3, 3, TerrainType::Plains);
        let p = Point::new(1, 1);
        map.set_mountainous(p, true);
        map.add_fixture(p, Fixture::Forest);
        map.add_fixture(p, Fixture::Hill);

        // base 1 + mountain 1 + vegetation 1 + hill 1
        assert_eq!(tile_cost(&map, p), 4);
        assert_eq!(movement_cost(&map, Point::new(0, 0), p), 4);
    }

    #[test]
    fn test_two_vegetation_fixtures_charge_once() {
        let mut map = GridMap::new(3, 3, TerrainType::Plains);
        let p = Point::new(1, 1);
        map.add_fixture(p, Fixture::Forest);
        map.add_fixture(p, Fixture::Grove);

        assert_eq!(movement_cost(&map, Point::new(0, 0), p), 2);
    }

    #[test]
    fn test_river_speeds_up_travel_with_the_current() {
        let mut map = GridMap::new(1, 3, TerrainType::Swamp);
        let a = Point::new(0, 0);
        let b = Point::new(0, 1);
        map.add_river(a, Direction::East);
        map.add_river(b, Direction::East);

        // With the current: halved. Against it: full swamp rate.
        assert_eq!(movement_cost(&map, a, b), 1);
        assert_eq!(movement_cost(&map, b, a), 2);
    }

    #[test]
    fn test_river_at_one_endpoint_only_gives_no_bonus() {
        let mut map = GridMap::new(1, 3, TerrainType::Swamp);
        let a = Point::new(0, 0);
        let b = Point::new(0, 1);
        map.add_river(a, Direction::East);

        assert_eq!(movement_cost(&map, a, b), 2);
    }

    #[test]
    fn test_costs_symmetric_without_rivers() {
        let mut map = GridMap::new(4, 4, TerrainType::Plains);
        map.set_terrain(Point::new(1, 2), Some(TerrainType::Jungle));
        map.set_mountainous(Point::new(2, 2), true);
        map.add_fixture(Point::new(0, 3), Fixture::Hill);

        for a in map.locations() {
            for b in map.locations() {
                if a.is_adjacent(b) {
                    assert_eq!(
                        movement_cost(&map, a, b),
                        movement_cost(&map, b, a),
                        "asymmetric cost between {a} and {b} with no rivers"
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_maps_always_cost_at_least_one() {
        let mut rng = rand::rng();
        let terrains = [
            TerrainType::Tundra,
            TerrainType::Desert,
            TerrainType::Ocean,
            TerrainType::Plains,
            TerrainType::Jungle,
            TerrainType::Steppe,
            TerrainType::Swamp,
        ];
        let fixtures = [
            Fixture::Forest,
            Fixture::Grove,
            Fixture::Hill,
            Fixture::Oasis,
            Fixture::Shrine,
        ];

        let mut map = GridMap::new(6, 6, TerrainType::Plains);
        for p in map.locations() {
            map.set_terrain(p, Some(*terrains.choose(&mut rng).unwrap()));
            map.set_mountainous(p, rng.random_bool(0.3));
            if rng.random_bool(0.4) {
                map.add_fixture(p, *fixtures.choose(&mut rng).unwrap());
            }
            if rng.random_bool(0.3) {
                map.add_river(p, Direction::East);
                map.add_river(p, Direction::South);
            }
        }

        for a in map.locations() {
            for b in map.locations() {
                if a.is_adjacent(b) {
                    assert!(movement_cost(&map, a, b) >= 1);
                }
            }
        }
    }
}
