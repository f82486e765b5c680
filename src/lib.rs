//! Terrain-aware shortest-path routing for overland exploration maps.
//!
//! The crate computes minimum movement-cost routes between two points on a
//! grid world map. Edge weights are directional: they depend on the
//! destination tile's terrain, elevation, and vegetation, and on whether the
//! step travels with the current of a river recorded at both endpoints.
//!
//! The central type is [`Pathfinder`], which owns a persistent cache of
//! tentative distances keyed by (origin, target). Repeated queries sharing
//! an origin reuse the cached distances, so amortized cost drops sharply for
//! workloads like an exploration driver probing many destinations from the
//! same camp.
//!
//! Maps are consumed through the read-only [`TravelMap`] trait; the bundled
//! [`GridMap`] is a dense implementation for tests and in-memory hosts.
//!
//! ```
//! use wayfarer::prelude::*;
//!
//! let map = GridMap::new(3, 3, TerrainType::Plains);
//! let mut pathfinder = Pathfinder::new(&map);
//!
//! let path = pathfinder
//!     .travel_distance(Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.cost(), 2);
//! ```
use std::cmp::Ordering;
use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::point::Point;

pub mod cost;
pub mod dir;
pub mod error;
pub mod map;
pub mod neighbor;
pub mod path;
pub mod pathfind;
pub mod point;
pub mod terrain;

pub mod prelude {
    pub use crate::cost::{movement_cost, tile_cost};
    pub use crate::dir::{Direction, DirectionSet};
    pub use crate::error::TravelError;
    pub use crate::map::{Dimensions, GridMap, TravelMap};
    pub use crate::neighbor::Neighbors;
    pub use crate::path::Path;
    pub use crate::pathfind::Pathfinder;
    pub use crate::point::Point;
    pub use crate::terrain::{Fixture, TerrainType};
    pub use crate::{MovementCost, UNREACHABLE};
}

pub use crate::map::{GridMap, TravelMap};
pub use crate::path::Path;
pub use crate::pathfind::Pathfinder;

/// Movement cost in movement points.
///
/// Signed so that a corrupted negative value is representable and can be
/// caught by the pathfinder's defensive checks instead of wrapping.
pub type MovementCost = i32;

/// Sentinel tentative distance for "not yet known reachable".
///
/// Kept well below `i32::MAX` so that adding any finite edge weight to it
/// cannot overflow.
pub const UNREACHABLE: MovementCost = i32::MAX / 2;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Priority-queue entry popping the smallest cost first, ties broken by the
/// row-major order of the point so that searches are reproducible.
pub(crate) struct MinCostHolder {
    pub(crate) cost: MovementCost,
    pub(crate) point: Point,
}

impl PartialEq for MinCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.point == other.point
    }
}

impl Eq for MinCostHolder {}

impl PartialOrd for MinCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, and we want the
        // cheapest entry, with the lowest point among equals, popped first.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.point.cmp(&self.point),
            s => s,
        }
    }
}
