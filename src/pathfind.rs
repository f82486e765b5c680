//! The pathfinder: a Dijkstra relaxation loop with a persistent,
//! query-spanning cache of tentative distances.
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    cost::movement_cost,
    dir::Direction,
    error::TravelError,
    map::TravelMap,
    neighbor::Neighbors,
    path::Path,
    point::Point,
    FxIndexMap, MinCostHolder, MovementCost, UNREACHABLE,
};

/// Shortest-route search over a [`TravelMap`].
///
/// A `Pathfinder` owns a cache of tentative distances keyed by
/// (origin, target). Entries live as long as the instance and are refined by
/// every query, so repeated queries sharing an origin get cheaper over time.
/// The cache assumes the map does not change; call
/// [`Pathfinder::clear_cache`] after mutating the map.
///
/// Queries run synchronously and take `&mut self`, so unsynchronized
/// concurrent use of one instance is a compile error; callers wanting
/// parallelism give each worker its own instance or serialize access with a
/// mutex. A `Pathfinder` whose query was abandoned mid-run (for example by a
/// panic in the cost callback) should be discarded: a partially updated
/// cache is not guaranteed internally consistent.
pub struct Pathfinder<M, C = fn(&M, Point, Point) -> MovementCost>
where
    M: TravelMap,
    C: Fn(&M, Point, Point) -> MovementCost,
{
    map: M,
    cost: C,
    cache: FxHashMap<(Point, Point), MovementCost>,
}

impl<M: TravelMap> Pathfinder<M> {
    /// Creates a pathfinder over `map` using the standard
    /// [`movement_cost`] function.
    pub fn new(map: M) -> Self {
        Pathfinder {
            map,
            cost: movement_cost::<M>,
            cache: FxHashMap::default(),
        }
    }
}

impl<M, C> Pathfinder<M, C>
where
    M: TravelMap,
    C: Fn(&M, Point, Point) -> MovementCost,
{
    /// Creates a pathfinder with a custom edge-cost callback.
    ///
    /// The callback receives the map and the (from, to) pair of adjacent
    /// points and returns the cost of that directed step; `UNREACHABLE` or
    /// greater marks the step as impassable. Costs must be strictly
    /// positive: a zero or negative cost aborts the query with
    /// [`TravelError::NonPositiveCost`].
    pub fn with_cost(map: M, cost: C) -> Self {
        Pathfinder {
            map,
            cost,
            cache: FxHashMap::default(),
        }
    }

    /// The map this pathfinder searches.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Number of cached tentative distances across all origins.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops all cached distances. Required after the map changes, since
    /// cached entries are only valid for the map they were computed on.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Computes the cheapest route from `origin` to `destination`.
    ///
    /// # Returns
    /// * `Ok(path)` with the route points (origin first) and total cost. An
    ///   unreachable destination yields [`Path::unreachable`]: sentinel cost
    ///   and no points. That is the normal "no route" outcome, never an
    ///   error.
    /// * `Err` for out-of-bounds endpoints ([`TravelError::InvalidGeometry`])
    ///   and for programming-error-class conditions: a zero or negative edge
    ///   weight from the cost callback ([`TravelError::NonPositiveCost`]) or a
    ///   corrupted cache ([`TravelError::CacheInconsistency`],
    ///   [`TravelError::MissingDistance`]). Defensive failures abort the
    ///   query immediately rather than propagating corrupted state.
    pub fn travel_distance(
        &mut self,
        origin: Point,
        destination: Point,
    ) -> Result<Path, TravelError> {
        let dimensions = self.map.dimensions();
        for point in [origin, destination] {
            if !dimensions.contains(point) {
                log::warn!("travel query endpoint {point} is out of bounds");
                return Err(TravelError::InvalidGeometry { point, dimensions });
            }
        }

        // The unvisited set is rebuilt from the map on every call; only the
        // tentative distances survive between queries.
        let locations = self.map.locations();
        let mut unvisited: FxHashSet<Point> =
            FxHashSet::with_capacity_and_hasher(locations.len(), Default::default());
        for &location in &locations {
            unvisited.insert(location);
            self.cache.entry((origin, location)).or_insert(UNREACHABLE);
        }
        self.cache.insert((origin, origin), 0);

        let mut to_visit = BinaryHeap::with_capacity(locations.len());
        for &location in &locations {
            to_visit.push(MinCostHolder {
                cost: self.cached_distance(origin, location)?,
                point: location,
            });
        }

        let mut predecessors: FxIndexMap<Point, Point> = FxIndexMap::default();

        while let Some(MinCostHolder { cost: heap_cost, point: current }) = to_visit.pop() {
            if !unvisited.contains(&current) {
                continue;
            }

            let known = self.cached_distance(origin, current)?;
            if heap_cost > known {
                // Stale heap entry superseded by a later relaxation.
                continue;
            }

            if known < 0 {
                log::error!("negative tentative distance {known} at {current}");
                return Err(TravelError::CacheInconsistency {
                    origin,
                    point: current,
                    distance: known,
                });
            }

            if known >= UNREACHABLE {
                // The cheapest remaining tile cannot be reached: the search
                // has exhausted everything reachable from the origin.
                return Ok(Path::unreachable());
            }

            if current == destination {
                let path = self.reconstruct(destination, known, &predecessors);
                log::debug!(
                    "travel {origin} -> {destination}: cost {known} over {} tiles",
                    path.len()
                );
                return Ok(path);
            }

            for neighbor in Neighbors::new(current, dimensions) {
                if !unvisited.contains(&neighbor) {
                    continue;
                }
                if self.clips_corner(current, neighbor) {
                    continue;
                }

                // Zero is rejected alongside negatives: equal-cost
                // predecessor recording relies on every step moving strictly
                // away from the origin, and a zero-weight edge lets two
                // equally distant tiles sit on each other's routes.
                let step = (self.cost)(&self.map, current, neighbor);
                if step <= 0 {
                    log::error!("cost callback returned {step} for {current} -> {neighbor}");
                    return Err(TravelError::NonPositiveCost {
                        from: current,
                        to: neighbor,
                        cost: step,
                    });
                }

                let prior = self.cached_distance(origin, neighbor)?;
                let candidate = known.saturating_add(step);
                for distance in [prior, candidate] {
                    if distance < 0 {
                        log::error!("negative tentative distance {distance} at {neighbor}");
                        return Err(TravelError::CacheInconsistency {
                            origin,
                            point: neighbor,
                            distance,
                        });
                    }
                }

                if candidate < prior {
                    predecessors.insert(neighbor, current);
                    self.cache.insert((origin, neighbor), candidate);
                    to_visit.push(MinCostHolder {
                        cost: candidate,
                        point: neighbor,
                    });
                } else if candidate == prior
                    && prior < UNREACHABLE
                    && neighbor != origin
                    && !predecessors.contains_key(&neighbor)
                {
                    // An equally cheap step re-discovered on a warm cache:
                    // record it so reconstruction still works when no strict
                    // improvement happens this query.
                    predecessors.insert(neighbor, current);
                }
            }

            unvisited.remove(&current);
        }

        Ok(Path::unreachable())
    }

    fn cached_distance(&self, origin: Point, point: Point) -> Result<MovementCost, TravelError> {
        self.cache
            .get(&(origin, point))
            .copied()
            .ok_or(TravelError::MissingDistance { origin, point })
    }

    /// A diagonal step may not cut past an impassable corner: if either tile
    /// orthogonally adjacent to both endpoints is impassable, the step is
    /// rejected and the route has to go around.
    fn clips_corner(&self, from: Point, to: Point) -> bool {
        if !Direction::between(from, to).is_diagonal() {
            return false;
        }

        let corners = [
            Point::new(from.row, to.column),
            Point::new(to.row, from.column),
        ];
        corners
            .into_iter()
            .any(|corner| (self.cost)(&self.map, from, corner) >= UNREACHABLE)
    }

    fn reconstruct(
        &self,
        destination: Point,
        cost: MovementCost,
        predecessors: &FxIndexMap<Point, Point>,
    ) -> Path {
        let mut steps = vec![destination];
        let mut current = destination;
        while let Some(&previous) = predecessors.get(&current) {
            steps.push(previous);
            current = previous;
        }
        steps.reverse();
        Path::new(steps, cost)
    }
}
