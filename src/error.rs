//! Error types for travel-distance queries.
use thiserror::Error;

use crate::{map::Dimensions, point::Point, MovementCost};

/// Failures of a travel-distance query.
///
/// "No route exists" is deliberately *not* represented here: an unreachable
/// destination is an ordinary result ([`crate::Path::unreachable`]). These
/// variants all indicate misuse or a programming-error-class inconsistency.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TravelError {
    /// Origin or destination lies outside the map. Rejected before the
    /// search starts.
    #[error("{point} is outside the {}x{} map", dimensions.rows, dimensions.columns)]
    InvalidGeometry { point: Point, dimensions: Dimensions },

    /// The cost callback produced a zero or negative edge weight.
    #[error("movement cost from {from} to {to} is not positive ({cost})")]
    NonPositiveCost {
        from: Point,
        to: Point,
        cost: MovementCost,
    },

    /// A tentative distance in the cache went negative.
    #[error("negative tentative distance {distance} cached for {point} (origin {origin})")]
    CacheInconsistency {
        origin: Point,
        point: Point,
        distance: MovementCost,
    },

    /// A cache entry that is structurally guaranteed to exist was missing.
    #[error("no cached tentative distance for {point} (origin {origin})")]
    MissingDistance { origin: Point, point: Point },
}
