//! Terrain types and tile fixtures that feed into movement costs.
use strum::{Display, EnumIter};

use crate::{MovementCost, UNREACHABLE};

/// The base terrain of a map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainType {
    Tundra,
    Desert,
    Ocean,
    Plains,
    Jungle,
    Steppe,
    Swamp,
}

impl TerrainType {
    /// The base movement-point cost of entering a tile of this terrain,
    /// before mountain, vegetation, and river adjustments.
    ///
    /// Ocean is unconditionally impassable to overland travel.
    pub fn base_cost(self) -> MovementCost {
        match self {
            TerrainType::Ocean => UNREACHABLE,
            TerrainType::Jungle | TerrainType::Swamp => 2,
            TerrainType::Tundra
            | TerrainType::Desert
            | TerrainType::Plains
            | TerrainType::Steppe => 1,
        }
    }
}

/// Something sitting on a tile that can affect movement through it.
///
/// Passability questions are answered through capability queries
/// ([`Fixture::is_vegetation`], [`Fixture::cost_modifier`]) rather than by
/// matching on the concrete kind at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fixture {
    Forest,
    Grove,
    Hill,
    Oasis,
    Shrine,
}

impl Fixture {
    /// Vegetation slows travel through the tile it grows on.
    pub fn is_vegetation(self) -> bool {
        matches!(self, Fixture::Forest | Fixture::Grove)
    }

    /// Extra movement points this fixture adds on top of the terrain cost.
    pub fn cost_modifier(self) -> MovementCost {
        match self {
            Fixture::Hill => 1,
            _ => 0,
        }
    }
}
