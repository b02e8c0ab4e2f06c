//! Placement legality.
//!
//! Every check here is a pure predicate over a [`Topology`] (and, for the
//! founding road, the [`BuildingRegistry`]). A position that is not on the
//! board is simply illegal. Callers commit a placement only after the
//! matching predicate has returned `true`.

use crate::board::VertexBuilding;
use crate::hex::VertexCoord;
use crate::player::Faction;
use crate::registry::BuildingRegistry;
use crate::structure::Structure;
use crate::topology::Topology;

/// A free corner on land, with no building on any neighbouring corner
pub fn can_place_initial_settlement<T: Topology + ?Sized>(
    topology: &T,
    corner: &VertexCoord,
) -> bool {
    topology.has_corner(corner)
        && topology.corner(corner).is_empty()
        && topology.neighbours_of_corner(corner).is_empty()
        && !is_corner_only_next_to_water(topology, corner)
}

/// As [`can_place_initial_settlement`], and one of the faction's roads must
/// lead to the corner
pub fn can_place_settlement<T: Topology + ?Sized>(
    topology: &T,
    faction: Faction,
    corner: &VertexCoord,
) -> bool {
    can_place_initial_settlement(topology, corner)
        && topology
            .adjacent_edges(corner)
            .iter()
            .any(|road| road.owner() == Some(faction))
}

/// Only the faction's own settlement can become a city
pub fn can_place_city<T: Topology + ?Sized>(
    topology: &T,
    faction: Faction,
    corner: &VertexCoord,
) -> bool {
    topology.has_corner(corner) && topology.corner(corner) == VertexBuilding::Settlement(faction)
}

/// A free edge between `a` and `b` that joins the faction's network and does
/// not run out into open water
pub fn can_place_road<T: Topology + ?Sized>(
    topology: &T,
    faction: Faction,
    a: &VertexCoord,
    b: &VertexCoord,
) -> bool {
    let Some(edge) = topology.edge_between(a, b) else {
        return false;
    };
    topology.edge(&edge).is_empty()
        && !is_corner_only_next_to_water(topology, a)
        && !is_corner_only_next_to_water(topology, b)
        && (touches_network(topology, faction, a) || touches_network(topology, faction, b))
}

/// Road rule plus: a settlement of the faction without any road yet must be
/// one of the new road's ends
pub fn can_place_initial_road<T: Topology + ?Sized>(
    topology: &T,
    registry: &BuildingRegistry,
    faction: Faction,
    a: &VertexCoord,
    b: &VertexCoord,
) -> bool {
    can_place_road(topology, faction, a, b)
        && registry
            .filter(faction, Structure::Settlement)
            .filter_map(|settlement| settlement.corner())
            .filter(|corner| topology.adjacent_edges(corner).is_empty())
            .all(|corner| corner == *a || corner == *b)
}

/// True when every field around the corner is water
pub fn is_corner_only_next_to_water<T: Topology + ?Sized>(topology: &T, corner: &VertexCoord) -> bool {
    topology
        .fields_at_corner(corner)
        .iter()
        .all(|field| field.is_water())
}

fn touches_network<T: Topology + ?Sized>(topology: &T, faction: Faction, corner: &VertexCoord) -> bool {
    topology.corner(corner).owner() == Some(faction)
        || topology
            .adjacent_edges(corner)
            .iter()
            .any(|road| road.owner() == Some(faction))
}
