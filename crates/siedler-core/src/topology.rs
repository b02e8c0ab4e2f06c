//! The board queries the rule engine relies on.
//!
//! Rules and dice resolution never look at tiles or hash maps directly; they
//! only ask a [`Topology`] which positions exist, what stands on them and how
//! they connect. [`crate::board::Board`] is the standard implementation.

use crate::board::{EdgeBuilding, TileType, VertexBuilding};
use crate::hex::{EdgeCoord, HexCoord, VertexCoord};

pub trait Topology {
    fn has_field(&self, field: &HexCoord) -> bool;

    fn has_corner(&self, corner: &VertexCoord) -> bool;

    fn has_edge(&self, edge: &EdgeCoord) -> bool;

    /// What the field is made of, `None` off the board
    fn field(&self, field: &HexCoord) -> Option<TileType>;

    /// Dice value that makes the field produce
    fn dice_label(&self, field: &HexCoord) -> Option<u8>;

    fn corner(&self, corner: &VertexCoord) -> VertexBuilding;

    fn set_corner(&mut self, corner: VertexCoord, building: VertexBuilding);

    fn edge(&self, edge: &EdgeCoord) -> EdgeBuilding;

    fn set_edge(&mut self, edge: EdgeCoord, building: EdgeBuilding);

    /// Producing fields labelled with `value`, in board order
    fn fields_for_dice_value(&self, value: u8) -> Vec<HexCoord>;

    /// The edge running from `a` to `b`, if both are neighbours on this board
    fn edge_between(&self, a: &VertexCoord, b: &VertexCoord) -> Option<EdgeCoord> {
        let edge = a.edge_to(b)?;
        self.has_edge(&edge).then_some(edge)
    }

    /// Buildings standing one edge away from `corner`
    fn neighbours_of_corner(&self, corner: &VertexCoord) -> Vec<VertexBuilding> {
        corner
            .adjacent_vertices()
            .iter()
            .filter(|neighbour| self.has_corner(neighbour))
            .map(|neighbour| self.corner(neighbour))
            .filter(|building| !building.is_empty())
            .collect()
    }

    /// Roads meeting at `corner`
    fn adjacent_edges(&self, corner: &VertexCoord) -> Vec<EdgeBuilding> {
        corner
            .touching_edges()
            .iter()
            .filter(|edge| self.has_edge(edge))
            .map(|edge| self.edge(edge))
            .filter(|road| !road.is_empty())
            .collect()
    }

    /// Fields sharing `corner` that lie on the board
    fn fields_at_corner(&self, corner: &VertexCoord) -> Vec<TileType> {
        corner
            .touching_hexes()
            .iter()
            .filter_map(|hex| self.field(hex))
            .collect()
    }

    /// Buildings on the corners of `field`, clockwise from its North tip
    fn corners_of_field(&self, field: &HexCoord) -> Vec<VertexBuilding> {
        if !self.has_field(field) {
            return Vec::new();
        }
        field
            .vertices()
            .iter()
            .map(|corner| self.corner(corner))
            .filter(|building| !building.is_empty())
            .collect()
    }
}
