//! Axial hex coordinates for fields, corners and edges.
//!
//! - `HexCoord`: a field (hex tile)
//! - `VertexCoord`: a corner where settlements and cities stand
//! - `EdgeCoord`: an edge between two corners where roads run
//!
//! Tiles are pointy-top. Every corner is either the North or the South tip of
//! exactly one hex, so `(hex, direction)` identifies a corner uniquely.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tip of a hex a corner is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VertexDirection {
    North,
    South,
}

/// Side of a hex, also used as neighbour direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl EdgeDirection {
    /// Clockwise starting from NorthEast
    pub const ALL: [EdgeDirection; 6] = [
        EdgeDirection::NorthEast,
        EdgeDirection::East,
        EdgeDirection::SouthEast,
        EdgeDirection::SouthWest,
        EdgeDirection::West,
        EdgeDirection::NorthWest,
    ];

    /// The side facing this one on the neighbouring hex
    pub const fn opposite(self) -> Self {
        match self {
            EdgeDirection::NorthEast => EdgeDirection::SouthWest,
            EdgeDirection::East => EdgeDirection::West,
            EdgeDirection::SouthEast => EdgeDirection::NorthWest,
            EdgeDirection::SouthWest => EdgeDirection::NorthEast,
            EdgeDirection::West => EdgeDirection::East,
            EdgeDirection::NorthWest => EdgeDirection::SouthEast,
        }
    }
}

/// Axial coordinate of a field.
///
/// `q` grows to the east, `r` to the south-east; `s = -q - r` is implicit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighbouring hexes, clockwise from NorthEast
    pub fn neighbors(&self) -> [HexCoord; 6] {
        EdgeDirection::ALL.map(|dir| self.neighbor(dir))
    }

    pub fn neighbor(&self, direction: EdgeDirection) -> HexCoord {
        match direction {
            EdgeDirection::East => HexCoord::new(self.q + 1, self.r),
            EdgeDirection::NorthEast => HexCoord::new(self.q + 1, self.r - 1),
            EdgeDirection::NorthWest => HexCoord::new(self.q, self.r - 1),
            EdgeDirection::West => HexCoord::new(self.q - 1, self.r),
            EdgeDirection::SouthWest => HexCoord::new(self.q - 1, self.r + 1),
            EdgeDirection::SouthEast => HexCoord::new(self.q, self.r + 1),
        }
    }

    /// Distance in hex steps
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// The six corners of this hex, clockwise from the North tip
    pub fn vertices(&self) -> [VertexCoord; 6] {
        [
            VertexCoord::new(*self, VertexDirection::North),
            VertexCoord::new(self.neighbor(EdgeDirection::NorthEast), VertexDirection::South),
            VertexCoord::new(self.neighbor(EdgeDirection::SouthEast), VertexDirection::North),
            VertexCoord::new(*self, VertexDirection::South),
            VertexCoord::new(self.neighbor(EdgeDirection::SouthWest), VertexDirection::North),
            VertexCoord::new(self.neighbor(EdgeDirection::NorthWest), VertexDirection::South),
        ]
    }

    /// The six edges of this hex in canonical form
    pub fn edges(&self) -> [EdgeCoord; 6] {
        EdgeDirection::ALL.map(|dir| EdgeCoord::new(*self, dir))
    }
}

/// A corner where up to three fields meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexCoord {
    pub hex: HexCoord,
    pub direction: VertexDirection,
}

impl VertexCoord {
    pub const fn new(hex: HexCoord, direction: VertexDirection) -> Self {
        Self { hex, direction }
    }

    /// The three hexes sharing this corner (some may lie off the board)
    pub fn touching_hexes(&self) -> [HexCoord; 3] {
        match self.direction {
            VertexDirection::North => [
                self.hex,
                self.hex.neighbor(EdgeDirection::NorthWest),
                self.hex.neighbor(EdgeDirection::NorthEast),
            ],
            VertexDirection::South => [
                self.hex,
                self.hex.neighbor(EdgeDirection::SouthWest),
                self.hex.neighbor(EdgeDirection::SouthEast),
            ],
        }
    }

    /// Corners one edge away (distance rule)
    pub fn adjacent_vertices(&self) -> [VertexCoord; 3] {
        self.touching_edges().map(|edge| {
            let [a, b] = edge.endpoints();
            if a == *self {
                b
            } else {
                a
            }
        })
    }

    /// The three edges meeting at this corner
    pub fn touching_edges(&self) -> [EdgeCoord; 3] {
        match self.direction {
            VertexDirection::North => [
                EdgeCoord::new(self.hex, EdgeDirection::NorthWest),
                EdgeCoord::new(self.hex, EdgeDirection::NorthEast),
                EdgeCoord::new(self.hex.neighbor(EdgeDirection::NorthWest), EdgeDirection::East),
            ],
            VertexDirection::South => [
                EdgeCoord::new(self.hex, EdgeDirection::SouthWest),
                EdgeCoord::new(self.hex, EdgeDirection::SouthEast),
                EdgeCoord::new(self.hex.neighbor(EdgeDirection::SouthWest), EdgeDirection::East),
            ],
        }
    }

    /// The edge joining this corner to `other`, if they are neighbours
    pub fn edge_to(&self, other: &VertexCoord) -> Option<EdgeCoord> {
        self.touching_edges()
            .into_iter()
            .find(|edge| edge.endpoints().contains(other))
    }
}

/// An edge shared by two hexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeCoord {
    pub hex: HexCoord,
    pub direction: EdgeDirection,
}

impl EdgeCoord {
    /// Create an edge coordinate in canonical form
    pub fn new(hex: HexCoord, direction: EdgeDirection) -> Self {
        Self { hex, direction }.canonical()
    }

    /// Each edge has two descriptions; the one anchored on the smaller
    /// `(q, r)` wins.
    pub fn canonical(self) -> Self {
        let other_hex = self.hex.neighbor(self.direction);
        if (self.hex.q, self.hex.r) <= (other_hex.q, other_hex.r) {
            self
        } else {
            Self {
                hex: other_hex,
                direction: self.direction.opposite(),
            }
        }
    }

    /// The two hexes on either side
    pub fn touching_hexes(&self) -> [HexCoord; 2] {
        [self.hex, self.hex.neighbor(self.direction)]
    }

    /// The two corners at the ends of this edge
    pub fn endpoints(&self) -> [VertexCoord; 2] {
        let hex = self.hex;
        match self.direction {
            EdgeDirection::NorthEast => [
                VertexCoord::new(hex, VertexDirection::North),
                VertexCoord::new(hex.neighbor(EdgeDirection::NorthEast), VertexDirection::South),
            ],
            EdgeDirection::East => [
                VertexCoord::new(hex.neighbor(EdgeDirection::NorthEast), VertexDirection::South),
                VertexCoord::new(hex.neighbor(EdgeDirection::SouthEast), VertexDirection::North),
            ],
            EdgeDirection::SouthEast => [
                VertexCoord::new(hex.neighbor(EdgeDirection::SouthEast), VertexDirection::North),
                VertexCoord::new(hex, VertexDirection::South),
            ],
            EdgeDirection::SouthWest => [
                VertexCoord::new(hex, VertexDirection::South),
                VertexCoord::new(hex.neighbor(EdgeDirection::SouthWest), VertexDirection::North),
            ],
            EdgeDirection::West => [
                VertexCoord::new(hex.neighbor(EdgeDirection::SouthWest), VertexDirection::North),
                VertexCoord::new(hex.neighbor(EdgeDirection::NorthWest), VertexDirection::South),
            ],
            EdgeDirection::NorthWest => [
                VertexCoord::new(hex.neighbor(EdgeDirection::NorthWest), VertexDirection::South),
                VertexCoord::new(hex, VertexDirection::North),
            ],
        }
    }

    /// Edges sharing a corner with this one
    pub fn adjacent_edges(&self) -> Vec<EdgeCoord> {
        let mut adjacent = HashSet::new();
        for vertex in self.endpoints() {
            for edge in vertex.touching_edges() {
                if edge != *self {
                    adjacent.insert(edge);
                }
            }
        }
        let mut adjacent: Vec<EdgeCoord> = adjacent.into_iter().collect();
        adjacent.sort();
        adjacent
    }
}
