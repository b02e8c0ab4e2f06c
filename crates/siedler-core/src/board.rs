//! Game board: fields, the buildings standing on corners and the roads on edges.
//!
//! This module contains:
//! - Tile types and the hex grid of fields
//! - Corner and edge occupancy
//! - The fixed beginner layout and a shuffled variant
//! - The [`Topology`] implementation the rule engine queries

use crate::hex::{EdgeCoord, HexCoord, VertexCoord};
use crate::player::Faction;
use crate::resources::Resource;
use crate::structure::Structure;
use crate::topology::Topology;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Type of hex tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Produces a resource when its number is rolled
    Resource(Resource),
    /// Land that never produces; the thief starts here
    Desert,
    /// Surrounds the land; nothing can be built on water alone
    Water,
}

impl TileType {
    pub fn resource(&self) -> Option<Resource> {
        match self {
            TileType::Resource(resource) => Some(*resource),
            _ => None,
        }
    }

    pub fn is_water(&self) -> bool {
        matches!(self, TileType::Water)
    }
}

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoord,
    pub tile_type: TileType,
    /// Dice number that triggers production (2-12, None for desert/water)
    pub dice_number: Option<u8>,
}

impl Tile {
    pub fn resource(coord: HexCoord, resource: Resource, dice_number: u8) -> Self {
        Self {
            coord,
            tile_type: TileType::Resource(resource),
            dice_number: Some(dice_number),
        }
    }

    pub fn desert(coord: HexCoord) -> Self {
        Self {
            coord,
            tile_type: TileType::Desert,
            dice_number: None,
        }
    }

    pub fn water(coord: HexCoord) -> Self {
        Self {
            coord,
            tile_type: TileType::Water,
            dice_number: None,
        }
    }

    pub fn is_land(&self) -> bool {
        !self.tile_type.is_water()
    }
}

/// What's built on a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VertexBuilding {
    #[default]
    Empty,
    Settlement(Faction),
    City(Faction),
}

impl VertexBuilding {
    pub fn owner(&self) -> Option<Faction> {
        match self {
            VertexBuilding::Empty => None,
            VertexBuilding::Settlement(faction) | VertexBuilding::City(faction) => Some(*faction),
        }
    }

    pub fn structure(&self) -> Option<Structure> {
        match self {
            VertexBuilding::Empty => None,
            VertexBuilding::Settlement(_) => Some(Structure::Settlement),
            VertexBuilding::City(_) => Some(Structure::City),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == VertexBuilding::Empty
    }
}

/// What's built on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgeBuilding {
    #[default]
    Empty,
    Road(Faction),
}

impl EdgeBuilding {
    pub fn owner(&self) -> Option<Faction> {
        match self {
            EdgeBuilding::Empty => None,
            EdgeBuilding::Road(faction) => Some(*faction),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EdgeBuilding::Empty
    }
}

/// Land fields of the beginner map, row by row from the north.
const STANDARD_LAYOUT: [(i32, i32, TileType, Option<u8>); 19] = [
    (0, -2, TileType::Resource(Resource::Ore), Some(10)),
    (1, -2, TileType::Resource(Resource::Wool), Some(2)),
    (2, -2, TileType::Resource(Resource::Lumber), Some(9)),
    (-1, -1, TileType::Resource(Resource::Grain), Some(12)),
    (0, -1, TileType::Resource(Resource::Brick), Some(6)),
    (1, -1, TileType::Resource(Resource::Wool), Some(4)),
    (2, -1, TileType::Resource(Resource::Brick), Some(10)),
    (-2, 0, TileType::Resource(Resource::Grain), Some(9)),
    (-1, 0, TileType::Resource(Resource::Lumber), Some(11)),
    (0, 0, TileType::Desert, None),
    (1, 0, TileType::Resource(Resource::Lumber), Some(3)),
    (2, 0, TileType::Resource(Resource::Ore), Some(8)),
    (-2, 1, TileType::Resource(Resource::Lumber), Some(8)),
    (-1, 1, TileType::Resource(Resource::Ore), Some(3)),
    (0, 1, TileType::Resource(Resource::Grain), Some(4)),
    (1, 1, TileType::Resource(Resource::Wool), Some(5)),
    (-2, 2, TileType::Resource(Resource::Brick), Some(5)),
    (-1, 2, TileType::Resource(Resource::Grain), Some(6)),
    (0, 2, TileType::Resource(Resource::Wool), Some(11)),
];

/// The complete game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: HashMap<HexCoord, Tile>,
    vertices: HashMap<VertexCoord, VertexBuilding>,
    edges: HashMap<EdgeCoord, EdgeBuilding>,
}

impl Board {
    /// The beginner map: fixed fields and numbers, desert in the centre
    pub fn standard() -> Self {
        Self::custom(STANDARD_LAYOUT.iter().map(|&(q, r, tile_type, dice_number)| Tile {
            coord: HexCoord::new(q, r),
            tile_type,
            dice_number,
        }))
    }

    /// The beginner map's fields and numbers dealt out at random.
    ///
    /// Number placement is reshuffled until no 6 borders an 8 (or gives up
    /// after a bounded number of tries).
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let coords: Vec<HexCoord> = STANDARD_LAYOUT
            .iter()
            .map(|&(q, r, _, _)| HexCoord::new(q, r))
            .collect();

        let mut tile_types: Vec<TileType> = STANDARD_LAYOUT.iter().map(|entry| entry.2).collect();
        tile_types.shuffle(rng);

        let numbers: Vec<u8> = STANDARD_LAYOUT.iter().filter_map(|entry| entry.3).collect();
        let producing: Vec<HexCoord> = coords
            .iter()
            .zip(&tile_types)
            .filter(|(_, tile_type)| tile_type.resource().is_some())
            .map(|(coord, _)| *coord)
            .collect();

        let assignment = assign_numbers_avoiding_adjacent_68(&producing, &numbers, rng);
        let labels: HashMap<HexCoord, u8> = producing.into_iter().zip(assignment).collect();

        Self::custom(coords.into_iter().zip(tile_types).map(|(coord, tile_type)| Tile {
            coord,
            tile_type,
            dice_number: labels.get(&coord).copied(),
        }))
    }

    /// Board made of the given fields, enclosed in a ring of water
    pub fn custom(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut board = Self {
            tiles: tiles.into_iter().map(|tile| (tile.coord, tile)).collect(),
            vertices: HashMap::new(),
            edges: HashMap::new(),
        };
        for coord in board.water_ring() {
            board.tiles.insert(coord, Tile::water(coord));
        }
        board
    }

    /// Coordinates just outside the current fields
    fn water_ring(&self) -> Vec<HexCoord> {
        let mut water = HashSet::new();
        for coord in self.tiles.keys() {
            for neighbor in coord.neighbors() {
                if !self.tiles.contains_key(&neighbor) {
                    water.insert(neighbor);
                }
            }
        }
        water.into_iter().collect()
    }

    // ==================== Query Methods ====================

    pub fn tile(&self, coord: &HexCoord) -> Option<&Tile> {
        self.tiles.get(coord)
    }

    /// All non-water tiles
    pub fn land_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values().filter(|tile| tile.is_land())
    }

    /// Where the thief stands when a game begins: the desert, or the first
    /// land field if the board has no desert
    pub fn initial_thief_field(&self) -> Option<HexCoord> {
        let mut land: Vec<&Tile> = self.land_tiles().collect();
        land.sort_by_key(|tile| (tile.coord.r, tile.coord.q));
        land.iter()
            .find(|tile| tile.tile_type == TileType::Desert)
            .or_else(|| land.first())
            .map(|tile| tile.coord)
    }

    /// Occupied corners in a stable order
    pub fn buildings(&self) -> Vec<(VertexCoord, VertexBuilding)> {
        let mut buildings: Vec<_> = self
            .vertices
            .iter()
            .filter(|(_, building)| !building.is_empty())
            .map(|(coord, building)| (*coord, *building))
            .collect();
        buildings.sort_by_key(|(coord, _)| *coord);
        buildings
    }

    /// Occupied edges in a stable order
    pub fn roads(&self) -> Vec<(EdgeCoord, EdgeBuilding)> {
        let mut roads: Vec<_> = self
            .edges
            .iter()
            .filter(|(_, road)| !road.is_empty())
            .map(|(coord, road)| (*coord, *road))
            .collect();
        roads.sort_by_key(|(coord, _)| *coord);
        roads
    }

    /// Convert to a JSON-friendly representation with arrays instead of HashMaps
    pub fn to_json_friendly(&self) -> BoardJson {
        let mut tiles: Vec<TileJson> = self
            .tiles
            .values()
            .map(|tile| TileJson {
                q: tile.coord.q,
                r: tile.coord.r,
                tile_type: tile.tile_type,
                dice_number: tile.dice_number,
            })
            .collect();
        tiles.sort_by_key(|tile| (tile.r, tile.q));

        BoardJson {
            tiles,
            vertices: self
                .buildings()
                .into_iter()
                .map(|(coord, building)| VertexJson {
                    hex_q: coord.hex.q,
                    hex_r: coord.hex.r,
                    direction: coord.direction,
                    building,
                })
                .collect(),
            edges: self
                .roads()
                .into_iter()
                .map(|(coord, building)| EdgeJson {
                    hex_q: coord.hex.q,
                    hex_r: coord.hex.r,
                    direction: coord.direction,
                    building,
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Topology for Board {
    fn has_field(&self, field: &HexCoord) -> bool {
        self.tiles.contains_key(field)
    }

    fn has_corner(&self, corner: &VertexCoord) -> bool {
        corner.touching_hexes().iter().any(|hex| self.has_field(hex))
    }

    fn has_edge(&self, edge: &EdgeCoord) -> bool {
        edge.touching_hexes().iter().any(|hex| self.has_field(hex))
    }

    fn field(&self, field: &HexCoord) -> Option<TileType> {
        self.tiles.get(field).map(|tile| tile.tile_type)
    }

    fn dice_label(&self, field: &HexCoord) -> Option<u8> {
        self.tiles.get(field).and_then(|tile| tile.dice_number)
    }

    fn corner(&self, corner: &VertexCoord) -> VertexBuilding {
        self.vertices.get(corner).copied().unwrap_or_default()
    }

    fn set_corner(&mut self, corner: VertexCoord, building: VertexBuilding) {
        self.vertices.insert(corner, building);
    }

    fn edge(&self, edge: &EdgeCoord) -> EdgeBuilding {
        self.edges.get(edge).copied().unwrap_or_default()
    }

    fn set_edge(&mut self, edge: EdgeCoord, building: EdgeBuilding) {
        self.edges.insert(edge, building);
    }

    fn fields_for_dice_value(&self, value: u8) -> Vec<HexCoord> {
        let mut fields: Vec<HexCoord> = self
            .tiles
            .values()
            .filter(|tile| tile.dice_number == Some(value) && tile.tile_type.resource().is_some())
            .map(|tile| tile.coord)
            .collect();
        fields.sort_by_key(|coord| (coord.r, coord.q));
        fields
    }
}

/// Assign dice numbers to fields while trying to avoid 6 and 8 being adjacent
fn assign_numbers_avoiding_adjacent_68<R: Rng>(
    fields: &[HexCoord],
    numbers: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    const MAX_ATTEMPTS: usize = 100;

    let mut shuffled_numbers = numbers.to_vec();
    for _ in 0..MAX_ATTEMPTS {
        shuffled_numbers.shuffle(rng);
        if is_valid_number_placement(fields, &shuffled_numbers) {
            break;
        }
    }
    shuffled_numbers
}

fn is_valid_number_placement(fields: &[HexCoord], numbers: &[u8]) -> bool {
    let hot: HashSet<HexCoord> = fields
        .iter()
        .zip(numbers)
        .filter(|&(_, &number)| number == 6 || number == 8)
        .map(|(coord, _)| *coord)
        .collect();

    hot.iter()
        .all(|coord| coord.neighbors().iter().all(|neighbor| !hot.contains(neighbor)))
}

/// JSON-friendly board representation with arrays instead of HashMaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardJson {
    pub tiles: Vec<TileJson>,
    pub vertices: Vec<VertexJson>,
    pub edges: Vec<EdgeJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileJson {
    pub q: i32,
    pub r: i32,
    pub tile_type: TileType,
    pub dice_number: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexJson {
    pub hex_q: i32,
    pub hex_r: i32,
    pub direction: crate::hex::VertexDirection,
    pub building: VertexBuilding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeJson {
    pub hex_q: i32,
    pub hex_r: i32,
    pub direction: crate::hex::EdgeDirection,
    pub building: EdgeBuilding,
}
