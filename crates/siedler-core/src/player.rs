//! Player state: faction, hand, remaining structures and victory points.

use crate::resources::{Resource, ResourceHand};
use crate::structure::Structure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's colour, also marking their buildings on the board.
///
/// The order of `ALL` is the seating (and turn) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Faction {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Faction {
    pub const ALL: [Faction; 4] = [Faction::Red, Faction::Blue, Faction::Green, Faction::Yellow];

    /// Faction for a seat index
    pub fn for_seat(seat: usize) -> Option<Self> {
        Self::ALL.get(seat).copied()
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Faction::Red => "red",
            Faction::Blue => "blue",
            Faction::Green => "green",
            Faction::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// Structures a player has not placed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureStock {
    pub roads: u32,
    pub settlements: u32,
    pub cities: u32,
}

impl StructureStock {
    pub fn get(&self, structure: Structure) -> u32 {
        match structure {
            Structure::Road => self.roads,
            Structure::Settlement => self.settlements,
            Structure::City => self.cities,
        }
    }

    fn slot_mut(&mut self, structure: Structure) -> &mut u32 {
        match structure {
            Structure::Road => &mut self.roads,
            Structure::Settlement => &mut self.settlements,
            Structure::City => &mut self.cities,
        }
    }
}

impl Default for StructureStock {
    fn default() -> Self {
        Self {
            roads: Structure::Road.stock_per_player(),
            settlements: Structure::Settlement.stock_per_player(),
            cities: Structure::City.stock_per_player(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub faction: Faction,
    pub resources: ResourceHand,
    pub stock: StructureStock,
    victory_points: u32,
}

impl Player {
    pub fn new(faction: Faction) -> Self {
        Self {
            faction,
            resources: ResourceHand::new(),
            stock: StructureStock::default(),
            victory_points: 0,
        }
    }

    pub fn resource_count(&self, resource: Resource) -> u32 {
        self.resources.get(resource)
    }

    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    /// Structures of this kind still available to place
    pub fn remaining(&self, structure: Structure) -> u32 {
        self.stock.get(structure)
    }

    /// Take one structure out of the stock; fails when none are left
    pub fn consume_structure_unit(&mut self, structure: Structure) -> bool {
        let slot = self.stock.slot_mut(structure);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Put one structure back, e.g. the settlement replaced by a city
    pub fn release_structure_unit(&mut self, structure: Structure) {
        *self.stock.slot_mut(structure) += 1;
    }

    pub fn has_enough_resources(&self, structure: Structure) -> bool {
        self.resources.can_afford(&structure.cost())
    }

    /// Hand over the cost of a structure, all or nothing
    pub fn pay_for_structure(&mut self, structure: Structure) -> bool {
        self.resources.try_subtract(&structure.cost())
    }

    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    pub fn add_victory_points(&mut self, points: u32) {
        self.victory_points += points;
    }

    pub fn remove_victory_points(&mut self, points: u32) {
        self.victory_points = self.victory_points.saturating_sub(points);
    }
}
