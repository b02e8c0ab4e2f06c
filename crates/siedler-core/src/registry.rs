//! Record of every structure placed so far and who owns it.

use crate::hex::{EdgeCoord, VertexCoord};
use crate::player::Faction;
use crate::structure::Structure;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One placed structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BuildingElement {
    Road { edge: EdgeCoord, faction: Faction },
    Settlement { corner: VertexCoord, faction: Faction },
    City { corner: VertexCoord, faction: Faction },
}

impl BuildingElement {
    pub fn structure(&self) -> Structure {
        match self {
            BuildingElement::Road { .. } => Structure::Road,
            BuildingElement::Settlement { .. } => Structure::Settlement,
            BuildingElement::City { .. } => Structure::City,
        }
    }

    pub fn faction(&self) -> Faction {
        match self {
            BuildingElement::Road { faction, .. }
            | BuildingElement::Settlement { faction, .. }
            | BuildingElement::City { faction, .. } => *faction,
        }
    }

    /// Corner the element stands on; `None` for roads
    pub fn corner(&self) -> Option<VertexCoord> {
        match self {
            BuildingElement::Road { .. } => None,
            BuildingElement::Settlement { corner, .. } | BuildingElement::City { corner, .. } => {
                Some(*corner)
            }
        }
    }

    /// Edge the element runs along; `None` for settlements and cities
    pub fn edge(&self) -> Option<EdgeCoord> {
        match self {
            BuildingElement::Road { edge, .. } => Some(*edge),
            _ => None,
        }
    }
}

/// Placed structures in placement order, indexed by position.
#[derive(Debug, Clone, Default)]
pub struct BuildingRegistry {
    elements: Vec<BuildingElement>,
    by_corner: HashMap<VertexCoord, usize>,
    by_edge: HashMap<EdgeCoord, usize>,
}

impl BuildingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[BuildingElement] {
        &self.elements
    }

    /// Record a new element. Fails if its position is already taken.
    pub fn add(&mut self, element: BuildingElement) -> bool {
        let index = self.elements.len();
        match (element.corner(), element.edge()) {
            (Some(corner), _) => {
                if self.by_corner.contains_key(&corner) {
                    return false;
                }
                self.by_corner.insert(corner, index);
            }
            (None, Some(edge)) => {
                if self.by_edge.contains_key(&edge) {
                    return false;
                }
                self.by_edge.insert(edge, index);
            }
            (None, None) => return false,
        }
        self.elements.push(element);
        true
    }

    /// Remove whatever stands on `corner`
    pub fn remove_at_corner(&mut self, corner: &VertexCoord) -> Option<BuildingElement> {
        let index = self.by_corner.remove(corner)?;
        Some(self.remove_index(index))
    }

    fn remove_index(&mut self, index: usize) -> BuildingElement {
        let removed = self.elements.swap_remove(index);
        // The former last element now lives at `index`.
        if let Some(moved) = self.elements.get(index).copied() {
            if let Some(corner) = moved.corner() {
                self.by_corner.insert(corner, index);
            }
            if let Some(edge) = moved.edge() {
                self.by_edge.insert(edge, index);
            }
        }
        removed
    }

    /// Replace the faction's settlement on `corner` by a city.
    ///
    /// Fails without change if no settlement of that faction stands there.
    pub fn upgrade_to_city(&mut self, corner: VertexCoord, faction: Faction) -> bool {
        let settlement = BuildingElement::Settlement { corner, faction };
        if self.at_corner(&corner) != Some(&settlement) {
            return false;
        }
        self.remove_at_corner(&corner);
        self.add(BuildingElement::City { corner, faction })
    }

    pub fn at_corner(&self, corner: &VertexCoord) -> Option<&BuildingElement> {
        self.by_corner
            .get(corner)
            .and_then(|&index| self.elements.get(index))
    }

    pub fn at_edge(&self, edge: &EdgeCoord) -> Option<&BuildingElement> {
        self.by_edge
            .get(edge)
            .and_then(|&index| self.elements.get(index))
    }

    /// Elements of one faction and structure kind
    pub fn filter(
        &self,
        faction: Faction,
        structure: Structure,
    ) -> impl Iterator<Item = &BuildingElement> + '_ {
        self.elements
            .iter()
            .filter(move |element| element.faction() == faction && element.structure() == structure)
    }

    pub fn count(&self, faction: Faction, structure: Structure) -> usize {
        self.filter(faction, structure).count()
    }
}
