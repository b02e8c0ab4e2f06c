//! Structure kinds with their costs, stock limits and yields.

use crate::resources::{Resource, ResourceHand};
use serde::{Deserialize, Serialize};

/// Something a player can put on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Structure {
    Road,
    Settlement,
    City,
}

impl Structure {
    pub const ALL: [Structure; 3] = [Structure::Road, Structure::Settlement, Structure::City];

    /// Cards paid to the bank when building
    pub fn cost(&self) -> ResourceHand {
        match self {
            Structure::Road => ResourceHand::with_amounts(1, 1, 0, 0, 0),
            Structure::Settlement => ResourceHand::with_amounts(1, 1, 1, 1, 0),
            Structure::City => ResourceHand::with_amounts(0, 0, 0, 2, 3),
        }
    }

    /// The cost as a card list
    pub fn cost_cards(&self) -> Vec<Resource> {
        self.cost().cards()
    }

    /// How many of this structure each player owns at the start
    pub const fn stock_per_player(&self) -> u32 {
        match self {
            Structure::Road => 15,
            Structure::Settlement => 5,
            Structure::City => 4,
        }
    }

    /// Cards received when an adjacent field produces
    pub const fn payout(&self) -> u32 {
        match self {
            Structure::Road => 0,
            Structure::Settlement => 1,
            Structure::City => 2,
        }
    }

    pub const fn victory_points(&self) -> u32 {
        match self {
            Structure::Road => 0,
            Structure::Settlement => 1,
            Structure::City => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_costs() {
        assert_eq!(Structure::Road.cost().total(), 2);
        assert_eq!(Structure::Settlement.cost().total(), 4);
        assert_eq!(Structure::City.cost().total(), 5);
        assert_eq!(
            Structure::Settlement.cost_cards(),
            vec![Resource::Lumber, Resource::Brick, Resource::Wool, Resource::Grain]
        );
        assert_eq!(Structure::City.cost().get(Resource::Ore), 3);
    }

    #[test]
    fn test_city_doubles_settlement() {
        assert_eq!(Structure::City.payout(), 2 * Structure::Settlement.payout());
        assert_eq!(
            Structure::City.victory_points(),
            2 * Structure::Settlement.victory_points()
        );
        assert_eq!(Structure::Road.payout(), 0);
    }
}
