//! The bank: the finite supply every payout is drawn from.

use crate::resources::{Resource, ResourceHand};
use crate::structure::Structure;
use serde::{Deserialize, Serialize};

/// Cards of each kind the bank holds at the start of a standard game
pub const STANDARD_BANK_STOCK: u32 = 19;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    stock: ResourceHand,
}

impl Bank {
    /// A bank holding `per_resource` cards of every kind
    pub fn new(per_resource: u32) -> Self {
        Self::with_stock(ResourceHand::uniform(per_resource))
    }

    pub fn with_stock(stock: ResourceHand) -> Self {
        Self { stock }
    }

    pub fn stock(&self) -> &ResourceHand {
        &self.stock
    }

    pub fn count(&self, resource: Resource) -> u32 {
        self.stock.get(resource)
    }

    pub fn add(&mut self, resource: Resource, amount: u32) {
        self.stock.add(resource, amount);
    }

    pub fn remove(&mut self, resource: Resource, amount: u32) -> bool {
        self.stock.remove(resource, amount)
    }

    /// Credit the bank with the full cost of a structure a player just paid for
    pub fn add_resources_for_structure(&mut self, structure: Structure) {
        self.stock.add_hand(&structure.cost());
    }

    /// Take the cards one building earns from a producing field.
    ///
    /// Returns `false` with the stock untouched when the bank cannot cover
    /// the full amount.
    pub fn remove_payout_for_structure(&mut self, resource: Resource, structure: Structure) -> bool {
        self.stock.remove(resource, structure.payout())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(STANDARD_BANK_STOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bank_stock() {
        let bank = Bank::default();
        for resource in Resource::ALL {
            assert_eq!(bank.count(resource), STANDARD_BANK_STOCK);
        }
    }

    #[test]
    fn test_add_resources_for_structure() {
        let mut bank = Bank::new(0);
        bank.add_resources_for_structure(Structure::City);
        assert_eq!(bank.count(Resource::Ore), 3);
        assert_eq!(bank.count(Resource::Grain), 2);
        assert_eq!(bank.stock().total(), 5);
    }

    #[test]
    fn test_city_payout_needs_two_cards() {
        let mut bank = Bank::with_stock(ResourceHand::single(Resource::Ore, 1));

        assert!(!bank.remove_payout_for_structure(Resource::Ore, Structure::City));
        assert_eq!(bank.count(Resource::Ore), 1);

        assert!(bank.remove_payout_for_structure(Resource::Ore, Structure::Settlement));
        assert_eq!(bank.count(Resource::Ore), 0);
        assert!(!bank.remove_payout_for_structure(Resource::Ore, Structure::Settlement));
    }
}
