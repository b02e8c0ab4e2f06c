//! Resource kinds and the resource ledger shared by players and the bank.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five resource kinds produced by the land
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Lumber,
    Brick,
    Wool,
    Grain,
    Ore,
}

impl Resource {
    /// All resource kinds in ledger order
    pub const ALL: [Resource; 5] = [
        Resource::Lumber,
        Resource::Brick,
        Resource::Wool,
        Resource::Grain,
        Resource::Ore,
    ];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Lumber => "lumber",
            Resource::Brick => "brick",
            Resource::Wool => "wool",
            Resource::Grain => "grain",
            Resource::Ore => "ore",
        };
        f.write_str(name)
    }
}

/// A stock of resource cards, one non-negative count per kind.
///
/// Used for player hands, the bank and structure costs alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceHand {
    pub lumber: u32,
    pub brick: u32,
    pub wool: u32,
    pub grain: u32,
    pub ore: u32,
}

impl ResourceHand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand with specific amounts, in `Resource::ALL` order
    pub const fn with_amounts(lumber: u32, brick: u32, wool: u32, grain: u32, ore: u32) -> Self {
        Self {
            lumber,
            brick,
            wool,
            grain,
            ore,
        }
    }

    /// Same count of every kind
    pub const fn uniform(count: u32) -> Self {
        Self::with_amounts(count, count, count, count, count)
    }

    /// A hand holding `amount` cards of one kind
    pub fn single(resource: Resource, amount: u32) -> Self {
        let mut hand = Self::new();
        hand.add(resource, amount);
        hand
    }

    /// Build a hand from a list of cards
    pub fn from_cards(cards: &[Resource]) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add(*card, 1);
        }
        hand
    }

    /// Total number of cards
    pub fn total(&self) -> u32 {
        self.lumber + self.brick + self.wool + self.grain + self.ore
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Lumber => self.lumber,
            Resource::Brick => self.brick,
            Resource::Wool => self.wool,
            Resource::Grain => self.grain,
            Resource::Ore => self.ore,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Lumber => &mut self.lumber,
            Resource::Brick => &mut self.brick,
            Resource::Wool => &mut self.wool,
            Resource::Grain => &mut self.grain,
            Resource::Ore => &mut self.ore,
        }
    }

    /// Add cards; always succeeds
    pub fn add(&mut self, resource: Resource, amount: u32) {
        *self.slot_mut(resource) += amount;
    }

    /// Remove cards. Returns `false` and leaves the hand untouched when fewer
    /// than `amount` are held.
    pub fn remove(&mut self, resource: Resource, amount: u32) -> bool {
        let slot = self.slot_mut(resource);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Add another hand to this one
    pub fn add_hand(&mut self, other: &ResourceHand) {
        for resource in Resource::ALL {
            self.add(resource, other.get(resource));
        }
    }

    /// Check if this hand covers a cost
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        Resource::ALL
            .iter()
            .all(|&resource| self.get(resource) >= cost.get(resource))
    }

    /// Subtract a cost as a whole, or nothing at all
    pub fn try_subtract(&mut self, cost: &ResourceHand) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for resource in Resource::ALL {
            *self.slot_mut(resource) -= cost.get(resource);
        }
        true
    }

    /// Kinds with at least one card, in `Resource::ALL` order
    pub fn kinds_held(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .filter(|&resource| self.get(resource) > 0)
            .collect()
    }

    /// Every single card as its own entry
    pub fn cards(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .flat_map(|resource| std::iter::repeat(resource).take(self.get(resource) as usize))
            .collect()
    }

    /// Remove one card of a kind picked uniformly among the kinds held,
    /// regardless of how many cards of each kind there are.
    pub fn take_random_kind<R: Rng>(&mut self, rng: &mut R) -> Option<Resource> {
        let resource = *self.kinds_held().choose(rng)?;
        self.remove(resource, 1);
        Some(resource)
    }

    /// Remove `count` cards drawn uniformly from the individual cards.
    pub fn take_random_cards<R: Rng>(&mut self, count: u32, rng: &mut R) -> Vec<Resource> {
        let mut cards = self.cards();
        cards.shuffle(rng);
        cards.truncate(count as usize);
        for card in &cards {
            self.remove(*card, 1);
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_resource_hand_total() {
        let hand = ResourceHand::with_amounts(1, 2, 3, 4, 5);
        assert_eq!(hand.total(), 15);
        assert_eq!(hand.get(Resource::Ore), 5);
    }

    #[test]
    fn test_remove_fails_without_mutation() {
        let mut hand = ResourceHand::with_amounts(3, 0, 0, 0, 0);
        assert!(!hand.remove(Resource::Lumber, 4));
        assert_eq!(hand.lumber, 3);

        assert!(hand.remove(Resource::Lumber, 3));
        assert_eq!(hand.lumber, 0);
        assert!(!hand.remove(Resource::Lumber, 1));
    }

    #[test]
    fn test_resource_hand_can_afford() {
        let hand = ResourceHand::uniform(2);
        assert!(hand.can_afford(&ResourceHand::uniform(1)));
        assert!(!hand.can_afford(&ResourceHand::single(Resource::Brick, 3)));
    }

    #[test]
    fn test_try_subtract_is_all_or_nothing() {
        let mut hand = ResourceHand::with_amounts(1, 1, 0, 0, 0);
        let cost = ResourceHand::with_amounts(1, 1, 1, 0, 0);
        assert!(!hand.try_subtract(&cost));
        assert_eq!(hand, ResourceHand::with_amounts(1, 1, 0, 0, 0));

        assert!(hand.try_subtract(&ResourceHand::with_amounts(1, 1, 0, 0, 0)));
        assert!(hand.is_empty());
    }

    #[test]
    fn test_cards_and_kinds_held() {
        let hand = ResourceHand::with_amounts(2, 0, 1, 0, 0);
        assert_eq!(
            hand.cards(),
            vec![Resource::Lumber, Resource::Lumber, Resource::Wool]
        );
        assert_eq!(hand.kinds_held(), vec![Resource::Lumber, Resource::Wool]);
        assert_eq!(ResourceHand::from_cards(&hand.cards()), hand);
    }

    #[test]
    fn test_take_random_kind_single_kind() {
        let mut hand = ResourceHand::single(Resource::Grain, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        assert_eq!(hand.take_random_kind(&mut rng), Some(Resource::Grain));
        assert!(hand.is_empty());
        assert_eq!(hand.take_random_kind(&mut rng), None);
    }

    #[test]
    fn test_take_random_kind_ignores_card_counts() {
        // One ore against many wool: both kinds must show up over many draws.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut ore_draws = 0;
        for _ in 0..200 {
            let mut hand = ResourceHand::with_amounts(0, 0, 30, 0, 1);
            if hand.take_random_kind(&mut rng) == Some(Resource::Ore) {
                ore_draws += 1;
            }
        }
        assert!(ore_draws > 60, "ore drawn only {ore_draws} times");
    }

    #[test]
    fn test_take_random_cards_removes_exactly_count() {
        let mut hand = ResourceHand::with_amounts(3, 2, 1, 4, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let taken = hand.take_random_cards(5, &mut rng);
        assert_eq!(taken.len(), 5);
        assert_eq!(hand.total(), 5);

        let mut restored = hand;
        restored.add_hand(&ResourceHand::from_cards(&taken));
        assert_eq!(restored, ResourceHand::with_amounts(3, 2, 1, 4, 0));
    }
}
