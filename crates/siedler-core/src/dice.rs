//! Dice resolution: production on matching fields, or the theft on a 7.

use crate::bank::Bank;
use crate::game::GameError;
use crate::hex::HexCoord;
use crate::player::{Faction, Player};
use crate::resources::Resource;
use crate::topology::Topology;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub const MIN_DICE_VALUE: u8 = 2;
pub const MAX_DICE_VALUE: u8 = 12;
pub const THEFT_VALUE: u8 = 7;

/// Cards each faction gained (payout) or lost (theft) through one throw.
///
/// Every seated faction has an entry, empty when nothing changed hands.
pub type DiceOutcome = BTreeMap<Faction, Vec<Resource>>;

/// Reject totals two six-sided dice cannot show
pub fn check_dice_value(value: u8) -> Result<u8, GameError> {
    if (MIN_DICE_VALUE..=MAX_DICE_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::DiceOutOfRange(value))
    }
}

/// Roll two six-sided dice
pub fn roll_two_dice<R: Rng>(rng: &mut R) -> (u8, u8) {
    (rng.gen_range(1..=6), rng.gen_range(1..=6))
}

fn empty_outcome(players: &[Player]) -> DiceOutcome {
    players
        .iter()
        .map(|player| (player.faction, Vec::new()))
        .collect()
}

/// Pay every building on the fields labelled `value`.
///
/// The thief's field produces nothing. Within a field, players are served in
/// turn order starting with the player at seat `current`, and each payout is
/// taken from the bank as a whole or not at all.
pub fn distribute_payout<T: Topology + ?Sized>(
    value: u8,
    topology: &T,
    thief: HexCoord,
    players: &mut [Player],
    current: usize,
    bank: &mut Bank,
) -> DiceOutcome {
    let mut outcome = empty_outcome(players);
    let seats = players.len().max(1);

    for field in topology.fields_for_dice_value(value) {
        if field == thief {
            debug!(?field, "Thief blocks production");
            continue;
        }
        let Some(resource) = topology.field(&field).and_then(|tile| tile.resource()) else {
            continue;
        };

        let mut claims: Vec<(usize, _)> = topology
            .corners_of_field(&field)
            .into_iter()
            .filter_map(|building| {
                let faction = building.owner()?;
                let structure = building.structure()?;
                let seat = players.iter().position(|p| p.faction == faction)?;
                Some((seat, structure))
            })
            .collect();
        claims.sort_by_key(|(seat, _)| (seat + seats - current % seats) % seats);

        for (seat, structure) in claims {
            let player = &mut players[seat];
            if !bank.remove_payout_for_structure(resource, structure) {
                debug!(
                    faction = %player.faction,
                    %resource,
                    ?structure,
                    "Bank cannot cover payout, skipped"
                );
                continue;
            }
            let amount = structure.payout();
            player.resources.add(resource, amount);
            trace!(faction = %player.faction, %resource, amount, "Payout");
            outcome
                .entry(player.faction)
                .or_default()
                .extend(std::iter::repeat(resource).take(amount as usize));
        }
    }

    outcome
}

/// Everyone holding more than `threshold` cards gives half of them, rounded
/// down and drawn at random card by card, back to the bank.
pub fn confiscate_half<R: Rng>(
    players: &mut [Player],
    bank: &mut Bank,
    threshold: u32,
    rng: &mut R,
) -> DiceOutcome {
    let mut outcome = empty_outcome(players);

    for player in players.iter_mut() {
        let total = player.resources.total();
        if total <= threshold {
            continue;
        }
        let lost = player.resources.take_random_cards(total / 2, rng);
        for card in &lost {
            bank.add(*card, 1);
        }
        debug!(faction = %player.faction, held = total, lost = lost.len(), "Cards confiscated");
        outcome.insert(player.faction, lost);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Tile, VertexBuilding};
    use crate::resources::ResourceHand;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seat(count: usize) -> Vec<Player> {
        Faction::ALL.iter().take(count).map(|f| Player::new(*f)).collect()
    }

    fn ore_field_board() -> Board {
        Board::custom([
            Tile::resource(HexCoord::new(0, 0), Resource::Ore, 4),
            Tile::desert(HexCoord::new(1, 0)),
        ])
    }

    #[test]
    fn test_check_dice_value() {
        assert_eq!(check_dice_value(2), Ok(2));
        assert_eq!(check_dice_value(12), Ok(12));
        assert_eq!(check_dice_value(1), Err(GameError::DiceOutOfRange(1)));
        assert_eq!(check_dice_value(13), Err(GameError::DiceOutOfRange(13)));
    }

    #[test]
    fn test_roll_two_dice_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let (a, b) = roll_two_dice(&mut rng);
            assert!((1..=6).contains(&a) && (1..=6).contains(&b));
        }
    }

    #[test]
    fn test_city_collects_two_cards() {
        let mut board = ore_field_board();
        let field = HexCoord::new(0, 0);
        board.set_corner(field.vertices()[0], VertexBuilding::City(Faction::Blue));

        let mut players = seat(3);
        let mut bank = Bank::default();
        let outcome = distribute_payout(4, &board, HexCoord::new(1, 0), &mut players, 0, &mut bank);

        assert_eq!(outcome[&Faction::Blue], vec![Resource::Ore, Resource::Ore]);
        assert!(outcome[&Faction::Red].is_empty());
        assert!(outcome[&Faction::Green].is_empty());
        assert_eq!(players[1].resource_count(Resource::Ore), 2);
        assert_eq!(bank.count(Resource::Ore), 17);
    }

    #[test]
    fn test_thief_blocks_payout() {
        let mut board = ore_field_board();
        let field = HexCoord::new(0, 0);
        board.set_corner(field.vertices()[0], VertexBuilding::Settlement(Faction::Red));

        let mut players = seat(2);
        let mut bank = Bank::default();
        let outcome = distribute_payout(4, &board, field, &mut players, 0, &mut bank);

        assert!(outcome.values().all(|cards| cards.is_empty()));
        assert_eq!(bank, Bank::default());
    }

    #[test]
    fn test_starved_payout_serves_current_player_first() {
        let mut board = ore_field_board();
        let [north, _, _, south, _, _] = HexCoord::new(0, 0).vertices();
        board.set_corner(north, VertexBuilding::Settlement(Faction::Red));
        board.set_corner(south, VertexBuilding::Settlement(Faction::Blue));

        let thief = HexCoord::new(1, 0);
        for (current, served) in [(0, Faction::Red), (1, Faction::Blue)] {
            let mut players = seat(2);
            let mut bank = Bank::with_stock(ResourceHand::single(Resource::Ore, 1));
            let outcome = distribute_payout(4, &board, thief, &mut players, current, &mut bank);

            for faction in [Faction::Red, Faction::Blue] {
                let expected = if faction == served { vec![Resource::Ore] } else { vec![] };
                assert_eq!(outcome[&faction], expected, "current seat {current}");
            }
            assert_eq!(bank.count(Resource::Ore), 0);
        }
    }

    #[test]
    fn test_city_skipped_when_bank_holds_one_card() {
        let mut board = ore_field_board();
        let [north, _, _, south, _, _] = HexCoord::new(0, 0).vertices();
        board.set_corner(north, VertexBuilding::City(Faction::Red));
        board.set_corner(south, VertexBuilding::Settlement(Faction::Blue));

        let mut players = seat(2);
        let mut bank = Bank::with_stock(ResourceHand::single(Resource::Ore, 1));
        let outcome = distribute_payout(4, &board, HexCoord::new(1, 0), &mut players, 0, &mut bank);

        assert!(outcome[&Faction::Red].is_empty());
        assert_eq!(outcome[&Faction::Blue], vec![Resource::Ore]);
        assert_eq!(players[0].resource_count(Resource::Ore), 0);
    }

    #[test]
    fn test_confiscate_half_above_threshold_only() {
        let mut players = seat(3);
        players[0].resources = ResourceHand::with_amounts(3, 3, 3, 0, 0);
        players[1].resources = ResourceHand::with_amounts(7, 0, 0, 0, 0);
        players[2].resources = ResourceHand::with_amounts(2, 2, 2, 2, 0);
        let mut bank = Bank::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let outcome = confiscate_half(&mut players, &mut bank, 7, &mut rng);

        assert_eq!(outcome[&Faction::Red].len(), 4);
        assert!(outcome[&Faction::Blue].is_empty());
        assert_eq!(outcome[&Faction::Green].len(), 4);
        assert_eq!(players[0].resources.total(), 5);
        assert_eq!(players[1].resources.total(), 7);
        assert_eq!(players[2].resources.total(), 4);
        assert_eq!(bank.stock().total(), 8);
    }
}
