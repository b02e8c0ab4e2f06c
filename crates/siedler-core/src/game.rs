//! Core game controller.
//!
//! `Game` owns the board, the building registry, the bank and the players,
//! and applies one action at a time for the current player. Every action is
//! checked in full before anything changes, so a rejected action leaves the
//! game exactly as it was.

use crate::actions::{GameAction, GameEvent, Robbery};
use crate::bank::Bank;
use crate::board::{Board, BoardJson, EdgeBuilding, VertexBuilding};
use crate::config::GameConfig;
use crate::dice::{self, DiceOutcome, THEFT_VALUE};
use crate::hex::{EdgeCoord, HexCoord, VertexCoord};
use crate::player::{Faction, Player};
use crate::registry::{BuildingElement, BuildingRegistry};
use crate::resources::{Resource, ResourceHand};
use crate::rules;
use crate::structure::Structure;
use crate::topology::Topology;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Cards handed to the bank for one card in return
pub const BANK_TRADE_RATE: u32 = 4;

/// Errors that stop an operation outright.
///
/// Illegal moves are not errors: they return `false` or
/// [`ThiefPlacement::Rejected`] and leave the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Number of players must be between {min} and {max}, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("At least {min} win points are required, got {points}")]
    InvalidWinPoints { points: u32, min: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dice value {0} cannot be thrown with two dice")]
    DiceOutOfRange(u8),

    #[error("No player plays faction {0}")]
    UnknownFaction(Faction),
}

/// Result of moving the thief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThiefPlacement {
    /// Not a land field, or the thief already stands there
    Rejected,
    /// The thief moved; a card was stolen if anyone could be robbed
    Placed { robbery: Option<Robbery> },
}

/// Two dice rolled by the engine and what they caused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub dice: (u8, u8),
    pub outcome: DiceOutcome,
}

impl DiceRoll {
    pub fn total(&self) -> u8 {
        self.dice.0 + self.dice.1
    }
}

/// Serialisable view of a running game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardJson,
    pub buildings: Vec<BuildingElement>,
    pub players: Vec<Player>,
    pub bank: ResourceHand,
    pub thief: HexCoord,
    pub current: Faction,
    pub win_points: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    registry: BuildingRegistry,
    bank: Bank,
    players: Vec<Player>,
    /// Seat of the player whose turn it is
    current: usize,
    thief: HexCoord,
    rng: ChaCha8Rng,
}

impl Game {
    /// A game on the beginner map for `number_of_players` players
    pub fn new(win_points: u32, number_of_players: usize) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(win_points, number_of_players))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = Self::seeded_rng(&config);
        let board = config.build_board(&mut rng);
        Self::assemble(config, board, rng)
    }

    /// A game on a caller-supplied board; `config.layout` is ignored
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, GameError> {
        config.validate()?;
        let rng = Self::seeded_rng(&config);
        Self::assemble(config, board, rng)
    }

    fn seeded_rng(config: &GameConfig) -> ChaCha8Rng {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn assemble(config: GameConfig, board: Board, rng: ChaCha8Rng) -> Result<Self, GameError> {
        let thief = board
            .initial_thief_field()
            .ok_or_else(|| GameError::InvalidConfig("board has no land field".to_string()))?;
        let players: Vec<Player> = Faction::ALL
            .iter()
            .take(config.number_of_players)
            .map(|faction| Player::new(*faction))
            .collect();

        info!(
            players = players.len(),
            win_points = config.win_points,
            ?thief,
            "Game created"
        );

        Ok(Self {
            bank: Bank::new(config.bank_stock_per_resource),
            config,
            board,
            registry: BuildingRegistry::new(),
            players,
            current: 0,
            thief,
            rng,
        })
    }

    // ==================== Queries ====================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn thief_field(&self) -> HexCoord {
        self.thief
    }

    /// Factions in turn order
    pub fn player_factions(&self) -> Vec<Faction> {
        self.players.iter().map(|player| player.faction).collect()
    }

    pub fn current_faction(&self) -> Faction {
        self.current_player().faction
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_resource_stock(&self, resource: Resource) -> u32 {
        self.current_player().resource_count(resource)
    }

    pub fn player(&self, faction: Faction) -> Result<&Player, GameError> {
        self.seat_of(faction)
            .map(|seat| &self.players[seat])
            .ok_or(GameError::UnknownFaction(faction))
    }

    fn seat_of(&self, faction: Faction) -> Option<usize> {
        self.players.iter().position(|player| player.faction == faction)
    }

    /// Who places during the founding phase: everyone forward, then backward
    pub fn founding_order(&self) -> Vec<Faction> {
        let forward = self.player_factions();
        forward.iter().chain(forward.iter().rev()).copied().collect()
    }

    /// The current player, if they have reached the win threshold
    pub fn winner(&self) -> Option<Faction> {
        let player = self.current_player();
        (player.victory_points() >= self.config.win_points).then_some(player.faction)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_json_friendly(),
            buildings: self.registry.elements().to_vec(),
            players: self.players.clone(),
            bank: *self.bank.stock(),
            thief: self.thief,
            current: self.current_faction(),
            win_points: self.config.win_points,
        }
    }

    // ==================== Turn Order ====================

    pub fn switch_to_next_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(faction = %self.current_faction(), "Turn passed forward");
    }

    pub fn switch_to_previous_player(&mut self) {
        let seats = self.players.len();
        self.current = (self.current + seats - 1) % seats;
        debug!(faction = %self.current_faction(), "Turn passed backward");
    }

    // ==================== Founding Phase ====================

    /// Place a settlement without paying for it.
    ///
    /// With `payout`, the player receives one card for every resource field
    /// around the corner, as far as the bank can cover it.
    pub fn place_initial_settlement(&mut self, corner: VertexCoord, payout: bool) -> bool {
        let faction = self.current_faction();
        if !rules::can_place_initial_settlement(&self.board, &corner) {
            debug!(%faction, ?corner, "Initial settlement rejected");
            return false;
        }
        if !self.players[self.current].consume_structure_unit(Structure::Settlement) {
            debug!(%faction, "No settlements left");
            return false;
        }
        self.put_settlement(corner, faction);

        if payout {
            for field in self.board.fields_at_corner(&corner) {
                let Some(resource) = field.resource() else {
                    continue;
                };
                if self.bank.remove(resource, 1) {
                    self.players[self.current].resources.add(resource, 1);
                }
            }
        }

        info!(%faction, ?corner, payout, "Initial settlement placed");
        true
    }

    /// Place a free road next to the settlement just founded
    pub fn place_initial_road(&mut self, from: VertexCoord, to: VertexCoord) -> bool {
        let faction = self.current_faction();
        let Some(edge) = self.board.edge_between(&from, &to) else {
            debug!(%faction, ?from, ?to, "No edge between corners");
            return false;
        };
        if !rules::can_place_initial_road(&self.board, &self.registry, faction, &from, &to) {
            debug!(%faction, ?edge, "Initial road rejected");
            return false;
        }
        if !self.players[self.current].consume_structure_unit(Structure::Road) {
            debug!(%faction, "No roads left");
            return false;
        }
        self.put_road(edge, faction);
        info!(%faction, ?edge, "Initial road placed");
        true
    }

    // ==================== Building ====================

    pub fn build_road(&mut self, from: VertexCoord, to: VertexCoord) -> bool {
        let faction = self.current_faction();
        let Some(edge) = self.board.edge_between(&from, &to) else {
            debug!(%faction, ?from, ?to, "No edge between corners");
            return false;
        };
        if !rules::can_place_road(&self.board, faction, &from, &to) {
            debug!(%faction, ?edge, "Road rejected");
            return false;
        }
        if !self.charge_current_player(Structure::Road) {
            return false;
        }
        self.put_road(edge, faction);
        info!(%faction, ?edge, "Road built");
        true
    }

    pub fn build_settlement(&mut self, corner: VertexCoord) -> bool {
        let faction = self.current_faction();
        if !rules::can_place_settlement(&self.board, faction, &corner) {
            debug!(%faction, ?corner, "Settlement rejected");
            return false;
        }
        if !self.charge_current_player(Structure::Settlement) {
            return false;
        }
        self.put_settlement(corner, faction);
        info!(%faction, ?corner, "Settlement built");
        true
    }

    /// Upgrade one of the current player's settlements
    pub fn build_city(&mut self, corner: VertexCoord) -> bool {
        let faction = self.current_faction();
        if !rules::can_place_city(&self.board, faction, &corner) {
            debug!(%faction, ?corner, "City rejected");
            return false;
        }
        if !self.charge_current_player(Structure::City) {
            return false;
        }

        self.board.set_corner(corner, VertexBuilding::City(faction));
        self.registry.upgrade_to_city(corner, faction);
        let player = &mut self.players[self.current];
        player.release_structure_unit(Structure::Settlement);
        player.remove_victory_points(Structure::Settlement.victory_points());
        player.add_victory_points(Structure::City.victory_points());

        info!(%faction, ?corner, points = player.victory_points(), "City built");
        true
    }

    /// Take the cost of `structure` from the current player and one unit from
    /// their stock, or nothing if either falls short
    fn charge_current_player(&mut self, structure: Structure) -> bool {
        let player = &mut self.players[self.current];
        if player.remaining(structure) == 0 {
            debug!(faction = %player.faction, ?structure, "None left in stock");
            return false;
        }
        if !player.pay_for_structure(structure) {
            debug!(faction = %player.faction, ?structure, "Cannot afford");
            return false;
        }
        player.consume_structure_unit(structure);
        self.bank.add_resources_for_structure(structure);
        true
    }

    fn put_settlement(&mut self, corner: VertexCoord, faction: Faction) {
        self.board
            .set_corner(corner, VertexBuilding::Settlement(faction));
        self.registry
            .add(BuildingElement::Settlement { corner, faction });
        self.players[self.current].add_victory_points(Structure::Settlement.victory_points());
    }

    fn put_road(&mut self, edge: EdgeCoord, faction: Faction) {
        self.board.set_edge(edge, EdgeBuilding::Road(faction));
        self.registry.add(BuildingElement::Road { edge, faction });
    }

    // ==================== Trading ====================

    /// Hand four `offer` cards to the bank for one `want` card
    pub fn trade_with_bank_four_to_one(&mut self, offer: Resource, want: Resource) -> bool {
        let player = &mut self.players[self.current];
        if player.resource_count(offer) < BANK_TRADE_RATE || self.bank.count(want) == 0 {
            debug!(faction = %player.faction, %offer, %want, "Bank trade rejected");
            return false;
        }

        player.resources.remove(offer, BANK_TRADE_RATE);
        self.bank.add(offer, BANK_TRADE_RATE);
        self.bank.remove(want, 1);
        player.resources.add(want, 1);

        info!(faction = %player.faction, %offer, %want, "Bank trade");
        true
    }

    // ==================== Dice & Thief ====================

    /// Resolve a dice total: production on matching fields, or the theft on a 7
    pub fn throw_dice(&mut self, value: u8) -> Result<DiceOutcome, GameError> {
        let value = dice::check_dice_value(value)?;
        let outcome = if value == THEFT_VALUE {
            dice::confiscate_half(
                &mut self.players,
                &mut self.bank,
                self.config.no_drop_threshold,
                &mut self.rng,
            )
        } else {
            dice::distribute_payout(
                value,
                &self.board,
                self.thief,
                &mut self.players,
                self.current,
                &mut self.bank,
            )
        };
        info!(faction = %self.current_faction(), value, "Dice resolved");
        Ok(outcome)
    }

    /// Roll two dice with the game's own generator and resolve the total
    pub fn roll_dice(&mut self) -> Result<DiceRoll, GameError> {
        let dice = dice::roll_two_dice(&mut self.rng);
        let outcome = self.throw_dice(dice.0 + dice.1)?;
        Ok(DiceRoll { dice, outcome })
    }

    /// Move the thief and let the current player rob someone next to it.
    ///
    /// The victim is drawn among the other players with a building on the
    /// field and at least one card; the stolen kind is drawn among the kinds
    /// the victim holds.
    pub fn place_thief_and_steal_card(&mut self, field: HexCoord) -> ThiefPlacement {
        let faction = self.current_faction();
        let on_land = self.board.field(&field).is_some_and(|tile| !tile.is_water());
        if !on_land || field == self.thief {
            debug!(%faction, ?field, "Thief placement rejected");
            return ThiefPlacement::Rejected;
        }
        self.thief = field;

        let mut candidates: Vec<usize> = self
            .board
            .corners_of_field(&field)
            .iter()
            .filter_map(|building| building.owner())
            .filter(|owner| *owner != faction)
            .filter_map(|owner| self.seat_of(owner))
            .filter(|&seat| self.players[seat].has_resources())
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let robbery = candidates
            .choose(&mut self.rng)
            .copied()
            .and_then(|seat| {
                let victim = &mut self.players[seat];
                let resource = victim.resources.take_random_kind(&mut self.rng)?;
                Some(Robbery {
                    victim: victim.faction,
                    resource,
                })
            });
        if let Some(Robbery { resource, .. }) = robbery {
            self.players[self.current].resources.add(resource, 1);
        }

        info!(%faction, ?field, ?robbery, "Thief placed");
        ThiefPlacement::Placed { robbery }
    }

    // ==================== Action Dispatch ====================

    /// Apply one action for the current player.
    ///
    /// Illegal moves come back as [`GameEvent::Rejected`]; only invalid dice
    /// totals are errors. A successful build that brings the player to the
    /// win threshold adds [`GameEvent::GameWon`].
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        let faction = self.current_faction();
        let rejected = || {
            vec![GameEvent::Rejected {
                faction,
                action: action.clone(),
            }]
        };

        let mut events = match &action {
            GameAction::PlaceInitialSettlement { corner, payout } => {
                if !self.place_initial_settlement(*corner, *payout) {
                    return Ok(rejected());
                }
                vec![GameEvent::SettlementBuilt {
                    faction,
                    corner: *corner,
                }]
            }
            GameAction::PlaceInitialRoad { from, to } | GameAction::BuildRoad { from, to } => {
                let placed = if matches!(action, GameAction::PlaceInitialRoad { .. }) {
                    self.place_initial_road(*from, *to)
                } else {
                    self.build_road(*from, *to)
                };
                match (placed, from.edge_to(to)) {
                    (true, Some(edge)) => vec![GameEvent::RoadBuilt { faction, edge }],
                    _ => return Ok(rejected()),
                }
            }
            GameAction::BuildSettlement(corner) => {
                if !self.build_settlement(*corner) {
                    return Ok(rejected());
                }
                vec![GameEvent::SettlementBuilt {
                    faction,
                    corner: *corner,
                }]
            }
            GameAction::BuildCity(corner) => {
                if !self.build_city(*corner) {
                    return Ok(rejected());
                }
                vec![GameEvent::CityBuilt {
                    faction,
                    corner: *corner,
                }]
            }
            GameAction::TradeWithBank { offer, want } => {
                if !self.trade_with_bank_four_to_one(*offer, *want) {
                    return Ok(rejected());
                }
                vec![GameEvent::BankTradeCompleted {
                    faction,
                    gave: *offer,
                    received: *want,
                }]
            }
            GameAction::ThrowDice(value) => {
                let outcome = self.throw_dice(*value)?;
                vec![GameEvent::DiceResolved {
                    faction,
                    dice: None,
                    total: *value,
                    outcome,
                }]
            }
            GameAction::RollDice => {
                let roll = self.roll_dice()?;
                vec![GameEvent::DiceResolved {
                    faction,
                    dice: Some(roll.dice),
                    total: roll.total(),
                    outcome: roll.outcome,
                }]
            }
            GameAction::PlaceThief(field) => match self.place_thief_and_steal_card(*field) {
                ThiefPlacement::Rejected => return Ok(rejected()),
                ThiefPlacement::Placed { robbery } => vec![GameEvent::ThiefMoved {
                    faction,
                    to: *field,
                    robbery,
                }],
            },
            GameAction::EndTurn => {
                self.switch_to_next_player();
                vec![GameEvent::TurnPassed {
                    from: faction,
                    to: self.current_faction(),
                }]
            }
            GameAction::PreviousPlayer => {
                self.switch_to_previous_player();
                vec![GameEvent::TurnPassed {
                    from: faction,
                    to: self.current_faction(),
                }]
            }
        };

        let built = matches!(
            action,
            GameAction::PlaceInitialSettlement { .. }
                | GameAction::BuildSettlement(_)
                | GameAction::BuildCity(_)
        );
        if built {
            if let Some(winner) = self.winner() {
                info!(faction = %winner, "Game won");
                events.push(GameEvent::GameWon {
                    faction: winner,
                    victory_points: self.current_player().victory_points(),
                });
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::VertexDirection;
    use pretty_assertions::assert_eq;

    fn game(players: usize) -> Game {
        Game::with_config(GameConfig::new(3, players).with_seed(7)).expect("valid config")
    }

    fn corner(q: i32, r: i32, direction: VertexDirection) -> VertexCoord {
        VertexCoord::new(HexCoord::new(q, r), direction)
    }

    #[test]
    fn test_constructor_validation() {
        assert_eq!(
            Game::new(10, 1).unwrap_err(),
            GameError::InvalidPlayerCount {
                count: 1,
                min: 2,
                max: 4
            }
        );
        assert_eq!(
            Game::new(10, 5).unwrap_err(),
            GameError::InvalidPlayerCount {
                count: 5,
                min: 2,
                max: 4
            }
        );
        assert_eq!(
            Game::new(2, 4).unwrap_err(),
            GameError::InvalidWinPoints { points: 2, min: 3 }
        );
        assert!(Game::new(3, 2).is_ok());
    }

    #[test]
    fn test_new_game_state() {
        let game = game(3);
        assert_eq!(
            game.player_factions(),
            vec![Faction::Red, Faction::Blue, Faction::Green]
        );
        assert_eq!(game.current_faction(), Faction::Red);
        assert_eq!(game.thief_field(), HexCoord::new(0, 0));
        assert_eq!(game.bank().count(Resource::Wool), 19);
        assert!(game.registry().is_empty());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_player_rotation_wraps() {
        let mut game = game(3);
        game.switch_to_previous_player();
        assert_eq!(game.current_faction(), Faction::Green);
        game.switch_to_next_player();
        game.switch_to_next_player();
        assert_eq!(game.current_faction(), Faction::Blue);
    }

    #[test]
    fn test_founding_order() {
        assert_eq!(
            game(3).founding_order(),
            vec![
                Faction::Red,
                Faction::Blue,
                Faction::Green,
                Faction::Green,
                Faction::Blue,
                Faction::Red
            ]
        );
    }

    #[test]
    fn test_unknown_faction() {
        let game = game(2);
        assert!(game.player(Faction::Blue).is_ok());
        assert_eq!(
            game.player(Faction::Yellow).unwrap_err(),
            GameError::UnknownFaction(Faction::Yellow)
        );
    }

    #[test]
    fn test_initial_settlement_payout() {
        let mut game = game(2);
        // South tip of the Ore 10 field touches Brick 6 and Grain 12 as well.
        let spot = corner(0, -2, VertexDirection::South);
        assert!(game.place_initial_settlement(spot, true));

        assert_eq!(game.current_player_resource_stock(Resource::Ore), 1);
        assert_eq!(game.current_player_resource_stock(Resource::Brick), 1);
        assert_eq!(game.current_player_resource_stock(Resource::Grain), 1);
        assert_eq!(game.bank().count(Resource::Ore), 18);
        assert_eq!(game.current_player().victory_points(), 1);
        assert_eq!(game.current_player().remaining(Structure::Settlement), 4);
    }

    #[test]
    fn test_initial_settlement_without_payout() {
        let mut game = game(2);
        assert!(game.place_initial_settlement(corner(0, -2, VertexDirection::South), false));
        assert!(!game.current_player().has_resources());
        assert_eq!(game.bank().stock().total(), 5 * 19);
    }

    #[test]
    fn test_winner_is_current_player_only() {
        let mut game = game(2);
        let spots = [
            corner(0, -2, VertexDirection::South),
            corner(2, -2, VertexDirection::South),
            corner(-2, 2, VertexDirection::North),
        ];
        for spot in spots {
            assert!(game.place_initial_settlement(spot, false));
        }
        assert_eq!(game.winner(), Some(Faction::Red));

        game.switch_to_next_player();
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_trade_same_kind_is_allowed() {
        let mut game = game(2);
        game.players[0].resources = ResourceHand::single(Resource::Wool, 4);
        assert!(game.trade_with_bank_four_to_one(Resource::Wool, Resource::Wool));
        assert_eq!(game.current_player_resource_stock(Resource::Wool), 1);
        assert_eq!(game.bank().count(Resource::Wool), 22);
    }

    #[test]
    fn test_trade_needs_bank_stock() {
        let mut game = Game::with_config(GameConfig {
            bank_stock_per_resource: 0,
            ..GameConfig::new(3, 2).with_seed(1)
        })
        .expect("valid config");
        game.players[0].resources = ResourceHand::single(Resource::Lumber, 4);

        assert!(!game.trade_with_bank_four_to_one(Resource::Lumber, Resource::Brick));
        assert_eq!(game.current_player_resource_stock(Resource::Lumber), 4);
        assert_eq!(game.bank().stock().total(), 0);
    }

    #[test]
    fn test_throw_dice_out_of_range() {
        let mut game = game(2);
        assert_eq!(game.throw_dice(1), Err(GameError::DiceOutOfRange(1)));
        assert_eq!(game.throw_dice(13), Err(GameError::DiceOutOfRange(13)));
        assert_eq!(
            game.apply_action(GameAction::ThrowDice(0)),
            Err(GameError::DiceOutOfRange(0))
        );
    }

    #[test]
    fn test_roll_dice_reports_every_faction() {
        let mut game = game(4);
        let roll = game.roll_dice().expect("two dice always land in range");
        assert!((2..=12).contains(&roll.total()));
        assert_eq!(roll.outcome.len(), 4);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = game(2);
        let mut b = game(2);
        for _ in 0..10 {
            assert_eq!(a.roll_dice().map(|r| r.dice), b.roll_dice().map(|r| r.dice));
        }
    }

    #[test]
    fn test_apply_action_rejection_changes_nothing() {
        let mut game = game(2);
        let before = game.snapshot();
        let action = GameAction::BuildCity(corner(0, 0, VertexDirection::North));

        let events = game.apply_action(action.clone()).expect("not an error");
        assert_eq!(
            events,
            vec![GameEvent::Rejected {
                faction: Faction::Red,
                action
            }]
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_apply_action_reports_win() {
        let mut game = game(2);
        let spots = [
            corner(0, -2, VertexDirection::South),
            corner(2, -2, VertexDirection::South),
            corner(-2, 2, VertexDirection::North),
        ];
        let mut last = Vec::new();
        for corner in spots {
            last = game
                .apply_action(GameAction::PlaceInitialSettlement {
                    corner,
                    payout: false,
                })
                .expect("not an error");
        }
        assert_eq!(
            last.last(),
            Some(&GameEvent::GameWon {
                faction: Faction::Red,
                victory_points: 3
            })
        );
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut game = game(2);
        game.place_initial_settlement(corner(0, -2, VertexDirection::South), true);
        let json = serde_json::to_string(&game.snapshot()).expect("snapshot serializes");
        let back: GameSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(back.buildings.len(), 1);
        assert_eq!(back.current, Faction::Red);
    }
}
