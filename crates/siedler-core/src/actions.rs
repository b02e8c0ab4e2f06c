//! Game actions that players can take.
//!
//! This module defines every action the engine accepts through
//! [`crate::game::Game::apply_action`] and the events those actions produce.

use crate::dice::DiceOutcome;
use crate::hex::{EdgeCoord, HexCoord, VertexCoord};
use crate::player::Faction;
use crate::resources::Resource;
use serde::{Deserialize, Serialize};

/// All possible actions, always taken by the current player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    // ==================== Founding Phase ====================
    /// Free settlement; with `payout` the player collects one card per
    /// neighbouring resource field
    PlaceInitialSettlement { corner: VertexCoord, payout: bool },
    /// Free road that must start at the settlement just founded
    PlaceInitialRoad { from: VertexCoord, to: VertexCoord },

    // ==================== Building ====================
    BuildRoad { from: VertexCoord, to: VertexCoord },
    BuildSettlement(VertexCoord),
    /// Upgrade one of the player's settlements
    BuildCity(VertexCoord),

    // ==================== Trading ====================
    /// Four cards of `offer` for one card of `want`
    TradeWithBank { offer: Resource, want: Resource },

    // ==================== Dice & Thief ====================
    /// Resolve a total thrown outside the engine
    ThrowDice(u8),
    /// Let the engine roll two dice
    RollDice,
    PlaceThief(HexCoord),

    // ==================== Turn Management ====================
    EndTurn,
    /// Step back to the previous player (second founding round)
    PreviousPlayer,
}

/// Who lost which card to the thief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robbery {
    pub victim: Faction,
    pub resource: Resource,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SettlementBuilt {
        faction: Faction,
        corner: VertexCoord,
    },

    /// A settlement was upgraded to a city
    CityBuilt {
        faction: Faction,
        corner: VertexCoord,
    },

    RoadBuilt {
        faction: Faction,
        edge: EdgeCoord,
    },

    BankTradeCompleted {
        faction: Faction,
        gave: Resource,
        received: Resource,
    },

    /// Dice were resolved; `dice` is set when the engine rolled them
    DiceResolved {
        faction: Faction,
        dice: Option<(u8, u8)>,
        total: u8,
        outcome: DiceOutcome,
    },

    ThiefMoved {
        faction: Faction,
        to: HexCoord,
        robbery: Option<Robbery>,
    },

    TurnPassed {
        from: Faction,
        to: Faction,
    },

    /// The action broke a rule and changed nothing
    Rejected {
        faction: Faction,
        action: GameAction,
    },

    GameWon {
        faction: Faction,
        victory_points: u32,
    },
}
