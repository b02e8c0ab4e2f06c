//! Game configuration.
//!
//! Every field has a default, so a JSON document only needs the values it
//! changes:
//!
//! ```json
//! { "win_points": 5, "number_of_players": 3, "seed": 42 }
//! ```

use crate::bank::STANDARD_BANK_STOCK;
use crate::board::Board;
use crate::game::GameError;
use crate::player::Faction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fewest victory points a game may be played to
pub const MIN_WIN_POINTS: u32 = 3;

pub const MIN_PLAYERS: usize = 2;

pub const DEFAULT_WIN_POINTS: u32 = 10;

/// Hands larger than this lose half their cards on a 7
pub const DEFAULT_NO_DROP_THRESHOLD: u32 = 7;

/// Which map to play on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardLayout {
    /// The fixed beginner map
    #[default]
    Standard,
    /// Beginner fields and numbers dealt at random
    Shuffled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub win_points: u32,
    pub number_of_players: usize,
    pub no_drop_threshold: u32,
    pub bank_stock_per_resource: u32,
    pub layout: BoardLayout,
    /// Seed for dice, theft and board shuffling; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_points: DEFAULT_WIN_POINTS,
            number_of_players: Faction::ALL.len(),
            no_drop_threshold: DEFAULT_NO_DROP_THRESHOLD,
            bank_stock_per_resource: STANDARD_BANK_STOCK,
            layout: BoardLayout::Standard,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(win_points: u32, number_of_players: usize) -> Self {
        Self {
            win_points,
            number_of_players,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Reject player counts and win thresholds the game cannot be played with
    pub fn validate(&self) -> Result<(), GameError> {
        let max = Faction::ALL.len();
        if !(MIN_PLAYERS..=max).contains(&self.number_of_players) {
            return Err(GameError::InvalidPlayerCount {
                count: self.number_of_players,
                min: MIN_PLAYERS,
                max,
            });
        }
        if self.win_points < MIN_WIN_POINTS {
            return Err(GameError::InvalidWinPoints {
                points: self.win_points,
                min: MIN_WIN_POINTS,
            });
        }
        Ok(())
    }

    pub fn build_board<R: Rng>(&self, rng: &mut R) -> Board {
        match self.layout {
            BoardLayout::Standard => Board::standard(),
            BoardLayout::Shuffled => Board::shuffled(rng),
        }
    }
}
