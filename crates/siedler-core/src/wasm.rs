//! WebAssembly bindings for the rule engine.
//!
//! This module exposes [`Game`] to JavaScript through wasm-bindgen. Actions,
//! events and state cross the boundary as JSON.

use wasm_bindgen::prelude::*;

use crate::actions::GameAction;
use crate::config::GameConfig;
use crate::game::Game;
use crate::player::Faction;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game from a JSON configuration (`"{}"` for all defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmGame, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(to_js_error)?;
        let game = Game::with_config(config).map_err(to_js_error)?;
        Ok(WasmGame { game })
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.snapshot()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = getCurrentFaction)]
    pub fn get_current_faction(&self) -> String {
        self.game.current_faction().to_string()
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;
        let events = self.game.apply_action(action).map_err(to_js_error)?;
        serde_json::to_string(&events).map_err(to_js_error)
    }

    /// Faction of the winner, if the current player has won
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.game.winner().map(|faction| faction.to_string())
    }

    /// Victory points of the player at `seat`
    #[wasm_bindgen(js_name = getVictoryPoints)]
    pub fn get_victory_points(&self, seat: usize) -> Result<u32, JsValue> {
        let faction = Faction::for_seat(seat)
            .ok_or_else(|| JsValue::from_str(&format!("No seat {}", seat)))?;
        let player = self.game.player(faction).map_err(to_js_error)?;
        Ok(player.victory_points())
    }

    /// Get board state as JSON (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.board().to_json_friendly()).map_err(to_js_error)
    }
}
