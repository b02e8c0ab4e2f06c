//! Shared setup for the integration tests.

#![allow(dead_code)]

use siedler_core::rules;
use siedler_core::*;

pub fn corner(q: i32, r: i32, direction: VertexDirection) -> VertexCoord {
    VertexCoord::new(HexCoord::new(q, r), direction)
}

/// Red's first settlement: Ore 10, Grain 12, Brick 6
pub fn red_first() -> VertexCoord {
    corner(0, -2, VertexDirection::South)
}

/// Red's second settlement: Lumber 3, Wool 4, Brick 10
pub fn red_second() -> VertexCoord {
    corner(1, 0, VertexDirection::North)
}

/// Where Red's second founding road leads
pub fn red_road_end() -> VertexCoord {
    corner(2, -1, VertexDirection::South)
}

/// Blue's first settlement: Brick 5, Lumber 8, Ore 3
pub fn blue_first() -> VertexCoord {
    corner(-2, 2, VertexDirection::North)
}

/// Blue's second settlement: Grain 4, Grain 6, Wool 11
pub fn blue_second() -> VertexCoord {
    corner(0, 1, VertexDirection::South)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn two_player_game() -> Game {
    init_tracing();
    Game::with_config(GameConfig::new(10, 2).with_seed(2024)).expect("valid config")
}

/// First corner next to `settlement` where the current player may found a road
pub fn founding_road_end(game: &Game, settlement: VertexCoord) -> VertexCoord {
    let faction = game.current_faction();
    settlement
        .adjacent_vertices()
        .into_iter()
        .find(|end| {
            rules::can_place_initial_road(game.board(), game.registry(), faction, &settlement, end)
        })
        .expect("settlement has a legal founding road")
}

fn found(game: &mut Game, settlement: VertexCoord, road_end: Option<VertexCoord>) {
    assert!(game.place_initial_settlement(settlement, false));
    let end = road_end.unwrap_or_else(|| founding_road_end(game, settlement));
    assert!(game.place_initial_road(settlement, end));
}

/// Two-player game after the founding rounds (Red, Blue, Blue, Red).
/// Red is to move and nobody holds a card.
pub fn founded_game() -> Game {
    let mut game = two_player_game();
    found(&mut game, red_first(), None);
    game.switch_to_next_player();
    found(&mut game, blue_first(), None);
    found(&mut game, blue_second(), None);
    game.switch_to_previous_player();
    found(&mut game, red_second(), Some(red_road_end()));
    assert_eq!(game.current_faction(), Faction::Red);
    game
}

/// Throw the same total several times
pub fn throw(game: &mut Game, value: u8, times: usize) {
    for _ in 0..times {
        game.throw_dice(value).expect("valid dice value");
    }
}

/// Cards of one kind held by the bank and every player together
pub fn cards_in_circulation(game: &Game, resource: Resource) -> u32 {
    game.bank().count(resource)
        + game
            .players()
            .iter()
            .map(|player| player.resource_count(resource))
            .sum::<u32>()
}
