//! Siedler - rule engine for a settlement-building hex board game
//!
//! This crate provides the game logic for two to four players:
//! - Resource ledgers for players and the bank
//! - Placement rules for roads, settlements and cities
//! - Dice resolution, including the theft on a 7
//! - The thief and robbery
//! - Turn order and victory detection
//!
//! # Architecture
//!
//! The engine never touches board geometry directly; it asks a
//! [`Topology`] what exists and what stands where. [`Board`] is the
//! standard implementation. Everything is synchronous and single-threaded:
//! one [`Game`] applies one action at a time, and all randomness comes from
//! the game's seedable generator.
//!
//! The engine can be compiled to:
//! - Native Rust for hosting behind any request queue
//! - WebAssembly (feature `wasm`) for browser clients
//!
//! # Modules
//!
//! - [`hex`]: Coordinate system for fields, corners and edges
//! - [`resources`], [`structure`], [`bank`], [`player`]: ledgers and stock
//! - [`topology`], [`board`]: board queries and the standard map
//! - [`registry`]: who built what where
//! - [`rules`]: placement legality
//! - [`dice`]: payouts and theft
//! - [`config`], [`game`], [`actions`]: configuration and the controller

pub mod actions;
pub mod bank;
pub mod board;
pub mod config;
pub mod dice;
pub mod game;
pub mod hex;
pub mod player;
pub mod registry;
pub mod resources;
pub mod rules;
pub mod structure;
pub mod topology;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent, Robbery};
pub use bank::Bank;
pub use board::{Board, BoardJson, EdgeBuilding, Tile, TileType, VertexBuilding};
pub use config::{BoardLayout, GameConfig};
pub use dice::DiceOutcome;
pub use game::{DiceRoll, Game, GameError, GameSnapshot, ThiefPlacement};
pub use hex::{EdgeCoord, EdgeDirection, HexCoord, VertexCoord, VertexDirection};
pub use player::{Faction, Player};
pub use registry::{BuildingElement, BuildingRegistry};
pub use resources::{Resource, ResourceHand};
pub use structure::Structure;
pub use topology::Topology;
