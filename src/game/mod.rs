//! Sliding-tile merge rules.
//!
//! The model (`board`, `tile`, `tiles`, `state`) is plain data. `engine`
//! holds the transitions: each one maps a state to a new state and never
//! touches its input.
//!
//! A front end is expected to drive a two-phase cycle:
//!
//! ```text
//! move ──→ has_changed? ──yes──→ (animation done) ──→ clean_up ──→ spawn
//!               │                                                    │
//!               no                                                   │
//!               └──────────────→ evaluate_terminal ←─────────────────┘
//! ```

mod board;
mod direction;
pub mod engine;
pub mod rules;
mod spawn;
mod state;
mod tile;
mod tiles;

pub use board::Board;
pub use direction::Direction;
pub use engine::{Merge, MoveOutcome};
pub use spawn::{RandomTiles, ScriptedTiles, SpawnRoll, TileSource};
pub use state::{GameState, GameStatus, StateError};
pub use tile::{Position, Tile, TileId};
pub use tiles::Tiles;
