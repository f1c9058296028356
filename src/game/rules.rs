//! Fixed game parameters.

/// Board edge length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest board the engine can resolve moves on.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board accepted from configuration.
pub const MAX_BOARD_SIZE: usize = 16;

/// Sizes the front end offers as one-key shortcuts.
pub const OFFERED_BOARD_SIZES: [usize; 4] = [3, 4, 5, 6];

/// Tile value (or score) that ends the game as a win.
pub const DEFAULT_WIN_VALUE: u64 = 2048;

/// Number of tiles placed by a fresh game.
pub const STARTING_TILES: usize = 2;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Returns true for values a tile may legally hold (2, 4, 8, ...).
pub fn is_tile_value(value: u64) -> bool {
    value >= 2 && value.is_power_of_two()
}
