//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use std::time::{Duration, Instant};

use tile2048::game::{GameState, Position};
use tile2048::ui::app::GameSettings;

/// Square board of `size` whose first row is `row` (0 = empty).
pub fn single_row(size: usize, row: &[u64]) -> GameState {
    let mut rows = vec![vec![0; size]; size];
    rows[0][..row.len()].copy_from_slice(row);
    GameState::from_grid(&rows)
}

/// First row of a state as values.
pub fn first_row(state: &GameState) -> Vec<u64> {
    (0..state.board_size())
        .map(|x| state.value_at(Position::new(x, 0)))
        .collect()
}

/// Sum of values actually on the board.
pub fn board_sum(state: &GameState) -> u64 {
    state.live_tiles().map(|tile| tile.value).sum()
}

pub fn settings(board_size: usize) -> GameSettings {
    GameSettings {
        board_size,
        win_value: 2048,
        animation: Duration::from_millis(100),
    }
}

/// A point comfortably past any throttle window or animation.
pub fn later(start: Instant, steps: u32) -> Instant {
    start + Duration::from_millis(200) * steps
}
