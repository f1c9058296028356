//! Game state snapshot.

use std::collections::HashSet;

use thiserror::Error;

use super::board::Board;
use super::rules::{is_tile_value, DEFAULT_BOARD_SIZE};
use super::tile::{Position, Tile, TileId};
use super::tiles::Tiles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost: the front end stops accepting moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// First broken invariant found by [`GameState::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("cell {position} references unknown tile {id}")]
    DanglingCell { position: Position, id: TileId },

    #[error("tile {id} is stored at {stored} but sits in cell {actual}")]
    Misplaced {
        id: TileId,
        stored: Position,
        actual: Position,
    },

    #[error("tile {id} appears in more than one cell")]
    DuplicateCell { id: TileId },

    #[error("tile {id} is not on the board and no cleanup is pending")]
    Orphaned { id: TileId },

    #[error("tile {id} is at {position}, outside the {size}x{size} board")]
    OutOfBounds {
        id: TileId,
        position: Position,
        size: usize,
    },

    #[error("tile {id} appears more than once in the render order")]
    DuplicateInOrder { id: TileId },

    #[error("tile {id} is missing from the render order")]
    Unordered { id: TileId },

    #[error("tile {id} has value {value}, which is not a power of two >= 2")]
    InvalidValue { id: TileId, value: u64 },

    #[error("tile {id} was issued after the id counter ({next})")]
    IdFromFuture { id: TileId, next: u64 },
}

/// Immutable game snapshot. Every transition builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) tiles: Tiles,
    pub(crate) has_changed: bool,
    pub(crate) score: u64,
    pub(crate) status: GameStatus,
    /// Next id to hand out.
    pub(crate) next_id: u64,
}

impl Default for GameState {
    /// Pre-init state: empty default-sized board, no tiles.
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl GameState {
    /// Board with no tiles, score 0, ongoing.
    pub fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            tiles: Tiles::new(),
            has_changed: false,
            score: 0,
            status: GameStatus::Ongoing,
            next_id: 0,
        }
    }

    /// Builds a settled state from a value grid; `0` marks an empty cell.
    ///
    /// Rows shorter than the grid height leave their tail empty. Ids are
    /// assigned in row-major order. Intended for tests and tooling.
    pub fn from_grid<R: AsRef<[u64]>>(rows: &[R]) -> Self {
        let mut state = Self::empty(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate().take(rows.len()) {
                if value == 0 {
                    continue;
                }
                let id = state.issue_id();
                let position = Position::new(x, y);
                state.board.set(position, Some(id));
                state.tiles.insert(Tile {
                    id,
                    position,
                    value,
                });
            }
        }
        state
    }

    /// Same state with the score replaced.
    pub fn with_score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// True after a move that altered the board, until cleanup runs.
    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.board.get(pos).and_then(|id| self.tiles.get(id))
    }

    /// Value at a cell, 0 when empty.
    pub fn value_at(&self, pos: Position) -> u64 {
        self.tile_at(pos).map_or(0, |tile| tile.value)
    }

    /// Row-major value grid, 0 for empty cells.
    pub fn values(&self) -> Vec<Vec<u64>> {
        let size = self.board_size();
        (0..size)
            .map(|y| (0..size).map(|x| self.value_at(Position::new(x, y))).collect())
            .collect()
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.board.empty_cells()
    }

    /// Tiles currently on the board (retired merge sources excluded).
    pub fn live_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.board
            .occupied()
            .filter_map(move |(_, id)| self.tiles.get(id))
    }

    /// Tiles in render order, including merge sources awaiting cleanup.
    pub fn tiles_in_render_order(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    pub fn max_tile(&self) -> u64 {
        self.live_tiles().map(|tile| tile.value).max().unwrap_or(0)
    }

    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Checks board/tile-map consistency.
    ///
    /// Tiles missing from the board are tolerated only while a cleanup is
    /// pending (`has_changed`), since merge sources linger until then.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut on_board = HashSet::new();
        for (position, id) in self.board.occupied() {
            let tile = self
                .tiles
                .get(id)
                .ok_or(StateError::DanglingCell { position, id })?;
            if !on_board.insert(id) {
                return Err(StateError::DuplicateCell { id });
            }
            if tile.position != position {
                return Err(StateError::Misplaced {
                    id,
                    stored: tile.position,
                    actual: position,
                });
            }
        }

        if let Some(id) = self.tiles.duplicate_in_order() {
            return Err(StateError::DuplicateInOrder { id });
        }
        if let Some(id) = self.tiles.unordered() {
            return Err(StateError::Unordered { id });
        }

        let size = self.board_size();
        for tile in self.tiles.iter() {
            if tile.position.x >= size || tile.position.y >= size {
                return Err(StateError::OutOfBounds {
                    id: tile.id,
                    position: tile.position,
                    size,
                });
            }
            if !is_tile_value(tile.value) {
                return Err(StateError::InvalidValue {
                    id: tile.id,
                    value: tile.value,
                });
            }
            if tile.id.get() >= self.next_id {
                return Err(StateError::IdFromFuture {
                    id: tile.id,
                    next: self.next_id,
                });
            }
            if !self.has_changed && !on_board.contains(&tile.id) {
                return Err(StateError::Orphaned { id: tile.id });
            }
        }
        Ok(())
    }

    pub(crate) fn issue_id(&mut self) -> TileId {
        let id = TileId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
