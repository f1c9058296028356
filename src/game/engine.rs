//! Board transitions.
//!
//! Every function takes a state by reference and returns a fresh one. None of
//! them fail: malformed input is a caller bug, caught by `debug_assert!` on
//! the produced state in debug builds.

use std::collections::HashMap;

use super::board::Board;
use super::direction::Direction;
use super::rules::STARTING_TILES;
use super::spawn::{SpawnRoll, TileSource};
use super::state::{GameState, GameStatus};
use super::tile::{Position, Tile, TileId};
use super::tiles::Tiles;

/// Two tiles combined by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Tile that stays on the board with the doubled value.
    pub survivor: TileId,
    /// Tile that slid into the survivor; dropped at the next cleanup.
    pub retired: TileId,
    pub position: Position,
    /// Value after merging.
    pub value: u64,
}

/// Everything a move produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub merges: Vec<Merge>,
    pub score_delta: u64,
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        self.state.has_changed
    }
}

/// Fresh game of `size` with the two starting tiles drawn from `source`.
pub fn init(size: usize, source: &mut impl TileSource) -> GameState {
    let cells = size * size;
    let first = source.roll(cells);
    let second = source.roll(cells.saturating_sub(1));
    init_with(size, [first, second])
}

/// Fresh game of `size` with the starting tiles placed by `rolls`.
///
/// The second roll indexes the cells left after the first placement, so the
/// two tiles never share a cell.
pub fn init_with(size: usize, rolls: [SpawnRoll; STARTING_TILES]) -> GameState {
    rolls
        .into_iter()
        .fold(GameState::empty(size), |state, roll| spawn_tile(&state, roll))
}

/// Fresh game at the current board size.
pub fn reset(state: &GameState, source: &mut impl TileSource) -> GameState {
    init(state.board_size(), source)
}

/// Slides every line toward `direction`, merging equal neighbours once.
pub fn move_tiles(state: &GameState, direction: Direction) -> GameState {
    resolve_move(state, direction).state
}

/// Like [`move_tiles`], also reporting merges and the score gained.
pub fn resolve_move(state: &GameState, direction: Direction) -> MoveOutcome {
    let size = state.board_size();
    let mut board = Board::new(size);
    let mut placed: HashMap<TileId, Tile> = HashMap::with_capacity(state.tiles.len());
    let mut merges = Vec::new();
    let mut score_delta = 0;
    let mut changed = false;

    for line in 0..size {
        let mut next_slot = 0;
        // Last tile placed in this line that may still absorb a neighbour.
        let mut pending: Option<Tile> = None;

        for from in direction.line(size, line) {
            let Some(tile) = state.tile_at(from).copied() else {
                continue;
            };

            match pending {
                Some(target) if target.value == tile.value => {
                    let value = target.value * 2;
                    placed.insert(target.id, Tile { value, ..target });
                    placed.insert(
                        tile.id,
                        Tile {
                            position: target.position,
                            ..tile
                        },
                    );
                    merges.push(Merge {
                        survivor: target.id,
                        retired: tile.id,
                        position: target.position,
                        value,
                    });
                    score_delta += value;
                    pending = None;
                    changed = true;
                }
                _ => {
                    let to = direction.cell(size, line, next_slot);
                    next_slot += 1;
                    board.set(to, Some(tile.id));
                    let moved = Tile { position: to, ..tile };
                    placed.insert(tile.id, moved);
                    pending = Some(moved);
                    changed |= from != to;
                }
            }
        }
    }

    // Keep render slots; ids absent from `placed` were retired earlier.
    let tiles: Tiles = state
        .tiles
        .ids()
        .iter()
        .filter_map(|id| placed.remove(id))
        .collect();

    let next = GameState {
        board,
        tiles,
        has_changed: changed,
        score: state.score + score_delta,
        status: state.status,
        next_id: state.next_id,
    };
    debug_assert_eq!(next.validate(), Ok(()));

    MoveOutcome {
        state: next,
        merges,
        score_delta,
    }
}

/// Drops tiles no longer on the board and clears `has_changed`.
///
/// Render order is rebuilt in row-major board order.
pub fn clean_up(state: &GameState) -> GameState {
    let tiles: Tiles = state.live_tiles().copied().collect();
    GameState {
        board: state.board.clone(),
        tiles,
        has_changed: false,
        score: state.score,
        status: state.status,
        next_id: state.next_id,
    }
}

/// Places one tile as dictated by `roll`. No-op on a full board.
pub fn spawn_tile(state: &GameState, roll: SpawnRoll) -> GameState {
    let empty = state.empty_cells();
    if empty.is_empty() {
        return state.clone();
    }

    let position = empty[roll.slot % empty.len()];
    let mut next = state.clone();
    let id = next.issue_id();
    next.board.set(position, Some(id));
    next.tiles.insert(Tile {
        id,
        position,
        value: roll.value,
    });
    debug_assert_eq!(next.validate(), Ok(()));
    next
}

/// Places one tile in a uniformly chosen empty cell.
pub fn spawn_random_tile(state: &GameState, source: &mut impl TileSource) -> GameState {
    let empty = state.board.empty_cells().len();
    if empty == 0 {
        return state.clone();
    }
    spawn_tile(state, source.roll(empty))
}

/// Recomputes `status` from the board and score.
pub fn evaluate_terminal(state: &GameState, win_value: u64) -> GameState {
    GameState {
        status: terminal_status(state, win_value),
        ..state.clone()
    }
}

/// Status the board and score imply, without building a new state.
pub fn terminal_status(state: &GameState, win_value: u64) -> GameStatus {
    if state.score >= win_value || state.max_tile() >= win_value {
        return GameStatus::Won;
    }
    if has_moves(state) {
        GameStatus::Ongoing
    } else {
        GameStatus::Lost
    }
}

/// True while an empty cell or an equal adjacent pair exists.
///
/// On a full board each cell is compared with its right and bottom neighbour
/// only, which visits every adjacent pair exactly once.
pub fn has_moves(state: &GameState) -> bool {
    if !state.board.is_full() {
        return true;
    }
    let size = state.board_size();
    for y in 0..size {
        for x in 0..size {
            let value = state.value_at(Position::new(x, y));
            if x + 1 < size && state.value_at(Position::new(x + 1, y)) == value {
                return true;
            }
            if y + 1 < size && state.value_at(Position::new(x, y + 1)) == value {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::spawn::ScriptedTiles;

    #[test]
    fn merge_keeps_survivor_identity() {
        let state = GameState::from_grid(&[[2, 2], [0, 0]]);
        let left = state.tile_at(Position::new(0, 0)).unwrap().id;
        let right = state.tile_at(Position::new(1, 0)).unwrap().id;

        let outcome = resolve_move(&state, Direction::Left);
        assert_eq!(
            outcome.merges,
            vec![Merge {
                survivor: left,
                retired: right,
                position: Position::new(0, 0),
                value: 4,
            }]
        );
        assert_eq!(outcome.state.board().get(Position::new(0, 0)), Some(left));
        let retired = outcome.state.tiles().get(right).unwrap();
        assert_eq!(retired.position, Position::new(0, 0));
        assert_eq!(retired.value, 2);
    }

    #[test]
    fn sliding_tile_keeps_identity() {
        let state = GameState::from_grid(&[[0, 0, 8], [0, 0, 0], [0, 0, 0]]);
        let id = state.tile_at(Position::new(2, 0)).unwrap().id;
        let next = move_tiles(&state, Direction::Down);
        assert_eq!(next.board().get(Position::new(2, 2)), Some(id));
        assert_eq!(next.tiles().get(id).unwrap().position, Position::new(2, 2));
    }

    #[test]
    fn retired_tiles_keep_render_slot_until_cleanup() {
        let state = GameState::from_grid(&[[4, 4], [0, 0]]);
        let order = state.tiles().ids().to_vec();
        let moved = move_tiles(&state, Direction::Right);
        assert_eq!(moved.tiles().ids(), order.as_slice());

        let cleaned = clean_up(&moved);
        assert_eq!(cleaned.tiles().len(), 1);
        assert!(!cleaned.has_changed());
    }

    #[test]
    fn spawn_uses_roll_slot_modulo_empty_count() {
        let state = GameState::from_grid(&[[2, 0], [0, 0]]);
        // three empty cells: (1,0), (0,1), (1,1); slot 4 wraps to (0,1)
        let next = spawn_tile(&state, SpawnRoll::four(4));
        assert_eq!(next.values(), vec![vec![2, 0], vec![4, 0]]);
    }

    #[test]
    fn spawn_issues_fresh_ids() {
        let state = GameState::from_grid(&[[2, 0], [0, 0]]);
        let next = spawn_tile(&state, SpawnRoll::two(0));
        let ids: Vec<_> = next.tiles().ids().to_vec();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn init_places_tiles_in_distinct_cells_even_with_same_slot() {
        let state = init(2, &mut ScriptedTiles::new([SpawnRoll::two(0)]));
        assert_eq!(state.values(), vec![vec![2, 2], vec![0, 0]]);
    }

    #[test]
    fn has_moves_with_single_gap() {
        let state = GameState::from_grid(&[[2, 4], [8, 0]]);
        assert!(has_moves(&state));
        let full = GameState::from_grid(&[[2, 4], [8, 16]]);
        assert!(!has_moves(&full));
    }

    #[test]
    fn has_moves_checks_bottom_neighbour() {
        let state = GameState::from_grid(&[[2, 4], [2, 8]]);
        assert!(has_moves(&state));
    }
}
