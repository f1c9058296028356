//! Property tests for the transition engine.
//!
//! Boards are generated directly as value grids (sizes 2..=6, small values,
//! plenty of gaps) so merges, slides and full boards all show up often.

mod common;

use common::board_sum;
use proptest::prelude::*;
use proptest::sample::select;
use tile2048::game::engine::{
    clean_up, evaluate_terminal, has_moves, resolve_move, spawn_random_tile,
};
use tile2048::game::{Direction, GameState, GameStatus, RandomTiles};

const WIN: u64 = 2048;

fn grid() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (2usize..=6).prop_flat_map(|n| {
        prop::collection::vec(
            prop::collection::vec(select(vec![0u64, 0, 2, 2, 4, 8, 16]), n),
            n,
        )
    })
}

fn full_grid() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (2usize..=4).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(select(vec![2u64, 4, 8, 16]), n), n)
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    select(Direction::ALL.to_vec())
}

/// Reference loss check comparing each cell with all four neighbours.
fn brute_force_lost(values: &[Vec<u64>]) -> bool {
    let n = values.len();
    for y in 0..n {
        for x in 0..n {
            let v = values[y][x];
            if v == 0 {
                return false;
            }
            let neighbours = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbours {
                if nx < n && ny < n && values[ny][nx] == v {
                    return false;
                }
            }
        }
    }
    true
}

proptest! {
    #[test]
    fn move_conserves_value_and_counts_merges(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let outcome = resolve_move(&state, dir);

        prop_assert_eq!(
            outcome.state.occupied_count(),
            state.occupied_count() - outcome.merges.len()
        );
        prop_assert_eq!(board_sum(&outcome.state), board_sum(&state));
        prop_assert_eq!(outcome.state.validate(), Ok(()));
    }

    #[test]
    fn score_grows_by_merged_values(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let outcome = resolve_move(&state, dir);

        let merged: u64 = outcome.merges.iter().map(|m| m.value).sum();
        prop_assert_eq!(outcome.score_delta, merged);
        prop_assert_eq!(outcome.state.score(), state.score() + merged);
        for merge in &outcome.merges {
            let source = outcome.state.tiles().get(merge.retired).unwrap();
            prop_assert_eq!(merge.value, source.value * 2);
            prop_assert_eq!(outcome.state.value_at(merge.position), merge.value);
        }
    }

    #[test]
    fn second_move_only_changes_through_merges(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let first = resolve_move(&state, dir);
        let second = resolve_move(&first.state, dir);

        // The first move left every line compacted, so nothing slides again.
        prop_assert_eq!(second.changed(), !second.merges.is_empty());
    }

    #[test]
    fn move_without_merges_is_idempotent(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let first = resolve_move(&state, dir);
        prop_assume!(resolve_move(&first.state, dir).merges.is_empty());

        let second = resolve_move(&first.state, dir);
        prop_assert!(!second.changed());
        prop_assert_eq!(second.state.values(), first.state.values());
    }

    #[test]
    fn unmerged_tiles_keep_identity_and_value(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let outcome = resolve_move(&state, dir);

        for tile in state.live_tiles() {
            let after = outcome.state.tiles().get(tile.id).unwrap();
            let merged = outcome
                .merges
                .iter()
                .any(|m| m.survivor == tile.id || m.retired == tile.id);
            if !merged {
                prop_assert_eq!(after.value, tile.value);
                prop_assert_eq!(outcome.state.board().get(after.position), Some(tile.id));
            }
        }
    }

    #[test]
    fn changed_flag_matches_board_difference(rows in grid(), dir in direction()) {
        let state = GameState::from_grid(&rows);
        let outcome = resolve_move(&state, dir);
        let moved = state.live_tiles().any(|tile| {
            outcome.state.board().get(tile.position) != Some(tile.id)
        });
        prop_assert_eq!(outcome.changed(), moved || !outcome.merges.is_empty());
    }

    #[test]
    fn lost_iff_full_and_no_adjacent_pair(rows in full_grid()) {
        let state = evaluate_terminal(&GameState::from_grid(&rows), WIN);
        prop_assert_eq!(state.status() == GameStatus::Lost, brute_force_lost(&rows));
        prop_assert_eq!(has_moves(&state), !brute_force_lost(&rows));
    }

    #[test]
    fn lost_never_reported_with_empty_cell(rows in grid()) {
        let state = evaluate_terminal(&GameState::from_grid(&rows), WIN);
        if !state.empty_cells().is_empty() {
            prop_assert_ne!(state.status(), GameStatus::Lost);
        }
    }

    #[test]
    fn won_iff_tile_or_score_reaches_target(rows in grid(), score in 0u64..4096) {
        let state = GameState::from_grid(&rows).with_score(score);
        let evaluated = evaluate_terminal(&state, WIN);
        let should_win = score >= WIN || state.max_tile() >= WIN;
        prop_assert_eq!(evaluated.status() == GameStatus::Won, should_win);
    }

    #[test]
    fn won_by_tile_on_any_board(rows in grid(), x in 0usize..6, y in 0usize..6) {
        let mut rows = rows;
        let n = rows.len();
        rows[y % n][x % n] = WIN;
        let state = evaluate_terminal(&GameState::from_grid(&rows), WIN);
        prop_assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        size in 2usize..=6,
        moves in prop::collection::vec(direction(), 1..60),
    ) {
        let mut source = RandomTiles::seeded(seed);
        let mut state = tile2048::game::engine::init(size, &mut source);
        let mut last_score = 0;

        for dir in moves {
            let outcome = resolve_move(&state, dir);
            prop_assert!(outcome.state.score() >= last_score);
            last_score = outcome.state.score();
            state = outcome.state;
            if state.has_changed() {
                state = spawn_random_tile(&clean_up(&state), &mut source);
            }
            prop_assert_eq!(state.validate(), Ok(()));
            prop_assert_eq!(state.tiles().len(), state.occupied_count());
            for pos in state.empty_cells() {
                prop_assert!(state.tile_at(pos).is_none());
            }
        }
    }
}
