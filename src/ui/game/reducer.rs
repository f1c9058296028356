use crate::game::engine;
use crate::game::GameState;
use crate::ui::mvi::Reducer;

use super::intent::GameIntent;

/// Routes intents to the transition engine.
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Init { size, rolls } => engine::init_with(size, rolls),
            GameIntent::Move(direction) => engine::move_tiles(&state, direction),
            GameIntent::CleanUp => engine::clean_up(&state),
            GameIntent::Spawn(roll) => engine::spawn_tile(&state, roll),
            GameIntent::EvaluateTerminal { win_value } => {
                engine::evaluate_terminal(&state, win_value)
            }
            GameIntent::Reset { rolls } => engine::init_with(state.board_size(), rolls),
        }
    }
}
