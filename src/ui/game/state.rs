use crate::game::GameState;
use crate::ui::mvi::UiState;

impl UiState for GameState {}
