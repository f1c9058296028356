use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consumes the old state and returns its successor. Must not perform
    /// I/O or draw random numbers; anything random arrives inside the intent.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
