use crate::game::rules::STARTING_TILES;
use crate::game::{Direction, SpawnRoll};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntent {
    /// Start over on a board of `size` with two starting tiles.
    Init {
        size: usize,
        rolls: [SpawnRoll; STARTING_TILES],
    },
    /// Slide all tiles one way.
    Move(Direction),
    /// Animation finished: forget merge sources, clear `has_changed`.
    CleanUp,
    /// Drop one new tile into an empty cell.
    Spawn(SpawnRoll),
    /// Decide won / lost / ongoing.
    EvaluateTerminal { win_value: u64 },
    /// Start over at the current size.
    Reset {
        rolls: [SpawnRoll; STARTING_TILES],
    },
}

impl Intent for GameIntent {}
