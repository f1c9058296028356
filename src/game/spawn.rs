//! Sources of randomness for tile placement.
//!
//! The engine never draws random numbers itself. A [`SpawnRoll`] carries a
//! decision made up front, which keeps the transition functions pure and lets
//! tests script exact placements.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::rules::FOUR_PROBABILITY;

/// Pre-drawn spawn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRoll {
    /// Index into the row-major empty-cell list, taken modulo its length.
    pub slot: usize,
    /// 2 or 4.
    pub value: u64,
}

impl SpawnRoll {
    pub const fn two(slot: usize) -> Self {
        Self { slot, value: 2 }
    }

    pub const fn four(slot: usize) -> Self {
        Self { slot, value: 4 }
    }
}

/// Produces spawn decisions.
pub trait TileSource {
    /// Draws a roll for a board with `empty_cells` free cells.
    fn roll(&mut self, empty_cells: usize) -> SpawnRoll;
}

/// Uniform cell choice, 90% twos and 10% fours.
#[derive(Debug, Clone)]
pub struct RandomTiles<R> {
    rng: R,
}

impl<R: Rng> RandomTiles<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTiles<SmallRng> {
    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> TileSource for RandomTiles<R> {
    fn roll(&mut self, empty_cells: usize) -> SpawnRoll {
        let slot = if empty_cells == 0 {
            0
        } else {
            self.rng.gen_range(0..empty_cells)
        };
        let value = if self.rng.gen_bool(FOUR_PROBABILITY) { 4 } else { 2 };
        SpawnRoll { slot, value }
    }
}

/// Replays a fixed list of rolls, then repeats the last one.
///
/// Falls back to `SpawnRoll::two(0)` when built from an empty list.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    rolls: Vec<SpawnRoll>,
    cursor: usize,
}

impl ScriptedTiles {
    pub fn new(rolls: impl IntoIterator<Item = SpawnRoll>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl TileSource for ScriptedTiles {
    fn roll(&mut self, _empty_cells: usize) -> SpawnRoll {
        let roll = self
            .rolls
            .get(self.cursor)
            .or_else(|| self.rolls.last())
            .copied()
            .unwrap_or(SpawnRoll::two(0));
        self.cursor += 1;
        roll
    }
}
