//! Tile lookup with a stable render order.

use std::collections::{HashMap, HashSet};

use super::tile::{Tile, TileId};

/// Map from id to tile, plus the order tiles should be drawn in.
///
/// Render order is independent of board order: a tile keeps its slot while
/// it slides, so animation keys stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tiles {
    by_id: HashMap<TileId, Tile>,
    order: Vec<TileId>,
}

impl Tiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a tile. New ids go to the end of the render order.
    pub fn insert(&mut self, tile: Tile) {
        if self.by_id.insert(tile.id, tile).is_none() {
            self.order.push(tile.id);
        }
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in render order.
    pub fn ids(&self) -> &[TileId] {
        &self.order
    }

    /// First id listed twice in the render order.
    pub(crate) fn duplicate_in_order(&self) -> Option<TileId> {
        let mut seen = HashSet::with_capacity(self.order.len());
        self.order.iter().copied().find(|id| !seen.insert(*id))
    }

    /// Lowest stored id the render order doesn't list.
    pub(crate) fn unordered(&self) -> Option<TileId> {
        let ordered: HashSet<_> = self.order.iter().collect();
        self.by_id
            .keys()
            .filter(|id| !ordered.contains(id))
            .min()
            .copied()
    }

    /// Tiles in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.order.iter().filter_map(move |id| self.by_id.get(id))
    }
}

impl FromIterator<Tile> for Tiles {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut tiles = Tiles::new();
        for tile in iter {
            tiles.insert(tile);
        }
        tiles
    }
}
