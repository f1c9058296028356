//! Square grid of cells, each empty or holding one tile id.

use super::tile::{Position, TileId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major: index = y * size + x.
    cells: Vec<Option<TileId>>,
}

impl Board {
    /// Empty board of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<TileId> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Writes a cell. Out-of-range positions are ignored.
    pub fn set(&mut self, pos: Position, id: Option<TileId>) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = id;
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Position::new(x, y)))
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, TileId)> + '_ {
        self.positions()
            .filter_map(move |pos| self.get(pos).map(|id| (pos, id)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.positions().filter(|pos| self.get(*pos).is_none()).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.size && pos.y < self.size).then(|| pos.y * self.size + pos.x)
    }
}
