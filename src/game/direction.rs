//! Move directions and the line geometry they induce.
//!
//! Every move is resolved line by line. A line is a row (left/right) or a
//! column (up/down), walked from the edge the tiles slide toward. One
//! coordinate mapping per direction is all that differs between the four
//! moves.

use std::fmt;

use super::tile::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell at `step` along line `line`, counting from the target edge.
    ///
    /// `step == 0` is the cell a tile lands in when nothing blocks it.
    pub fn cell(self, size: usize, line: usize, step: usize) -> Position {
        let far = size - 1 - step;
        match self {
            Direction::Up => Position::new(line, step),
            Direction::Down => Position::new(line, far),
            Direction::Left => Position::new(step, line),
            Direction::Right => Position::new(far, line),
        }
    }

    /// Cells of one line, ordered from the target edge outward.
    pub fn line(self, size: usize, line: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |step| self.cell(size, line, step))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
