use crate::game::{GameState, Position};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::tile_colors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::collections::HashSet;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

/// Board grid, one coloured block per cell.
pub struct BoardView<'a> {
    game: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self { game }
    }

    /// Width and height the full grid needs.
    pub fn required_size(board_size: usize) -> (u16, u16) {
        let n = board_size as u16;
        (
            n * CELL_WIDTH + n.saturating_sub(1) * CELL_GAP,
            n * CELL_HEIGHT,
        )
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.game.board_size();
        let (width, height) = Self::required_size(size);
        let grid = centered_rect_by_size(area, width, height);
        let merged = merged_cells(self.game);

        for y in 0..size {
            for x in 0..size {
                let cell = Rect {
                    x: grid.x + x as u16 * (CELL_WIDTH + CELL_GAP),
                    y: grid.y + y as u16 * CELL_HEIGHT,
                    width: CELL_WIDTH,
                    height: CELL_HEIGHT,
                };
                // Terminal too small: draw what fits.
                if cell.right() > grid.right() || cell.bottom() > grid.bottom() {
                    continue;
                }

                let pos = Position::new(x, y);
                let value = self.game.value_at(pos);
                let (bg, fg) = tile_colors(value);
                let mut style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
                if merged.contains(&pos) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                buf.set_style(cell, style);
                if value > 0 {
                    let label = value.to_string();
                    let offset = CELL_WIDTH.saturating_sub(label.len() as u16) / 2;
                    let _ = buf.set_stringn(
                        cell.x + offset,
                        cell.y + CELL_HEIGHT / 2,
                        &label,
                        CELL_WIDTH as usize,
                        style,
                    );
                }
            }
        }
    }
}

/// Cells that absorbed a tile in the last move, while cleanup is pending.
///
/// A merge source keeps the survivor's position but is no longer the tile
/// the board holds there.
fn merged_cells(game: &GameState) -> HashSet<Position> {
    if !game.has_changed() {
        return HashSet::new();
    }
    game.tiles_in_render_order()
        .filter(|tile| game.board().get(tile.position) != Some(tile.id))
        .map(|tile| tile.position)
        .collect()
}
