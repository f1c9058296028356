use crate::game::{GameState, GameStatus};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, game: &GameState, win_value: u64) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = match game.status() {
            GameStatus::Ongoing => ("playing", STATUS_OK),
            GameStatus::Won => ("won", ACCENT),
            GameStatus::Lost => ("lost", STATUS_ERROR),
        };
        let size = game.board_size();
        let line = Line::from(vec![
            Span::styled(
                "  2048",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Score {}", game.score()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Win at {win_value}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{size}×{size}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
