use crate::game::{GameStatus, TileSource};
use crate::ui::app::App;
use crate::ui::board::BoardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, POPUP_BORDER, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw<S: TileSource>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let game = app.game();

    frame.render_widget(Header::new().widget(game, app.settings().win_value), header);
    frame.render_widget(Clear, body);
    frame.render_widget(BoardView::new(game), body);
    frame.render_widget(Footer::new().widget(footer), footer);

    let (title, color) = match game.status() {
        GameStatus::Ongoing => return,
        GameStatus::Won => ("You win!", ACCENT),
        GameStatus::Lost => ("Game over", STATUS_ERROR),
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!("Score: {}", game.score())),
        Line::from(format!("Best tile: {}", game.max_tile())),
        Line::from(""),
        Line::from("R: play again   Q: quit"),
    ];
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_area = centered_rect_by_size(
        body,
        content_width.saturating_add(6),
        lines.len().saturating_add(2) as u16,
    );

    frame.render_widget(Clear, popup_area);
    let popup = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), popup_area);
}
