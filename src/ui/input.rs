use crate::game::rules::OFFERED_BOARD_SIZES;
use crate::game::{Direction, TileSource};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// New game at the current size.
    Reset,
    /// New game at the given size.
    NewGame(usize),
    /// New game at the configured size.
    NewDefaultGame,
    Quit,
}

/// Maps a key event to a command. Releases and repeats of unknown keys map
/// to nothing.
pub fn key_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_ctrl_char(key, 'c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Command::Move(Direction::Right)
        }
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('n') => Command::NewDefaultGame,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(ch) => {
            let size = ch.to_digit(10)? as usize;
            if !OFFERED_BOARD_SIZES.contains(&size) {
                return None;
            }
            Command::NewGame(size)
        }
        _ => return None,
    };
    Some(command)
}

pub fn handle_key<S: TileSource>(app: &mut App<S>, key: KeyEvent, now: Instant) {
    let Some(command) = key_command(key) else {
        return;
    };
    match command {
        Command::Move(direction) => {
            app.on_move(direction, now);
        }
        Command::Reset => app.reset(now),
        Command::NewGame(size) => app.start_game(size, now),
        Command::NewDefaultGame => {
            let size = app.settings().board_size;
            app.start_game(size, now);
        }
        Command::Quit => app.request_quit(),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
