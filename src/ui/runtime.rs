use crate::game::TileSource;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, GameSettings};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Runs the game until the player quits or a shutdown signal arrives.
pub fn run<S: TileSource>(
    settings: GameSettings,
    source: S,
    tick_rate: Duration,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(settings, source, Instant::now());
    let events = EventHandler::new(tick_rate, shutdown);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // ratatui picks up the new size on the next draw
            Ok(AppEvent::Resize(cols, rows)) => tracing::trace!(cols, rows, "resize"),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(score = app.game().score(), "exiting");
    drop(guard);
    Ok(())
}
