use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use tile2048::args::Args;
use tile2048::config::Config;
use tile2048::game::RandomTiles;
use tile2048::logging::init_tracing;
use tile2048::shutdown::ShutdownHandle;
use tile2048::ui::app::GameSettings;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    let config = args.apply(config);
    config.validate().context("invalid settings")?;

    init_tracing(&config.logging)?;
    let shutdown = ShutdownHandle::install().context("failed to install signal handlers")?;

    let source = match config.game.seed {
        Some(seed) => RandomTiles::seeded(seed),
        None => RandomTiles::from_entropy(),
    };
    tracing::info!(
        size = config.game.board_size,
        win_value = config.game.win_value,
        seed = ?config.game.seed,
        "starting"
    );

    tile2048::ui::run(
        GameSettings::from_config(&config),
        source,
        Duration::from_millis(config.ui.tick_ms),
        shutdown,
    )
    .context("terminal session failed")?;
    Ok(())
}
