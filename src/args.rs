//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(name = "tile2048")]
#[command(author, version, about = "Slide and merge tiles to reach 2048")]
pub struct Args {
    /// Board edge length (overrides config)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Tile value that wins the game (overrides config)
    #[arg(short, long)]
    pub win: Option<u64>,

    /// Seed for deterministic tile placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tile animation length in milliseconds
    #[arg(long)]
    pub animation_ms: Option<u64>,

    /// Config file to read instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Layers the flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if let Some(win) = self.win {
            config.game.win_value = win;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(animation_ms) = self.animation_ms {
            config.ui.animation_ms = animation_ms;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config
    }
}
