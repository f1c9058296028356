use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game::rules::{DEFAULT_BOARD_SIZE, DEFAULT_WIN_VALUE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Rules a new game starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length (default: 4).
    pub board_size: usize,
    /// Tile value or score that wins (default: 2048).
    pub win_value: u64,
    /// Seed for tile placement. Random when absent.
    pub seed: Option<u64>,
}

/// Front-end timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tile animation length in milliseconds (default: 100).
    pub animation_ms: u64,
    /// Event loop tick in milliseconds (default: 50).
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "tile2048=debug". `RUST_LOG` wins.
    pub level: String,
    /// Log file. Logging is off when absent; stdout belongs to the board.
    pub file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_value: DEFAULT_WIN_VALUE,
            seed: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_ms: 100,
            tick_ms: 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
