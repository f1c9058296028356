use std::fs;
use std::path::PathBuf;
use clap::Parser;
use tempfile::TempDir;
use tile2048::args::Args;
use tile2048::config::{Config, ConfigError, UiConfig};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.game.board_size, 4);
    assert_eq!(config.game.win_value, 2048);
    assert!(config.game.seed.is_none());
    assert_eq!(config.ui.animation_ms, 100);
    assert_eq!(config.ui.tick_ms, 50);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[game]
board_size = 5
seed = 42

[logging]
file = "/tmp/tile2048.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.game.board_size, 5);
    assert_eq!(config.game.seed, Some(42));
    assert_eq!(config.game.win_value, 2048);
    assert_eq!(config.ui, UiConfig::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/tile2048.log"))
    );
}

#[test]
fn test_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[game\nboard_size = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[game]\nboard_size = \"big\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_board_size_out_of_range_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[game]\nboard_size = 1\n");

    let config = Config::load_from(&path).unwrap();
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("board_size")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_flags_can_fix_invalid_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[game]\nboard_size = 20\nwin_value = 100\n");

    let config = Config::load_from(&path).unwrap();
    assert!(config.validate().is_err());

    let args = Args::parse_from(["tile2048", "--size", "4", "--win", "256"]);
    let config = args.apply(config);
    assert!(config.validate().is_ok());
    assert_eq!(config.game.board_size, 4);
    assert_eq!(config.game.win_value, 256);
}

#[test]
fn test_win_value_must_be_power_of_two() {
    let mut config = Config::default();
    config.game.win_value = 1000;
    assert!(config.validate().is_err());

    config.game.win_value = 2;
    assert!(config.validate().is_err());

    config.game.win_value = 64;
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_tick_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_ms"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = Config::default();
    config.game.board_size = 6;
    config.game.seed = Some(7);
    config.ui.animation_ms = 250;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
