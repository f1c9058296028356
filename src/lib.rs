//! Sliding-tile merge puzzle: pure rule engine plus a terminal front end.

pub mod args;
pub mod config;
pub mod game;
pub mod logging;
pub mod shutdown;
pub mod ui;
