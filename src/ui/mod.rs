//! Terminal front end.
//!
//! Owns everything the engine leaves to its caller: input mapping, the move
//! throttle, the animation delay before cleanup + spawn, and drawing.

pub mod app;
pub mod board;
pub mod events;
pub mod footer;
pub mod game;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod throttle;

pub use runtime::run;
