//! Game feature module.
//!
//! - `intent.rs` - one intent per engine operation
//! - `reducer.rs` - dispatch onto `crate::game::engine`
//! - `state.rs` - `GameState` as MVI state

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::GameReducer;
