//! Model-View-Intent primitives.
//!
//! ```text
//! key/tick ──→ Intent ──→ Reducer ──→ State ──→ draw
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Side effects (timers, random
//! draws, logging) stay with whoever dispatches.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
