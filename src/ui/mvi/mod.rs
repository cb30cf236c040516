//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for the board engines' unidirectional
//! data flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer(board) ──→ (State, Effect) ──→ owner applies Effect
//!    ↑                                                   │
//!    └───────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Small owned value (focus position, drag session)
//! - **Intent**: User actions (key presses, pointer gestures)
//! - **Reducer**: Pure function over a read-only board snapshot

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
