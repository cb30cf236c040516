//! Reorder feature module.
//!
//! Turns a "move item" key into a card relocation on the board.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Move descriptor and outcome types
//! - `intent.rs` - MoveItem(direction)
//! - `reducer.rs` - Reorder rules (pure, board is never mutated)

mod intent;
mod reducer;
mod state;

pub use intent::ReorderIntent;
pub use reducer::{move_item, ReorderReducer};
pub use state::{MoveDescriptor, MoveOutcome};
