//! Focus feature module.
//!
//! Tracks the single focused `(column, card)` cell on the board and moves it
//! in response to arrow keys.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Focus position and direction types
//! - `intent.rs` - Move / Reset
//! - `reducer.rs` - Navigation rules (pure, no wraparound)

mod intent;
mod reducer;
mod state;

pub use intent::FocusIntent;
pub use reducer::{move_focus, FocusReducer};
pub use state::{Direction, FocusPosition};
