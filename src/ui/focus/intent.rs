//! Intents for board focus.

use super::state::Direction;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the focus reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Arrow key without the move modifier.
    Move(Direction),

    /// Escape: back to the first card of the first column.
    Reset,
}

impl Intent for FocusIntent {}
