//! Intents for card reordering.

use crate::ui::focus::Direction;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the reorder reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderIntent {
    /// Move the focused card one step in a direction.
    MoveItem(Direction),
}

impl Intent for ReorderIntent {}
