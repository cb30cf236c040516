//! Intents for pointer drags.

use super::state::DragOriginPolicy;
use crate::board::CardId;
use crate::ui::focus::FocusPosition;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the drag reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragIntent {
    /// Gesture started on a card. `focus` is the focus at that moment.
    Begin {
        card_id: CardId,
        focus: FocusPosition,
        origin: DragOriginPolicy,
    },

    /// Pointer released over a column.
    Drop { target_column_index: usize },

    /// Gesture ended without a drop target.
    Cancel,
}

impl Intent for DragIntent {}
