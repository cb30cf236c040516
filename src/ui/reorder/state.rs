//! Output types of card reordering.

use crate::board::CardId;
use crate::ui::focus::FocusPosition;

/// A card relocation for the board owner to apply.
///
/// Keyboard reorders and pointer drops both produce this shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    pub card_id: CardId,
    pub from_column_index: usize,
    pub to_column_index: usize,
    pub from_card_index: usize,
    pub to_card_index: usize,
}

impl MoveDescriptor {
    pub fn is_cross_column(&self) -> bool {
        self.from_column_index != self.to_column_index
    }

    /// Focus on the card at its destination.
    pub fn destination(&self) -> FocusPosition {
        FocusPosition::new(self.to_column_index, self.to_card_index as isize)
    }
}

/// Result of a reorder: the next focus and the move, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub focus: FocusPosition,
    pub card_move: Option<MoveDescriptor>,
}

impl MoveOutcome {
    /// Focus change with no board change.
    pub fn focus_only(focus: FocusPosition) -> Self {
        Self {
            focus,
            card_move: None,
        }
    }
}
