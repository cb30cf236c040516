//! State for board focus.

use crate::ui::mvi::UiState;

/// Direction of a focus or item move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// The focused cell of the board.
///
/// `card_index` is signed: landing on a column without cards yields
/// [`FocusPosition::NO_CARD`]. That value is a normal state, not an error,
/// and every consumer has to tolerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FocusPosition {
    pub column_index: usize,
    pub card_index: isize,
}

impl UiState for FocusPosition {}

impl FocusPosition {
    /// Sentinel card index for a column with no cards.
    pub const NO_CARD: isize = -1;

    pub const fn new(column_index: usize, card_index: isize) -> Self {
        Self {
            column_index,
            card_index,
        }
    }

    /// `{0, 0}`, where Escape sends focus.
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    pub fn has_card(&self) -> bool {
        self.card_index >= 0
    }

    /// Card index as `usize`, `None` for the sentinel.
    pub fn card(&self) -> Option<usize> {
        usize::try_from(self.card_index).ok()
    }
}
