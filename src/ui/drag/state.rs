//! State for pointer drags.

use serde::{Deserialize, Serialize};

use crate::board::CardId;
use crate::ui::mvi::UiState;

/// Payload captured when a drag gesture starts.
///
/// `origin_card_index` is signed because, under
/// [`DragOriginPolicy::Focus`], it is copied from the focus and may be the
/// no-card sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub card_id: CardId,
    pub origin_column_index: usize,
    pub origin_card_index: isize,
}

/// Where a drag's origin comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOriginPolicy {
    /// The focused cell when the gesture starts, even if the dragged card
    /// lives elsewhere.
    #[default]
    Focus,

    /// The dragged card's actual location on the board.
    Card,
}

/// Drag state machine: at most one session in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl UiState for DragState {}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
