//! Reducer for card reordering.

use crate::board::{Board, Column};
use crate::ui::focus::{Direction, FocusPosition};
use crate::ui::mvi::Reducer;

use super::intent::ReorderIntent;
use super::state::{MoveDescriptor, MoveOutcome};

/// Computes the move for the focused card.
///
/// - Up/Down swap with the neighbour inside the column, never past its ends.
/// - Left/Right insert into the adjacent column at
///   `min(card_index, target.len())`, so a shorter column receives the card
///   at its end.
///
/// Focus follows the moved card. Without a card at `focus` (sentinel, empty
/// column) or without a valid target the outcome carries no move.
pub fn move_item(board: &Board, focus: FocusPosition, direction: Direction) -> MoveOutcome {
    let (Some(card), Some(card_index)) = (
        board.card_at(focus.column_index, focus.card_index),
        focus.card(),
    ) else {
        tracing::debug!(?focus, ?direction, "No card at focus, nothing to move");
        return MoveOutcome::focus_only(focus);
    };

    let column_index = focus.column_index;
    let target = match direction {
        Direction::Up => card_index
            .checked_sub(1)
            .map(|to_card| (column_index, to_card)),
        Direction::Down => {
            let len = board.column(column_index).map_or(0, Column::len);
            (card_index + 1 < len).then_some((column_index, card_index + 1))
        }
        Direction::Left => column_index
            .checked_sub(1)
            .and_then(|to_column| cross_column_target(board, to_column, card_index)),
        Direction::Right => cross_column_target(board, column_index + 1, card_index),
    };

    let Some((to_column_index, to_card_index)) = target else {
        tracing::debug!(?focus, ?direction, "Move target out of range");
        return MoveOutcome::focus_only(focus);
    };

    let card_move = MoveDescriptor {
        card_id: card.id.clone(),
        from_column_index: column_index,
        to_column_index,
        from_card_index: card_index,
        to_card_index,
    };
    tracing::debug!(?card_move, "Computed card move");

    MoveOutcome {
        focus: card_move.destination(),
        card_move: Some(card_move),
    }
}

fn cross_column_target(
    board: &Board,
    to_column: usize,
    card_index: usize,
) -> Option<(usize, usize)> {
    board
        .column(to_column)
        .map(|target| (to_column, card_index.min(target.len())))
}

/// Reducer for keyboard reorders.
///
/// Pure function. Applying the emitted move to the board is the caller's
/// job, and has to happen before the returned focus is rendered.
pub struct ReorderReducer;

impl Reducer for ReorderReducer {
    type State = FocusPosition;
    type Intent = ReorderIntent;
    type Effect = Option<MoveDescriptor>;

    fn reduce(
        board: &Board,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Self::Effect) {
        match intent {
            ReorderIntent::MoveItem(direction) => {
                let MoveOutcome { focus, card_move } = move_item(board, state, direction);
                (focus, card_move)
            }
        }
    }
}
