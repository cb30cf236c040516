//! Reducer for pointer drags.

use crate::board::{Board, CardId, Column};
use crate::ui::focus::FocusPosition;
use crate::ui::mvi::Reducer;
use crate::ui::reorder::MoveDescriptor;

use super::intent::DragIntent;
use super::state::{DragOriginPolicy, DragSession, DragState};

/// Starts a session whose origin is the focus at gesture start.
///
/// The dragged card's real location is not consulted: dragging a card other
/// than the focused one records the focused cell as origin.
pub fn begin_drag(card_id: CardId, focus: FocusPosition) -> DragSession {
    DragSession {
        card_id,
        origin_column_index: focus.column_index,
        origin_card_index: focus.card_index,
    }
}

/// Starts a session whose origin is the card's location on the board.
///
/// Falls back to [`begin_drag`] when the card is not on the board.
pub fn begin_drag_at_card(board: &Board, card_id: CardId, focus: FocusPosition) -> DragSession {
    match board.locate(&card_id) {
        Some((column_index, card_index)) => DragSession {
            card_id,
            origin_column_index: column_index,
            origin_card_index: card_index as isize,
        },
        None => {
            tracing::warn!(%card_id, "Dragged card not on board, using focus as origin");
            begin_drag(card_id, focus)
        }
    }
}

/// Reconciles a session against its drop target.
///
/// Drops on the origin column never move anything; pointer drags do not
/// reorder within a column. A cross-column drop appends to the target.
pub fn complete_drag(
    session: &DragSession,
    target_column_index: usize,
    target_column: &Column,
) -> Option<MoveDescriptor> {
    if target_column_index == session.origin_column_index {
        tracing::debug!(card_id = %session.card_id, "Dropped on origin column, no move");
        return None;
    }
    let Ok(from_card_index) = usize::try_from(session.origin_card_index) else {
        tracing::debug!(card_id = %session.card_id, "Drag origin has no card, no move");
        return None;
    };

    Some(MoveDescriptor {
        card_id: session.card_id.clone(),
        from_column_index: session.origin_column_index,
        to_column_index: target_column_index,
        from_card_index,
        to_card_index: target_column.len(),
    })
}

/// Reducer for the drag session lifecycle.
///
/// A drop always leaves the state `Idle`, so a session is consumed at most
/// once and a drop without a session yields nothing.
pub struct DragReducer;

impl Reducer for DragReducer {
    type State = DragState;
    type Intent = DragIntent;
    type Effect = Option<MoveDescriptor>;

    fn reduce(
        board: &Board,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Self::Effect) {
        match intent {
            DragIntent::Begin {
                card_id,
                focus,
                origin,
            } => {
                let session = match origin {
                    DragOriginPolicy::Focus => begin_drag(card_id, focus),
                    DragOriginPolicy::Card => begin_drag_at_card(board, card_id, focus),
                };
                tracing::debug!(?session, "Drag started");
                (DragState::Dragging(session), None)
            }

            DragIntent::Drop {
                target_column_index,
            } => match state {
                DragState::Dragging(session) => {
                    let card_move = board
                        .column(target_column_index)
                        .and_then(|column| complete_drag(&session, target_column_index, column));
                    (DragState::Idle, card_move)
                }
                DragState::Idle => {
                    tracing::debug!(target_column_index, "Drop without drag session");
                    (DragState::Idle, None)
                }
            },

            DragIntent::Cancel => {
                if state.is_dragging() {
                    tracing::debug!("Drag cancelled");
                }
                (DragState::Idle, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Card;

    fn board() -> Board {
        Board::new(vec![
            Column::new(
                "todo",
                "Todo",
                vec![Card::new("a", "A"), Card::new("b", "B"), Card::new("c", "C")],
            ),
            Column::new("doing", "Doing", vec![Card::new("d", "D")]),
            Column::new("done", "Done", vec![]),
        ])
    }

    fn begin(card: &str, focus: FocusPosition) -> DragIntent {
        DragIntent::Begin {
            card_id: CardId::from(card),
            focus,
            origin: DragOriginPolicy::Focus,
        }
    }

    #[test]
    fn begin_records_focus_not_card_location() {
        // Focus on the third card, pointer grabs the first.
        let session = begin_drag(CardId::from("a"), FocusPosition::new(0, 2));
        assert_eq!(session.origin_column_index, 0);
        assert_eq!(session.origin_card_index, 2);
    }

    #[test]
    fn begin_at_card_uses_real_location() {
        let session = begin_drag_at_card(&board(), CardId::from("d"), FocusPosition::new(0, 2));
        assert_eq!(session.origin_column_index, 1);
        assert_eq!(session.origin_card_index, 0);
    }

    #[test]
    fn begin_at_card_falls_back_to_focus() {
        let session = begin_drag_at_card(&board(), CardId::from("zz"), FocusPosition::new(0, 1));
        assert_eq!(session.origin_card_index, 1);
    }

    #[test]
    fn same_column_drop_is_noop() {
        let board = board();
        let session = begin_drag(CardId::from("a"), FocusPosition::new(0, 0));
        assert_eq!(complete_drag(&session, 0, &board.columns[0]), None);
    }

    #[test]
    fn cross_column_drop_appends() {
        let board = board();
        let session = begin_drag(CardId::from("b"), FocusPosition::new(0, 1));
        let card_move = complete_drag(&session, 1, &board.columns[1]).unwrap();
        assert_eq!(card_move.to_column_index, 1);
        assert_eq!(card_move.to_card_index, 1);
        assert_eq!(card_move.from_card_index, 1);
    }

    #[test]
    fn sentinel_origin_is_noop() {
        let board = board();
        let session = begin_drag(CardId::from("a"), FocusPosition::new(2, FocusPosition::NO_CARD));
        assert_eq!(complete_drag(&session, 0, &board.columns[0]), None);
    }

    #[test]
    fn drop_consumes_session_once() {
        let board = board();
        let (state, _) =
            DragReducer::reduce(&board, DragState::Idle, begin("a", FocusPosition::new(0, 0)));
        assert!(state.is_dragging());

        let (state, card_move) =
            DragReducer::reduce(&board, state, DragIntent::Drop { target_column_index: 2 });
        assert_eq!(state, DragState::Idle);
        assert_eq!(card_move.map(|m| m.to_card_index), Some(0));

        let (state, card_move) =
            DragReducer::reduce(&board, state, DragIntent::Drop { target_column_index: 2 });
        assert_eq!(state, DragState::Idle);
        assert_eq!(card_move, None);
    }

    #[test]
    fn drop_on_missing_column_discards_session() {
        let board = board();
        let (state, _) =
            DragReducer::reduce(&board, DragState::Idle, begin("a", FocusPosition::new(0, 0)));
        let (state, card_move) =
            DragReducer::reduce(&board, state, DragIntent::Drop { target_column_index: 9 });
        assert_eq!(state, DragState::Idle);
        assert_eq!(card_move, None);
    }

    #[test]
    fn cancel_discards_session() {
        let board = board();
        let (state, _) =
            DragReducer::reduce(&board, DragState::Idle, begin("a", FocusPosition::new(0, 0)));
        let (state, card_move) = DragReducer::reduce(&board, state, DragIntent::Cancel);
        assert_eq!(state, DragState::Idle);
        assert_eq!(card_move, None);
    }
}
