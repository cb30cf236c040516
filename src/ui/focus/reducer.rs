//! Reducer for board focus.

use crate::board::Board;
use crate::ui::mvi::Reducer;

use super::intent::FocusIntent;
use super::state::{Direction, FocusPosition};

/// Computes the next focus for an arrow key.
///
/// No wraparound in any direction: at a column's first/last card and at the
/// first/last column the focus is returned unchanged. Moving sideways keeps
/// the card index where possible and clamps it to the target column's last
/// card, which yields [`FocusPosition::NO_CARD`] for an empty column.
pub fn move_focus(board: &Board, focus: FocusPosition, direction: Direction) -> FocusPosition {
    let Some(column) = board.column(focus.column_index) else {
        tracing::debug!(?focus, "Focus column missing, focus unchanged");
        return focus;
    };
    let last_card = column.len() as isize - 1;

    match direction {
        Direction::Up if focus.card_index > 0 => {
            FocusPosition::new(focus.column_index, focus.card_index - 1)
        }
        Direction::Down if focus.card_index < last_card => {
            FocusPosition::new(focus.column_index, focus.card_index + 1)
        }
        Direction::Left if focus.column_index > 0 => {
            step_to_column(board, focus, focus.column_index - 1)
        }
        Direction::Right => step_to_column(board, focus, focus.column_index + 1),
        _ => focus,
    }
}

fn step_to_column(board: &Board, focus: FocusPosition, target_index: usize) -> FocusPosition {
    match board.column(target_index) {
        Some(target) => {
            let target_last = target.len() as isize - 1;
            FocusPosition::new(target_index, focus.card_index.min(target_last))
        }
        None => focus,
    }
}

/// Reducer for focus transitions.
///
/// Pure function. The caller commits the returned focus after it has
/// applied any pending board change.
pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusPosition;
    type Intent = FocusIntent;
    type Effect = ();

    fn reduce(board: &Board, state: Self::State, intent: Self::Intent) -> (Self::State, ()) {
        match intent {
            FocusIntent::Move(direction) => (move_focus(board, state, direction), ()),
            FocusIntent::Reset => (FocusPosition::origin(), ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Card, Column};

    fn board(lens: &[usize]) -> Board {
        Board::new(
            lens.iter()
                .enumerate()
                .map(|(c, &len)| {
                    let cards = (0..len)
                        .map(|i| Card::new(format!("c{c}-{i}"), format!("Card {i}")))
                        .collect();
                    Column::new(format!("col{c}"), format!("Column {c}"), cards)
                })
                .collect(),
        )
    }

    fn at(column_index: usize, card_index: isize) -> FocusPosition {
        FocusPosition::new(column_index, card_index)
    }

    #[test]
    fn down_at_last_card_is_unchanged() {
        let board = board(&[3, 1]);
        assert_eq!(move_focus(&board, at(0, 2), Direction::Down), at(0, 2));
    }

    #[test]
    fn left_at_first_column_is_unchanged() {
        let board = board(&[3, 1]);
        assert_eq!(move_focus(&board, at(0, 0), Direction::Left), at(0, 0));
    }

    #[test]
    fn right_into_empty_column_yields_sentinel() {
        let board = board(&[1, 0]);
        assert_eq!(
            move_focus(&board, at(0, 0), Direction::Right),
            at(1, FocusPosition::NO_CARD)
        );
    }

    #[test]
    fn up_at_first_card_is_unchanged() {
        let board = board(&[2]);
        assert_eq!(move_focus(&board, at(0, 0), Direction::Up), at(0, 0));
    }

    #[test]
    fn up_and_down_step_one_card() {
        let board = board(&[3]);
        assert_eq!(move_focus(&board, at(0, 1), Direction::Up), at(0, 0));
        assert_eq!(move_focus(&board, at(0, 1), Direction::Down), at(0, 2));
    }

    #[test]
    fn right_at_last_column_is_unchanged() {
        let board = board(&[1, 2]);
        assert_eq!(move_focus(&board, at(1, 1), Direction::Right), at(1, 1));
    }

    #[test]
    fn sideways_keeps_index_when_target_is_long_enough() {
        let board = board(&[3, 3]);
        assert_eq!(move_focus(&board, at(0, 2), Direction::Right), at(1, 2));
        assert_eq!(move_focus(&board, at(1, 1), Direction::Left), at(0, 1));
    }

    #[test]
    fn sideways_clamps_to_shorter_column() {
        let board = board(&[4, 2]);
        assert_eq!(move_focus(&board, at(0, 3), Direction::Right), at(1, 1));
    }

    #[test]
    fn sentinel_survives_sideways_moves() {
        let board = board(&[0, 2]);
        assert_eq!(
            move_focus(&board, at(0, FocusPosition::NO_CARD), Direction::Right),
            at(1, FocusPosition::NO_CARD)
        );
    }

    #[test]
    fn vertical_moves_in_empty_column_are_noops() {
        let board = board(&[0]);
        let focus = at(0, FocusPosition::NO_CARD);
        assert_eq!(move_focus(&board, focus, Direction::Up), focus);
        assert_eq!(move_focus(&board, focus, Direction::Down), focus);
    }

    #[test]
    fn empty_board_leaves_focus_unchanged() {
        let board = Board::default();
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(move_focus(&board, at(0, 0), direction), at(0, 0));
        }
    }

    #[test]
    fn reset_returns_origin() {
        let board = board(&[2, 2, 2]);
        let (focus, ()) = FocusReducer::reduce(&board, at(2, 1), FocusIntent::Reset);
        assert_eq!(focus, FocusPosition::origin());
    }

    #[test]
    fn reducer_delegates_moves() {
        let board = board(&[2, 2]);
        let (focus, ()) =
            FocusReducer::reduce(&board, at(0, 1), FocusIntent::Move(Direction::Right));
        assert_eq!(focus, at(1, 1));
    }
}
