mod common;

use common::{at, board_with, ids, positions, shapes};
use kanban_nav::board::CardId;
use kanban_nav::ui::focus::{move_focus, Direction};
use kanban_nav::ui::reorder::{move_item, MoveDescriptor, MoveOutcome};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[test]
fn single_card_moves_right_keeping_its_index() {
    // Column 0 holds c0-0, column 1 holds two cards.
    let board = board_with(&[1, 2]);
    let outcome = move_item(&board, at(0, 0), Direction::Right);

    assert_eq!(
        outcome.card_move,
        Some(MoveDescriptor {
            card_id: CardId::from("c0-0"),
            from_column_index: 0,
            to_column_index: 1,
            from_card_index: 0,
            to_card_index: 0,
        })
    );
    assert_eq!(outcome.focus, at(1, 0));
}

#[test]
fn cross_column_target_is_min_of_index_and_length() {
    for shape in shapes() {
        let board = board_with(&shape);
        for focus in positions(&board) {
            for direction in [Direction::Left, Direction::Right] {
                let Some(card_move) = move_item(&board, focus, direction).card_move else {
                    continue;
                };
                let target_len = board.columns[card_move.to_column_index].len();
                assert_eq!(
                    card_move.to_card_index,
                    card_move.from_card_index.min(target_len)
                );
                assert!(card_move.to_card_index <= target_len);
            }
        }
    }
}

#[test]
fn card_is_found_at_returned_focus_after_apply() {
    for shape in shapes() {
        let base = board_with(&shape);
        for focus in positions(&base) {
            for direction in DIRECTIONS {
                let mut board = base.clone();
                let MoveOutcome { focus: next, card_move } = move_item(&board, focus, direction);
                let Some(card_move) = card_move else {
                    assert_eq!(next, focus);
                    continue;
                };
                board.apply_move(&card_move).unwrap();

                let found = board.card_at(next.column_index, next.card_index).unwrap();
                assert_eq!(found.id, card_move.card_id);

                // Step toward the origin and back: focus returns onto the card.
                let back = match direction {
                    Direction::Up => Direction::Down,
                    Direction::Down => Direction::Up,
                    Direction::Left => Direction::Right,
                    Direction::Right => Direction::Left,
                };
                let away = move_focus(&board, next, back);
                let returned = move_focus(&board, away, direction);
                if direction.is_vertical() {
                    assert_eq!(returned, next, "{shape:?} {focus:?} {direction:?}");
                    assert_eq!(
                        board.card_at(returned.column_index, returned.card_index).unwrap().id,
                        card_move.card_id
                    );
                } else {
                    assert_eq!(returned.column_index, next.column_index);
                }
            }
        }
    }
}

#[test]
fn vertical_move_swaps_neighbours() {
    let mut board = board_with(&[3]);
    let outcome = move_item(&board, at(0, 2), Direction::Up);
    board.apply_move(outcome.card_move.as_ref().unwrap()).unwrap();
    assert_eq!(ids(&board, 0), vec!["c0-0", "c0-2", "c0-1"]);
    assert_eq!(outcome.focus, at(0, 1));
}

#[test]
fn move_into_shorter_column_appends() {
    let mut board = board_with(&[4, 1]);
    let outcome = move_item(&board, at(0, 3), Direction::Right);
    board.apply_move(outcome.card_move.as_ref().unwrap()).unwrap();
    assert_eq!(ids(&board, 1), vec!["c1-0", "c0-3"]);
    assert_eq!(outcome.focus, at(1, 1));
}

#[test]
fn engine_does_not_touch_the_board() {
    let board = board_with(&[2, 2]);
    let before = board.clone();
    for focus in positions(&board) {
        for direction in DIRECTIONS {
            let _ = move_item(&board, focus, direction);
        }
    }
    assert_eq!(board, before);
}

#[test]
fn empty_column_focus_is_a_noop() {
    let board = board_with(&[0, 3]);
    for direction in DIRECTIONS {
        assert_eq!(
            move_item(&board, at(0, -1), direction),
            MoveOutcome::focus_only(at(0, -1))
        );
    }
}
