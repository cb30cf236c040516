//! Keyboard focus, card reordering and pointer-drag reconciliation for a
//! kanban board (columns of ordered cards).
//!
//! ```
//! use kanban_nav::board::{Board, Card, Column};
//! use kanban_nav::ui::focus::{move_focus, Direction, FocusPosition};
//! use kanban_nav::ui::reorder::move_item;
//!
//! let mut board = Board::new(vec![
//!     Column::new("todo", "Todo", vec![Card::new("a", "A"), Card::new("b", "B")]),
//!     Column::new("done", "Done", vec![]),
//! ]);
//!
//! let focus = move_focus(&board, FocusPosition::origin(), Direction::Down);
//! let outcome = move_item(&board, focus, Direction::Right);
//! board.apply_move(outcome.card_move.as_ref().unwrap()).unwrap();
//! assert_eq!(board.card_at(1, 0).unwrap().id.as_str(), "b");
//! assert_eq!(outcome.focus, FocusPosition::new(1, 0));
//! ```

pub mod board;
pub mod config;
pub mod logging;
pub mod ui;
