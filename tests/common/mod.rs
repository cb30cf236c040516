//! Shared board fixtures.

#![allow(dead_code, unused_imports)]

use kanban_nav::board::{Board, Card, Column};
use kanban_nav::ui::focus::FocusPosition;
use std::path::PathBuf;
use tempfile::TempDir;

/// Board whose column `c` holds `lens[c]` cards with ids `c{c}-{i}`.
pub fn board_with(lens: &[usize]) -> Board {
    Board::new(
        lens.iter()
            .enumerate()
            .map(|(c, &len)| {
                let cards = (0..len)
                    .map(|i| Card::new(format!("c{c}-{i}"), format!("Card {c}/{i}")))
                    .collect();
                Column::new(format!("col{c}"), format!("Column {c}"), cards)
            })
            .collect(),
    )
}

/// Card ids of one column, in order.
pub fn ids(board: &Board, column_index: usize) -> Vec<String> {
    board.columns[column_index]
        .cards
        .iter()
        .map(|card| card.id.to_string())
        .collect()
}

pub fn at(column_index: usize, card_index: isize) -> FocusPosition {
    FocusPosition::new(column_index, card_index)
}

/// Shapes covering empty boards, empty columns and uneven lengths.
pub fn shapes() -> Vec<Vec<usize>> {
    vec![
        vec![],
        vec![0],
        vec![3],
        vec![3, 0],
        vec![1, 0],
        vec![0, 2, 0],
        vec![4, 1, 3],
        vec![2, 2, 2, 2],
    ]
}

/// Every focus a board can legitimately hold, sentinel included.
pub fn positions(board: &Board) -> Vec<FocusPosition> {
    let mut out = Vec::new();
    for (column_index, column) in board.columns.iter().enumerate() {
        if column.is_empty() {
            out.push(at(column_index, FocusPosition::NO_CARD));
        }
        for card_index in 0..column.len() {
            out.push(at(column_index, card_index as isize));
        }
    }
    if out.is_empty() {
        out.push(FocusPosition::origin());
    }
    out
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
