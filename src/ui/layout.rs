use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::board::Board;
use crate::ui::app::BoardHit;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// One equal-width rect per column, left to right.
pub fn column_rects(body: Rect, columns: usize) -> Vec<Rect> {
    if columns == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(body)
        .to_vec()
}

/// Resolves a terminal cell to a column and, if it is on one, a card.
///
/// Each column is a bordered block with one card per inner row.
pub fn hit_test(body: Rect, board: &Board, x: u16, y: u16) -> Option<BoardHit> {
    let rects = column_rects(body, board.column_count());
    let (column_index, rect) = rects
        .iter()
        .enumerate()
        .find(|(_, rect)| contains(rect, x, y))?;

    let inner_top = rect.y + 1;
    let inner_bottom = rect.y + rect.height.saturating_sub(1);
    let card_index = if y >= inner_top && y < inner_bottom {
        let row = usize::from(y - inner_top);
        board
            .column(column_index)
            .filter(|column| row < column.len())
            .map(|_| row)
    } else {
        None
    };

    Some(BoardHit {
        column_index,
        card_index,
    })
}

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
