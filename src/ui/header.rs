use crate::board::Board;
use crate::ui::drag::DragState;
use crate::ui::focus::FocusPosition;
use crate::ui::theme::{ACCENT, DRAG_MARKER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        board: &Board,
        focus: FocusPosition,
        drag: &DragState,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let card_count: usize = board.columns.iter().map(|column| column.len()).sum();

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("■", Style::default().fg(ACCENT)),
            Span::styled("  ", text_style),
            Span::styled(format!("{} columns", board.column_count()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} cards", card_count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("focus {}:{}", focus.column_index, focus.card_index),
                text_style,
            ),
        ];
        if let Some(session) = drag.session() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("dragging {}", session.card_id),
                Style::default().fg(DRAG_MARKER),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
