use crate::ui::listener::BoardEvent;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, last_event: Option<&BoardEvent>) -> Paragraph<'static> {
        let hints = match last_event {
            Some(event) => format!(" {}", describe(event)),
            None => " ←↑↓→: Focus │ Ctrl+←/→: Move card │ Esc: First card │ Drag: Mouse │ q: Quit"
                .to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn describe(event: &BoardEvent) -> String {
    match event {
        BoardEvent::CardMove(card_move) => format!(
            "Moved {} from {}:{} to {}:{}",
            card_move.card_id,
            card_move.from_column_index,
            card_move.from_card_index,
            card_move.to_column_index,
            card_move.to_card_index
        ),
        BoardEvent::CardClick(card) => format!("Clicked {} \"{}\"", card.id, card.title),
        BoardEvent::ColumnAdd => "Add column".to_string(),
        BoardEvent::CardAdd(column_index) => format!("Add card to column {}", column_index),
    }
}
