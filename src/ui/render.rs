use crate::board::{Card, Column};
use crate::ui::app::App;
use crate::ui::drag::DragState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{column_rects, layout_regions};
use crate::ui::listener::StatusListener;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DRAG_MARKER, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App<StatusListener>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.board(), app.focus(), app.drag()),
        header,
    );
    frame.render_widget(Clear, body);

    let focus = app.focus();
    let rects = column_rects(body, app.board().column_count());
    for (column_index, (column, rect)) in app.board().columns.iter().zip(rects).enumerate() {
        let focused_card = (focus.column_index == column_index).then_some(focus.card_index);
        render_column(frame, column, rect, focused_card, app.drag());
    }

    frame.render_widget(
        Footer::new().widget(footer, app.listener().last()),
        footer,
    );
}

/// `focused_card` is `Some` for the focused column. Exactly one card on the
/// board is highlighted; when focus holds the no-card sentinel the column
/// title is highlighted instead.
fn render_column(
    frame: &mut Frame<'_>,
    column: &Column,
    area: Rect,
    focused_card: Option<isize>,
    drag: &DragState,
) {
    let border_color = if focused_card.is_some() {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    let mut title_style = Style::default().fg(HEADER_TEXT);
    if focused_card.is_some_and(|index| index < 0 || column.is_empty()) {
        title_style = title_style.fg(ACCENT).add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ({}) ", column.title, column.len()),
            title_style,
        ));

    let lines: Vec<Line> = column
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let focused = focused_card == Some(index as isize);
            let dragged = drag
                .session()
                .is_some_and(|session| session.card_id == card.id);
            card_line(card, focused, dragged)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn card_line(card: &Card, focused: bool, dragged: bool) -> Line<'static> {
    let mut style = Style::default().fg(HEADER_TEXT);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }

    let mut spans = Vec::new();
    if dragged {
        spans.push(Span::styled("⇢ ", Style::default().fg(DRAG_MARKER)));
    }
    spans.push(Span::styled(format!("{} {}", card.id, card.title), style));
    if let Some(assignee) = &card.meta.assignee {
        spans.push(Span::styled(
            format!(" @{}", assignee),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    if let Some(priority) = &card.meta.priority {
        spans.push(Span::styled(
            format!(" !{}", priority),
            Style::default().fg(ACCENT),
        ));
    }
    Line::from(spans)
}
