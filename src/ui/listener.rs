//! Observer interface for the board owner.

use crate::board::Card;
use crate::ui::reorder::MoveDescriptor;

/// Notifications the board emits to its owning application.
///
/// Every method has an empty default body. `on_column_add` and
/// `on_card_add` are never called by the engines; they are forwarded by the
/// presentation layer.
pub trait BoardListener {
    /// A card move was applied, keyboard or pointer alike.
    fn on_card_move(&mut self, _card_move: &MoveDescriptor) {}

    /// A card was clicked. Forwarded unchanged.
    fn on_card_click(&mut self, _card: &Card) {}

    fn on_column_add(&mut self) {}

    fn on_card_add(&mut self, _column_index: usize) {}
}

/// Listener that ignores everything.
#[derive(Debug, Default)]
pub struct NoopListener;

impl BoardListener for NoopListener {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    CardMove(MoveDescriptor),
    CardClick(Card),
    ColumnAdd,
    CardAdd(usize),
}

/// Listener that keeps every event it receives, newest last.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Vec<BoardEvent>,
}

impl RecordingListener {
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&BoardEvent> {
        self.events.last()
    }

    pub fn moves(&self) -> impl Iterator<Item = &MoveDescriptor> {
        self.events.iter().filter_map(|event| match event {
            BoardEvent::CardMove(card_move) => Some(card_move),
            _ => None,
        })
    }
}

impl BoardListener for RecordingListener {
    fn on_card_move(&mut self, card_move: &MoveDescriptor) {
        self.events.push(BoardEvent::CardMove(card_move.clone()));
    }

    fn on_card_click(&mut self, card: &Card) {
        self.events.push(BoardEvent::CardClick(card.clone()));
    }

    fn on_column_add(&mut self) {
        self.events.push(BoardEvent::ColumnAdd);
    }

    fn on_card_add(&mut self, column_index: usize) {
        self.events.push(BoardEvent::CardAdd(column_index));
    }
}

/// Listener that keeps only the most recent event, for status display.
#[derive(Debug, Default)]
pub struct StatusListener {
    last: Option<BoardEvent>,
}

impl StatusListener {
    pub fn last(&self) -> Option<&BoardEvent> {
        self.last.as_ref()
    }
}

impl BoardListener for StatusListener {
    fn on_card_move(&mut self, card_move: &MoveDescriptor) {
        self.last = Some(BoardEvent::CardMove(card_move.clone()));
    }

    fn on_card_click(&mut self, card: &Card) {
        self.last = Some(BoardEvent::CardClick(card.clone()));
    }

    fn on_column_add(&mut self) {
        self.last = Some(BoardEvent::ColumnAdd);
    }

    fn on_card_add(&mut self, column_index: usize) {
        self.last = Some(BoardEvent::CardAdd(column_index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_listener_keeps_only_latest_event() {
        let mut listener = StatusListener::default();
        assert_eq!(listener.last(), None);

        listener.on_card_click(&Card::new("a", "A"));
        listener.on_card_add(2);
        listener.on_column_add();

        assert_eq!(listener.last(), Some(&BoardEvent::ColumnAdd));
    }
}
