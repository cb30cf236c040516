use crossterm::event::KeyEvent;

use crate::board::{Board, CardId};
use crate::config::Config;
use crate::ui::drag::{DragIntent, DragOriginPolicy, DragReducer, DragState};
use crate::ui::focus::FocusPosition;
use crate::ui::input::InputDispatcher;
use crate::ui::listener::BoardListener;
use crate::ui::mvi::Reducer;
use crate::ui::reorder::{MoveDescriptor, MoveOutcome};

/// Generic MVI dispatch: takes current state, runs reducer, stores result,
/// evaluates to the reducer's effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) =
            <$reducer>::reduce(&$self.board, std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

/// A pointer position resolved against the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardHit {
    pub column_index: usize,
    /// `None` when the pointer is over the column but not over a card.
    pub card_index: Option<usize>,
}

/// Left button pressed on a card, not yet released.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PointerPress {
    card_id: CardId,
    hit: BoardHit,
}

/// Owner of a board: holds the board, the focus and the drag session,
/// applies every move the engines emit and notifies the listener.
pub struct App<L: BoardListener> {
    board: Board,
    focus: FocusPosition,
    /// Drag session (MVI pattern), independent of focus.
    drag: DragState,
    drag_origin: DragOriginPolicy,
    dispatcher: InputDispatcher,
    pointer: Option<PointerPress>,
    listener: L,
    should_quit: bool,
}

impl<L: BoardListener> App<L> {
    pub fn new(board: Board, config: &Config, listener: L) -> Self {
        Self {
            board,
            focus: FocusPosition::origin(),
            drag: DragState::default(),
            drag_origin: config.drag.origin,
            dispatcher: InputDispatcher::new(config.input.bindings()),
            pointer: None,
            listener,
            should_quit: false,
        }
    }

    /// Board became active: start listening for keys.
    pub fn mount(&mut self) {
        self.dispatcher.attach();
    }

    /// Board torn down: stop listening and drop any gesture in flight.
    pub fn unmount(&mut self) {
        self.dispatcher.detach();
        self.pointer = None;
        dispatch_mvi!(self, drag, DragReducer, DragIntent::Cancel);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focus(&self) -> FocusPosition {
        self.focus
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn is_listening(&self) -> bool {
        self.dispatcher.is_listening()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns `true` when the key changed focus or moved a card.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        let Some(outcome) = self.dispatcher.dispatch(&self.board, self.focus, key) else {
            return false;
        };
        self.commit(outcome);
        true
    }

    /// Applies the move first, then commits focus. A move the board rejects
    /// leaves focus where it was.
    fn commit(&mut self, outcome: MoveOutcome) {
        if let Some(card_move) = &outcome.card_move {
            if !self.apply(card_move) {
                return;
            }
        }
        self.focus = outcome.focus;
    }

    fn apply(&mut self, card_move: &MoveDescriptor) -> bool {
        match self.board.apply_move(card_move) {
            Ok(()) => {
                self.listener.on_card_move(card_move);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, ?card_move, "Rejected card move");
                false
            }
        }
    }

    /// Starts a drag of `card_id`. The origin follows the configured policy.
    pub fn begin_drag(&mut self, card_id: CardId) {
        let intent = DragIntent::Begin {
            card_id,
            focus: self.focus,
            origin: self.drag_origin,
        };
        dispatch_mvi!(self, drag, DragReducer, intent);
    }

    /// Drops the dragged card on a column. Returns the applied move.
    pub fn drop_on_column(&mut self, target_column_index: usize) -> Option<MoveDescriptor> {
        let card_move = dispatch_mvi!(
            self,
            drag,
            DragReducer,
            DragIntent::Drop {
                target_column_index
            }
        )?;
        let card_move = self.resolve_drop_origin(card_move)?;
        if !self.apply(&card_move) {
            return None;
        }
        self.focus = clamp_focus(&self.board, self.focus);
        Some(card_move)
    }

    /// Checks a drop against where the dragged card really is.
    ///
    /// A focus-derived origin can name the wrong column. When the card
    /// already sits in the target column the drop is discarded, since pointer
    /// drags never reorder within a column. Otherwise the descriptor's origin
    /// is replaced by the card's real location so the listener hears about
    /// the move that actually happens.
    fn resolve_drop_origin(&self, card_move: MoveDescriptor) -> Option<MoveDescriptor> {
        let Some((column_index, card_index)) = self.board.locate(&card_move.card_id) else {
            return Some(card_move);
        };
        if column_index == card_move.to_column_index {
            tracing::debug!(
                card_id = %card_move.card_id,
                column_index,
                "Dragged card already in target column, no move"
            );
            return None;
        }
        Some(MoveDescriptor {
            from_column_index: column_index,
            from_card_index: card_index,
            ..card_move
        })
    }

    pub fn cancel_drag(&mut self) {
        dispatch_mvi!(self, drag, DragReducer, DragIntent::Cancel);
    }

    /// Forwards a click on the card at `(column_index, card_index)`.
    pub fn click_card(&mut self, column_index: usize, card_index: usize) {
        if let Some(card) = self.board.card_at(column_index, card_index as isize) {
            self.listener.on_card_click(card);
        }
    }

    pub fn on_pointer_down(&mut self, hit: Option<BoardHit>) {
        self.pointer = hit.and_then(|hit| {
            let card_index = hit.card_index?;
            let card = self.board.card_at(hit.column_index, card_index as isize)?;
            Some(PointerPress {
                card_id: card.id.clone(),
                hit,
            })
        });
    }

    /// First motion with the button held turns a press into a drag.
    pub fn on_pointer_drag(&mut self) {
        if self.drag.is_dragging() {
            return;
        }
        if let Some(press) = &self.pointer {
            let card_id = press.card_id.clone();
            self.begin_drag(card_id);
        }
    }

    pub fn on_pointer_up(&mut self, hit: Option<BoardHit>) {
        let press = self.pointer.take();

        if self.drag.is_dragging() {
            match hit {
                Some(hit) => {
                    self.drop_on_column(hit.column_index);
                }
                None => self.cancel_drag(),
            }
            return;
        }

        if let (Some(press), Some(hit)) = (press, hit) {
            if press.hit == hit {
                if let Some(card_index) = hit.card_index {
                    self.click_card(hit.column_index, card_index);
                }
            }
        }
    }
}

/// Pulls a card index that fell off the end of its column back onto the
/// last card (or the no-card sentinel).
fn clamp_focus(board: &Board, focus: FocusPosition) -> FocusPosition {
    match board.column(focus.column_index) {
        Some(column) if focus.card_index >= column.len() as isize => {
            FocusPosition::new(focus.column_index, column.len() as isize - 1)
        }
        _ => focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Card, Column};
    use crate::ui::listener::{BoardEvent, RecordingListener};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn board() -> Board {
        Board::new(vec![
            Column::new(
                "todo",
                "Todo",
                vec![Card::new("a", "A"), Card::new("b", "B"), Card::new("c", "C")],
            ),
            Column::new("doing", "Doing", vec![Card::new("d", "D")]),
        ])
    }

    fn app() -> App<RecordingListener> {
        let mut app = App::new(board(), &Config::default(), RecordingListener::default());
        app.mount();
        app
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn unmounted_app_ignores_keys() {
        let mut app = App::new(board(), &Config::default(), RecordingListener::default());
        assert!(!app.on_key(press(KeyCode::Down, KeyModifiers::NONE)));
        assert_eq!(app.focus(), FocusPosition::origin());
    }

    #[test]
    fn keyboard_move_applies_and_notifies() {
        let mut app = app();
        app.on_key(press(KeyCode::Down, KeyModifiers::NONE));
        app.on_key(press(KeyCode::Down, KeyModifiers::NONE));
        assert!(app.on_key(press(KeyCode::Right, KeyModifiers::CONTROL)));

        assert_eq!(app.focus(), FocusPosition::new(1, 1));
        assert_eq!(app.board().card_at(1, 1).map(|c| c.id.as_str()), Some("c"));
        assert_eq!(app.listener().moves().count(), 1);
    }

    #[test]
    fn drop_clamps_focus_left_past_the_end() {
        let mut app = app();
        app.on_key(press(KeyCode::Down, KeyModifiers::NONE));
        app.on_key(press(KeyCode::Down, KeyModifiers::NONE));
        app.begin_drag(CardId::from("c"));
        let card_move = app.drop_on_column(1).unwrap();

        assert_eq!(card_move.to_card_index, 1);
        assert_eq!(app.focus(), FocusPosition::new(0, 1));
        assert!(!app.drag().is_dragging());
    }

    #[test]
    fn click_without_motion_forwards_card() {
        let mut app = app();
        let hit = BoardHit {
            column_index: 1,
            card_index: Some(0),
        };
        app.on_pointer_down(Some(hit));
        app.on_pointer_up(Some(hit));

        assert!(matches!(
            app.listener().last(),
            Some(BoardEvent::CardClick(card)) if card.id.as_str() == "d"
        ));
        assert_eq!(app.focus(), FocusPosition::origin());
    }

    #[test]
    fn pointer_drag_release_outside_board_cancels() {
        let mut app = app();
        app.on_pointer_down(Some(BoardHit {
            column_index: 0,
            card_index: Some(0),
        }));
        app.on_pointer_drag();
        assert!(app.drag().is_dragging());

        app.on_pointer_up(None);
        assert!(!app.drag().is_dragging());
        assert_eq!(app.board(), &board());
        assert!(app.listener().events().is_empty());
    }

    #[test]
    fn unmount_discards_drag() {
        let mut app = app();
        app.begin_drag(CardId::from("a"));
        app.unmount();
        assert!(!app.drag().is_dragging());
        assert!(!app.is_listening());
    }
}
