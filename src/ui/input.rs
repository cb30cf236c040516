use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::ui::focus::{Direction, FocusIntent, FocusPosition, FocusReducer};
use crate::ui::mvi::Reducer;
use crate::ui::reorder::{MoveOutcome, ReorderIntent, ReorderReducer};

/// Which modifier turns an arrow key into "move item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveModifier {
    Ctrl,
    /// Cmd on macOS terminals that report it.
    Super,
    #[default]
    Either,
}

impl MoveModifier {
    fn matches(self, modifiers: KeyModifiers) -> bool {
        match self {
            Self::Ctrl => modifiers.contains(KeyModifiers::CONTROL),
            Self::Super => modifiers.contains(KeyModifiers::SUPER),
            Self::Either => modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyBindings {
    pub move_modifier: MoveModifier,
    /// Also bind modifier + Up/Down to moving the card within its column.
    pub vertical_reorder: bool,
}

/// What a key press means for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Focus(FocusIntent),
    Reorder(ReorderIntent),
    /// Enter / Space. Reserved, does nothing yet.
    Activate,
}

/// Maps key presses onto the focus and reorder engines.
///
/// Only listens between [`attach`](Self::attach) and
/// [`detach`](Self::detach); the owner attaches it when the board becomes
/// active and detaches it on teardown. Both calls are idempotent.
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    bindings: KeyBindings,
    listening: bool,
}

impl InputDispatcher {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            listening: false,
        }
    }

    pub fn attach(&mut self) {
        if !self.listening {
            tracing::debug!("Input dispatcher attached");
            self.listening = true;
        }
    }

    pub fn detach(&mut self) {
        if self.listening {
            tracing::debug!("Input dispatcher detached");
            self.listening = false;
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn bindings(&self) -> KeyBindings {
        self.bindings
    }

    /// Key table. Returns `None` for keys the board does not handle.
    pub fn map_key(&self, key: KeyEvent) -> Option<KeyCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let with_modifier = self.bindings.move_modifier.matches(key.modifiers);
        let direction = match key.code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        };

        if let Some(direction) = direction {
            if !with_modifier {
                return Some(KeyCommand::Focus(FocusIntent::Move(direction)));
            }
            if direction.is_vertical() && !self.bindings.vertical_reorder {
                return None;
            }
            return Some(KeyCommand::Reorder(ReorderIntent::MoveItem(direction)));
        }

        match key.code {
            KeyCode::Esc => Some(KeyCommand::Focus(FocusIntent::Reset)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(KeyCommand::Activate),
            _ => None,
        }
    }

    /// Runs a key press through the engines.
    ///
    /// Returns `None` when detached, for unmapped keys, and for reserved
    /// keys. Otherwise returns the next focus and, for reorders, the move the
    /// owner has to apply before committing that focus.
    pub fn dispatch(
        &self,
        board: &Board,
        focus: FocusPosition,
        key: KeyEvent,
    ) -> Option<MoveOutcome> {
        if !self.listening {
            return None;
        }

        match self.map_key(key)? {
            KeyCommand::Focus(intent) => {
                let (focus, ()) = FocusReducer::reduce(board, focus, intent);
                Some(MoveOutcome::focus_only(focus))
            }
            KeyCommand::Reorder(intent) => {
                let (focus, card_move) = ReorderReducer::reduce(board, focus, intent);
                Some(MoveOutcome { focus, card_move })
            }
            KeyCommand::Activate => {
                tracing::debug!(?focus, "Activate key is reserved");
                None
            }
        }
    }
}

/// `q` or Ctrl+C. Handled by the host, not by the board.
pub fn is_quit_key(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (matches!(key.code, KeyCode::Char('q')) && key.modifiers.is_empty()
            || is_ctrl_char(key, 'c'))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
