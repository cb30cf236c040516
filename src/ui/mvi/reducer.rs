//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;
use crate::board::Board;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Board, State, Intent) -> (State, Effect).
/// The board is a read-only snapshot; reducers never mutate it.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Output handed back to the caller next to the new state
    /// (for example a card move the owner has to apply).
    type Effect;

    /// Process an intent and return the new state plus its effect.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(
        board: &Board,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Self::Effect);
}
