//! Pointer drag feature module.
//!
//! Bridges a drag gesture's start and its drop. The session is a transient
//! value kept apart from focus; the two only meet when a drop produces a
//! [`MoveDescriptor`](crate::ui::reorder::MoveDescriptor).
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session and Idle/Dragging state
//! - `intent.rs` - Begin, Drop, Cancel
//! - `reducer.rs` - Session lifecycle and drop reconciliation

mod intent;
mod reducer;
mod state;

pub use intent::DragIntent;
pub use reducer::{begin_drag, begin_drag_at_card, complete_drag, DragReducer};
pub use state::{DragOriginPolicy, DragSession, DragState};
