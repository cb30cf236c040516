//! Board model: columns of ordered cards.
//!
//! The board is owned by the application. Engines in [`crate::ui`] only read
//! it; the owner applies [`crate::ui::reorder::MoveDescriptor`] values through
//! [`Board::apply_move`].

mod error;
mod loader;
mod model;
mod ops;

pub use error::BoardError;
pub use model::{Board, Card, CardId, CardMeta, Column, ColumnId};
