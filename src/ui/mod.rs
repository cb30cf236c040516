//! Board engines and the terminal host that drives them.
//!
//! `focus`, `reorder`, `drag` and `input` are the engine: pure reducers over
//! a read-only [`Board`](crate::board::Board). `app` owns a board and applies
//! what the engines emit; the remaining modules render it with ratatui.

pub mod app;
pub mod drag;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod listener;
pub mod mvi;
pub mod render;
pub mod reorder;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
