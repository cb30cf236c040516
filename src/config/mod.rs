//! Configuration: key bindings, drag origin policy and the seed board path.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BoardConfig, Config, DragConfig, InputConfig};
