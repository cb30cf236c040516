use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::drag::DragOriginPolicy;
use crate::ui::input::{KeyBindings, MoveModifier};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub drag: DragConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

/// Keyboard settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Modifier that turns arrows into "move card": "ctrl", "super" or "either".
    #[serde(default)]
    pub move_modifier: MoveModifier,
    /// Bind modifier + Up/Down to moving a card within its column.
    #[serde(default)]
    pub vertical_reorder: bool,
}

impl InputConfig {
    pub fn bindings(&self) -> KeyBindings {
        KeyBindings {
            move_modifier: self.move_modifier,
            vertical_reorder: self.vertical_reorder,
        }
    }
}

/// Pointer drag settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragConfig {
    /// "focus" (origin is the focused cell) or "card" (the card's location).
    #[serde(default)]
    pub origin: DragOriginPolicy,
}

/// Board the host binary opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// TOML or JSON board file. The built-in sample board is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
