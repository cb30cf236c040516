use std::fs;
use std::path::Path;

use super::error::BoardError;
use super::model::Board;

impl Board {
    /// Parses a TOML board snapshot and validates it.
    ///
    /// ```toml
    /// [[columns]]
    /// id = "todo"
    /// title = "Todo"
    ///
    /// [[columns.cards]]
    /// id = "KB-1"
    /// title = "First card"
    /// tags = ["ui"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, BoardError> {
        let board: Board = toml::from_str(content).map_err(|e| BoardError::Parse {
            message: e.to_string(),
        })?;
        board.validate()?;
        Ok(board)
    }

    pub fn from_json_str(content: &str) -> Result<Self, BoardError> {
        let board: Board = serde_json::from_str(content).map_err(|e| BoardError::Parse {
            message: e.to_string(),
        })?;
        board.validate()?;
        Ok(board)
    }

    /// Reads a board file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let content = fs::read_to_string(path).map_err(|e| BoardError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let board = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            columns = board.column_count(),
            "Loaded board"
        );
        Ok(board)
    }
}
