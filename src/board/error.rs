use std::path::PathBuf;
use thiserror::Error;

use super::model::CardId;

/// Errors raised by the owner-side board operations.
///
/// The navigation engines never produce these; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Card '{0}' not found on board")]
    UnknownCard(CardId),

    #[error("Column index {index} out of range (board has {len} columns)")]
    UnknownColumn { index: usize, len: usize },

    #[error("Card id '{0}' appears more than once")]
    DuplicateCardId(CardId),

    #[error("Failed to read board file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse board: {message}")]
    Parse { message: String },
}
