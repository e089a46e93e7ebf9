//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("corrupt stored document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error("word already exists: {0}")]
    DuplicateWord(String),
}
