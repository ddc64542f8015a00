//! Storage error types for schoolmap-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An underlying SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),
}
