//! Application state with shared `SchoolService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use
//! with axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without
//! blocking the tokio runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but the
//! SQLite backend contains `rusqlite::Connection` which is `!Sync`,
//! preventing it from being held behind an `RwLock`. The single shared
//! connection serializes actual query execution either way.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::SchoolService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared school service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<SchoolService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `SchoolService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = SchoolService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` backed by the in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(SchoolService::in_memory())),
        }
    }
}
