//! The [`SchoolStore`] trait defining the storage contract for schools.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, ensuring
//! they are fully swappable without changing server logic.

use schoolmap_core::NewSchool;

use crate::error::StorageError;
use crate::types::{SchoolId, SchoolRecord};

/// The storage contract for school records.
///
/// The trait is synchronous (not async): a single shared connection
/// serializes query execution anyway, and the server guards the store
/// behind an async-aware lock.
pub trait SchoolStore {
    /// Appends a new school row.
    ///
    /// Returns the newly allocated [`SchoolId`]. The payload is assumed
    /// already validated (non-empty text, in-range coordinates).
    fn insert_school(&mut self, school: &NewSchool) -> Result<SchoolId, StorageError>;

    /// Fetches every stored school, ordered by id.
    fn fetch_all_schools(&self) -> Result<Vec<SchoolRecord>, StorageError>;
}
