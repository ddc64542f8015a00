//! School domain types.
//!
//! The persisted id is deliberately absent here: identity is a storage
//! concern, so the id newtype lives in schoolmap-storage.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A validated registration payload, ready to persist.
///
/// Handlers construct this only after field validation, so a `NewSchool`
/// always carries non-empty text and an in-range position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    /// School name, non-empty.
    pub name: String,
    /// Street address, non-empty.
    pub address: String,
    /// Validated coordinates.
    pub position: GeoPoint,
}
