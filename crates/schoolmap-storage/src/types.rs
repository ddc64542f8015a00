//! Storage-layer types for school identity and rows.
//!
//! [`SchoolId`] is defined here (not in schoolmap-core) because identity is
//! a storage concern -- a school only gains an id when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use schoolmap_core::GeoPoint;

/// Unique identifier for a persisted school.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolId(pub i64);

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchoolId({})", self.0)
    }
}

/// A persisted school row as returned by a bulk fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolRecord {
    /// Storage-assigned identifier.
    pub id: SchoolId,
    /// School name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Coordinates, validated on write.
    pub position: GeoPoint,
}
