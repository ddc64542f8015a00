//! School registration and listing request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/schools/addSchool`.
///
/// Every field is optional at the serde layer so that missing or
/// wrongly-typed fields reach validation instead of a generic body
/// rejection. The coordinates stay as raw JSON values: a quoted `"40"`
/// must be rejected as invalid input, which a typed `f64` field could not
/// distinguish from other deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSchoolRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<serde_json::Value>,
    #[serde(default)]
    pub longitude: Option<serde_json::Value>,
}

/// Response from registering a school.
#[derive(Debug, Clone, Serialize)]
pub struct AddSchoolResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The storage-assigned identifier.
    #[serde(rename = "schoolId")]
    pub school_id: i64,
}

/// Query parameters for `GET /api/schools/listSchools`.
///
/// Coordinates arrive as raw strings; the service validates them against
/// the signed-decimal pattern before parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSchoolsQuery {
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// A school annotated with its distance from the query point.
///
/// Transient, response-only: the distance is computed fresh per listing
/// request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the query point, in kilometers.
    pub distance: f64,
}
