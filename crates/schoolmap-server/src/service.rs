//! SchoolService: the single coordinator between HTTP handlers and the
//! storage layer.
//!
//! All business logic flows through [`SchoolService`]: registration
//! validation, query-coordinate validation, and the fetch -> annotate ->
//! sort listing pipeline. Handlers are thin wrappers that delegate to
//! these methods.

use std::sync::OnceLock;

use regex::Regex;

use schoolmap_core::{haversine_km, GeoPoint, NewSchool};
use schoolmap_storage::{InMemoryStore, SchoolId, SchoolStore, SqliteStore};

use crate::error::ApiError;
use crate::schema::schools::{AddSchoolRequest, SchoolView};

/// Signed-decimal coordinate pattern: optional leading `-`, digits,
/// optional fractional part. Anything else (including exponents and
/// whitespace) is rejected before parsing.
fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("pattern is valid"))
}

/// The central service coordinating registration and proximity listing.
///
/// Owns the storage backend behind the [`SchoolStore`] trait, injected at
/// construction so tests can swap in a double.
pub struct SchoolService {
    store: Box<dyn SchoolStore + Send>,
}

impl SchoolService {
    /// Creates a service backed by a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(SchoolService {
            store: Box::new(store),
        })
    }

    /// Creates a service backed by the in-memory store (for testing).
    pub fn in_memory() -> Self {
        SchoolService {
            store: Box::new(InMemoryStore::new()),
        }
    }

    /// Creates a service over an explicit storage backend.
    pub fn with_store(store: Box<dyn SchoolStore + Send>) -> Self {
        SchoolService { store }
    }

    /// Validates a registration request and inserts the school.
    ///
    /// Returns the storage-assigned id. Validation happens entirely before
    /// any store access.
    pub fn add_school(&mut self, req: AddSchoolRequest) -> Result<SchoolId, ApiError> {
        let school = validate_registration(req)?;
        let id = self.store.insert_school(&school)?;
        tracing::debug!(school_id = id.0, name = %school.name, "school registered");
        Ok(id)
    }

    /// Lists all schools sorted ascending by distance from the query point.
    ///
    /// `latitude`/`longitude` are the raw query-string values; they are
    /// validated (signed-decimal pattern, then range) before the store is
    /// touched. The sort is stable, so ties keep fetch (id) order.
    pub fn list_schools(
        &self,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Vec<SchoolView>, ApiError> {
        let origin = validate_query_point(latitude, longitude)?;

        let records = self.store.fetch_all_schools()?;
        let mut schools: Vec<SchoolView> = records
            .into_iter()
            .map(|record| {
                let distance = haversine_km(origin, record.position);
                SchoolView {
                    id: record.id.0,
                    name: record.name,
                    address: record.address,
                    latitude: record.position.latitude,
                    longitude: record.position.longitude,
                    distance,
                }
            })
            .collect();
        schools.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        Ok(schools)
    }
}

/// Validates registration fields and builds the payload to persist.
///
/// Coordinates must be JSON numbers (a quoted `"40"` fails) and, unlike
/// the listing path's two-stage taxonomy, range violations here surface as
/// `InvalidInput`: every persisted row must carry in-range coordinates.
fn validate_registration(req: AddSchoolRequest) -> Result<NewSchool, ApiError> {
    let name = non_empty_text(req.name, "name")?;
    let address = non_empty_text(req.address, "address")?;
    let latitude = numeric_field(req.latitude, "latitude")?;
    let longitude = numeric_field(req.longitude, "longitude")?;

    let position =
        GeoPoint::new(latitude, longitude).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    Ok(NewSchool {
        name,
        address,
        position,
    })
}

fn non_empty_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::InvalidInput(format!(
            "{field} must be a non-empty string"
        ))),
    }
}

fn numeric_field(value: Option<serde_json::Value>, field: &str) -> Result<f64, ApiError> {
    value
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| ApiError::InvalidInput(format!("{field} must be a number")))
}

/// Validates the listing query point: pattern check on both coordinates
/// first, then the range check.
fn validate_query_point(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<GeoPoint, ApiError> {
    let latitude = parse_coordinate(latitude, "latitude")?;
    let longitude = parse_coordinate(longitude, "longitude")?;

    GeoPoint::new(latitude, longitude).map_err(|e| ApiError::OutOfRange(e.to_string()))
}

fn parse_coordinate(raw: Option<&str>, field: &str) -> Result<f64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::InvalidLocation(format!("{field} is required")))?;
    if !coordinate_pattern().is_match(raw) {
        return Err(ApiError::InvalidLocation(format!(
            "{field} '{raw}' is not a valid coordinate"
        )));
    }
    raw.parse::<f64>()
        .map_err(|e| ApiError::InvalidLocation(format!("{field} '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(name: &str, address: &str, latitude: serde_json::Value) -> AddSchoolRequest {
        AddSchoolRequest {
            name: Some(name.to_string()),
            address: Some(address.to_string()),
            latitude: Some(latitude),
            longitude: Some(json!(10.0)),
        }
    }

    #[test]
    fn registration_rejects_empty_name() {
        let err = validate_registration(request("", "Main St 1", json!(40.0))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn registration_rejects_missing_address() {
        let mut req = request("School", "x", json!(40.0));
        req.address = None;
        assert!(matches!(
            validate_registration(req),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn registration_rejects_string_latitude() {
        let err = validate_registration(request("School", "Main St 1", json!("40"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn registration_rejects_out_of_range_latitude() {
        let err = validate_registration(request("School", "Main St 1", json!(95.0))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn registration_accepts_integer_coordinates() {
        let school = validate_registration(request("School", "Main St 1", json!(40))).unwrap();
        assert_eq!(school.position.latitude, 40.0);
    }

    #[test]
    fn query_point_rejects_non_numeric_text() {
        let err = validate_query_point(Some("abc"), Some("0")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLocation(_)));
    }

    #[test]
    fn query_point_rejects_exponent_notation() {
        let err = validate_query_point(Some("1e2"), Some("0")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLocation(_)));
    }

    #[test]
    fn query_point_rejects_missing_coordinate() {
        let err = validate_query_point(Some("0"), None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLocation(_)));
    }

    #[test]
    fn query_point_rejects_out_of_range() {
        let err = validate_query_point(Some("91"), Some("0")).unwrap_err();
        assert!(matches!(err, ApiError::OutOfRange(_)));
    }

    #[test]
    fn query_point_pattern_runs_before_range() {
        // Malformed latitude wins over out-of-range longitude.
        let err = validate_query_point(Some("abc"), Some("999")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLocation(_)));
    }

    #[test]
    fn query_point_accepts_signed_decimals() {
        let p = validate_query_point(Some("-33.87"), Some("151.21")).unwrap();
        assert_eq!(p.latitude, -33.87);
        assert_eq!(p.longitude, 151.21);
    }
}
