pub mod error;
pub mod geo;
pub mod school;

// Re-export commonly used types
pub use error::GeoError;
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use school::NewSchool;
