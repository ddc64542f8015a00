//! Core error types for schoolmap-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the coordinate domain violations the core data model can detect.

use thiserror::Error;

/// Errors produced when constructing geographic values.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude outside the [-90, 90] degree domain.
    #[error("latitude {value} out of range [-90, 90]")]
    LatitudeOutOfRange { value: f64 },

    /// Longitude outside the [-180, 180] degree domain.
    #[error("longitude {value} out of range [-180, 180]")]
    LongitudeOutOfRange { value: f64 },
}
