//! Geographic primitives: validated coordinate pairs and great-circle
//! distance.
//!
//! [`GeoPoint`] is the only way coordinates enter the domain layer; its
//! constructor enforces the [-90, 90] / [-180, 180] degree domains, so
//! everything downstream (storage, distance ranking) can assume in-range
//! values. [`haversine_km`] is a pure function over two such points.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Construct via [`GeoPoint::new`] to get domain validation. The fields are
/// public for read access and for reconstructing points from trusted data
/// (rows that were validated on write).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, in [-90, 90].
    pub latitude: f64,
    /// Degrees east, in [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Validates and constructs a point.
    ///
    /// Rejects out-of-range and non-finite values (NaN fails both range
    /// checks).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange { value: longitude });
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula with the atan2 form, which stays numerically stable
/// for antipodal inputs. The intermediate term is clamped to [0, 1] so
/// floating-point rounding cannot push the square roots out of domain.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = point(48.8566, 2.3522);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.05, "got {d}");
    }

    #[test]
    fn antipodal_points_stay_finite() {
        // Half the Earth's circumference, no NaN from rounding past 1.0.
        let d = haversine_km(point(0.0, 0.0), point(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1.0);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(matches!(
            GeoPoint::new(90.01, 0.0),
            Err(GeoError::LatitudeOutOfRange { .. })
        ));
        assert!(matches!(
            GeoPoint::new(f64::NAN, 0.0),
            Err(GeoError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(matches!(
            GeoPoint::new(0.0, -180.5),
            Err(GeoError::LongitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let a = point(lat1, lon1);
            let b = point(lat2, lon2);
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }

        #[test]
        fn distance_is_never_negative(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let d = haversine_km(point(lat1, lon1), point(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d.is_finite());
        }
    }
}
