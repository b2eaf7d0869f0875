//! Range checks for coordinates before they reach the codec.
//!
//! The codec and distance functions accept anything and return garbage for
//! out-of-range input. Command layers call these first.

use crate::constants::{GEO_LAT_MAX, GEO_LAT_MIN, GEO_LONG_MAX, GEO_LONG_MIN};
use crate::error::{GeoError, Result};
use crate::types::GeoPoint;

/// Validates a longitude/latitude pair.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geoscore::validation::validate_coordinate;
///
/// assert!(validate_coordinate(-74.0060, 40.7128).is_ok());
/// assert!(validate_coordinate(200.0, 40.0).is_err());
/// assert!(validate_coordinate(-74.0, 95.0).is_err());
/// ```
pub fn validate_coordinate(longitude: f64, latitude: f64) -> Result<()> {
    let result = check_coordinate(longitude, latitude);
    if let Err(e) = &result {
        log::warn!("Rejecting coordinate: {}", e);
    }
    result
}

fn check_coordinate(longitude: f64, latitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            longitude
        )));
    }

    if !latitude.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            latitude
        )));
    }

    if !(GEO_LONG_MIN..=GEO_LONG_MAX).contains(&longitude) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Longitude out of range [{}, {}]: {}",
            GEO_LONG_MIN, GEO_LONG_MAX, longitude
        )));
    }

    if !(GEO_LAT_MIN..=GEO_LAT_MAX).contains(&latitude) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Latitude out of range [{}, {}]: {}",
            GEO_LAT_MIN, GEO_LAT_MAX, latitude
        )));
    }

    Ok(())
}

pub fn validate_point(point: &GeoPoint) -> Result<()> {
    validate_coordinate(point.longitude, point.latitude)
}

/// Validates every point, reporting the index of the first bad one.
pub fn validate_points(points: &[GeoPoint]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point).map_err(|e| match e {
            GeoError::InvalidCoordinate(msg) => {
                GeoError::InvalidCoordinate(format!("Point at index {}: {}", idx, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// Validates a coordinate and encodes it.
///
/// ```
/// use geoscore::{encode, validation::encode_checked};
///
/// assert_eq!(encode_checked(2.3522, 48.8566).unwrap(), encode(2.3522, 48.8566));
/// assert!(encode_checked(f64::NAN, 0.0).is_err());
/// ```
pub fn encode_checked(longitude: f64, latitude: f64) -> Result<u64> {
    validate_coordinate(longitude, latitude)?;
    Ok(crate::codec::encode(longitude, latitude))
}
