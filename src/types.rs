//! Point and cell types exchanged with callers.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
///
/// Field order follows the codec: longitude first. No range checking is done
/// on construction; see [`crate::validation`] for that.
///
/// # Examples
///
/// ```
/// use geoscore::GeoPoint;
///
/// let palermo = GeoPoint::new(13.361389, 38.115556);
/// assert_eq!(palermo.longitude, 13.361389);
/// assert_eq!(palermo.latitude, 38.115556);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns `(longitude, latitude)`.
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Interprets the tuple as `(longitude, latitude)`.
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        point.lon_lat()
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

/// The quantization cell a geocode decodes into.
///
/// Every coordinate inside the cell encodes to the same code; decoding yields
/// [`GeoCell::center`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCell {
    /// South-west corner.
    pub min: GeoPoint,
    /// North-east corner.
    pub max: GeoPoint,
}

impl GeoCell {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min.longitude + self.max.longitude) / 2.0,
            (self.min.latitude + self.max.latitude) / 2.0,
        )
    }

    /// Width of the cell in degrees of longitude.
    pub fn width_deg(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }

    /// Height of the cell in degrees of latitude.
    pub fn height_deg(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    /// Inclusive on every edge, so a point on a shared border belongs to both
    /// neighbouring cells.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min.longitude..=self.max.longitude).contains(&point.longitude)
            && (self.min.latitude..=self.max.latitude).contains(&point.latitude)
    }

    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.min.longitude, y: self.min.latitude },
            geo::coord! { x: self.max.longitude, y: self.max.latitude },
        )
    }
}
