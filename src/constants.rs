//! Fixed parameters shared by the codec and the distance engine.

/// Radius of the sphere used for every distance calculation, in meters.
///
/// This is the value geo-enabled key-value stores have standardised on, so
/// distances stay comparable with theirs. It is not the WGS84 ellipsoid.
pub const EARTH_RADIUS_M: f64 = 6372797.560856;

/// Bits of precision per axis in a standard geocode.
pub const GEO_STEP_MAX: u8 = 26;

/// Total significant bits in a standard geocode.
pub const GEO_BITS: u8 = GEO_STEP_MAX * 2;

pub const GEO_LAT_MIN: f64 = -90.0;
pub const GEO_LAT_MAX: f64 = 90.0;
pub const GEO_LONG_MIN: f64 = -180.0;
pub const GEO_LONG_MAX: f64 = 180.0;

/// Length of the base32 geohash rendered for a geocode.
pub const GEOHASH_STRING_LEN: usize = 11;

pub(crate) const M_PER_KM: f64 = 1000.0;
pub(crate) const M_PER_MI: f64 = 1609.34;
pub(crate) const M_PER_FT: f64 = 0.3048;
