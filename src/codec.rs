//! Geocode codec: longitude/latitude to and from interleaved integer codes.
//!
//! Each axis is quantized into `step` bits over its full range, latitude over
//! [-90, 90] and longitude over [-180, 180]. The two integers are then
//! interleaved, latitude in the even bit positions and longitude in the odd
//! ones, so the most significant bit of a code is the top longitude bit.
//! Nearby points share long code prefixes, which makes the code usable as a
//! sortable score.
//!
//! The standard code uses [`GEO_STEP_MAX`] bits per axis (52 in total).
//!
//! ```
//! use geoscore::{decode, encode};
//!
//! let code = encode(13.361389, 38.115556);
//! let (lon, lat) = decode(code);
//! assert!((lon - 13.361389).abs() < 1e-5);
//! assert!((lat - 38.115556).abs() < 1e-5);
//! ```

use crate::constants::{GEO_LAT_MAX, GEO_LAT_MIN, GEO_LONG_MAX, GEO_LONG_MIN, GEO_STEP_MAX};
use crate::error::{GeoError, Result};
use crate::types::{GeoCell, GeoPoint};

/// Largest per-axis step accepted by the `*_with_step` functions.
pub const MAX_STEP: u8 = 32;

/// Encodes a coordinate into a 52-bit geocode.
///
/// Inputs outside the valid ranges are not rejected; they produce a code
/// with no geographic meaning.
pub fn encode(longitude: f64, latitude: f64) -> u64 {
    encode_step(longitude, latitude, GEO_STEP_MAX)
}

/// Decodes a 52-bit geocode into the `(longitude, latitude)` centre of its cell.
///
/// Bits above bit 51 are ignored.
pub fn decode(code: u64) -> (f64, f64) {
    cell_step(code, GEO_STEP_MAX).center().lon_lat()
}

pub fn encode_point(point: &GeoPoint) -> u64 {
    encode(point.longitude, point.latitude)
}

pub fn decode_point(code: u64) -> GeoPoint {
    GeoPoint::from(decode(code))
}

/// Returns the quantization cell of a 52-bit geocode.
///
/// ```
/// use geoscore::{GeoPoint, cell, encode};
///
/// let point = GeoPoint::new(-0.1276, 51.5072);
/// let cell = cell(encode(point.longitude, point.latitude));
/// assert!(cell.contains(&point));
/// ```
pub fn cell(code: u64) -> GeoCell {
    cell_step(code, GEO_STEP_MAX)
}

/// Encodes with `step` bits per axis, producing a `2 * step` bit code.
///
/// # Errors
///
/// [`GeoError::InvalidStep`] if `step` is outside `1..=32`.
pub fn encode_with_step(longitude: f64, latitude: f64, step: u8) -> Result<u64> {
    check_step(step)?;
    Ok(encode_step(longitude, latitude, step))
}

/// Decodes a `2 * step` bit code into the centre of its cell.
///
/// # Errors
///
/// [`GeoError::InvalidStep`] if `step` is outside `1..=32`.
pub fn decode_with_step(code: u64, step: u8) -> Result<(f64, f64)> {
    Ok(cell_with_step(code, step)?.center().lon_lat())
}

/// Returns the cell of a `2 * step` bit code.
///
/// # Errors
///
/// [`GeoError::InvalidStep`] if `step` is outside `1..=32`.
pub fn cell_with_step(code: u64, step: u8) -> Result<GeoCell> {
    check_step(step)?;
    Ok(cell_step(code, step))
}

/// Renders a 52-bit geocode as an 11 character base32 geohash.
///
/// The code is decoded first and the cell centre re-encoded in the standard
/// geohash alphabet, which is what the `GEOHASH` command of a geo-enabled
/// store returns.
///
/// ```
/// use geoscore::{encode, geohash_string};
///
/// let hash = geohash_string(encode(13.361389, 38.115556)).unwrap();
/// assert!(hash.starts_with("sqc8b49r"));
/// ```
///
/// # Errors
///
/// [`GeoError::Geohash`] if the decoded coordinate is outside the geohash
/// domain, which only happens for codes built from out-of-range input.
#[cfg(feature = "geohash")]
pub fn geohash_string(code: u64) -> Result<String> {
    use crate::constants::GEOHASH_STRING_LEN;

    let (longitude, latitude) = decode(code);
    geohash::encode(
        geohash::Coord {
            x: longitude,
            y: latitude,
        },
        GEOHASH_STRING_LEN,
    )
    .map_err(|e| GeoError::Geohash(e.to_string()))
}

fn check_step(step: u8) -> Result<()> {
    if step == 0 || step > MAX_STEP {
        return Err(GeoError::InvalidStep(step));
    }
    Ok(())
}

fn encode_step(longitude: f64, latitude: f64, step: u8) -> u64 {
    let lat_bits = quantize(latitude, GEO_LAT_MIN, GEO_LAT_MAX, step);
    let lon_bits = quantize(longitude, GEO_LONG_MIN, GEO_LONG_MAX, step);
    interleave(lat_bits, lon_bits, step)
}

fn cell_step(code: u64, step: u8) -> GeoCell {
    let (lat_bits, lon_bits) = deinterleave(code, step);
    let (lat_min, lat_max) = dequantize(lat_bits, GEO_LAT_MIN, GEO_LAT_MAX, step);
    let (lon_min, lon_max) = dequantize(lon_bits, GEO_LONG_MIN, GEO_LONG_MAX, step);

    GeoCell {
        min: GeoPoint::new(lon_min, lat_min),
        max: GeoPoint::new(lon_max, lat_max),
    }
}

/// Maps `value` onto `0..2^step`. The upper edge of the range is folded into
/// the last bucket; NaN and values below the range land in bucket 0.
fn quantize(value: f64, min: f64, max: f64, step: u8) -> u64 {
    let buckets = (1u64 << step) as f64;
    let offset = (value - min) / (max - min);
    let last = (1u64 << step) - 1;
    ((offset * buckets) as u64).min(last)
}

/// Returns the `[min, max]` degree range covered by bucket `bits`.
fn dequantize(bits: u64, min: f64, max: f64, step: u8) -> (f64, f64) {
    let buckets = (1u64 << step) as f64;
    let scale = max - min;
    let low = min + (bits as f64 / buckets) * scale;
    let high = min + ((bits + 1) as f64 / buckets) * scale;
    (low, high)
}

fn interleave(lat_bits: u64, lon_bits: u64, step: u8) -> u64 {
    let mut code = 0u64;
    for i in 0..u32::from(step) {
        code |= ((lat_bits >> i) & 1) << (2 * i);
        code |= ((lon_bits >> i) & 1) << (2 * i + 1);
    }
    code
}

fn deinterleave(code: u64, step: u8) -> (u64, u64) {
    let mut lat_bits = 0u64;
    let mut lon_bits = 0u64;
    for i in 0..u32::from(step) {
        lat_bits |= ((code >> (2 * i)) & 1) << i;
        lon_bits |= ((code >> (2 * i + 1)) & 1) << i;
    }
    (lat_bits, lon_bits)
}
