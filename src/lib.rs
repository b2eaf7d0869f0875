//! Geocodes and great-circle distance for geo-enabled key-value stores.
//!
//! Coordinates are packed into 52-bit interleaved integers that can be stored
//! as sorted-set scores, and unpacked again on lookup. Distances use the
//! haversine formula on a fixed-radius sphere, with a cheap latitude-first
//! filter for box queries.
//!
//! ```rust
//! use geoscore::{decode, distance, distance_if_in_rectangle, encode};
//!
//! let score = encode(13.361389, 38.115556);
//! let (lon, lat) = decode(score);
//!
//! let meters = distance(lat, lon, 37.502669, 15.087269);
//! assert!(meters > 166_000.0 && meters < 167_000.0);
//!
//! let (_, inside) = distance_if_in_rectangle(400_000.0, 400_000.0, lon, lat, 15.087269, 37.502669);
//! assert!(inside);
//! ```
//!
//! Every function is pure; nothing here needs locking.

pub mod codec;
pub mod constants;
pub mod distance;
pub mod error;
pub mod types;
pub mod units;
pub mod validation;

pub use codec::{
    cell, cell_with_step, decode, decode_point, decode_with_step, encode, encode_point,
    encode_with_step,
};
#[cfg(feature = "geohash")]
pub use codec::geohash_string;
pub use constants::{EARTH_RADIUS_M, GEO_BITS, GEO_STEP_MAX};
pub use distance::{
    deg_to_rad, distance, distance_between, distance_if_in_rectangle, distance_in,
    haversine_distance, latitude_distance, rad_to_deg,
};
pub use error::{GeoError, Result};
pub use types::{GeoCell, GeoPoint};
pub use units::DistanceUnit;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        DistanceUnit, GeoCell, GeoError, GeoPoint, Result, decode, distance,
        distance_if_in_rectangle, encode,
    };

    #[cfg(feature = "geohash")]
    pub use crate::geohash_string;
}
