//! Great-circle distance on a sphere of radius [`EARTH_RADIUS_M`].
//!
//! All functions take degrees and return meters. Argument order differs
//! between the entry points because callers arrive with different shapes of
//! data: [`distance`] takes latitude first, the haversine helpers and the
//! rectangle filter take longitude first like the codec does.

use crate::constants::EARTH_RADIUS_M;
use crate::types::GeoPoint;
use crate::units::DistanceUnit;

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    180.0 * radians / std::f64::consts::PI
}

/// Haversine of an angle in radians: `sin²(θ / 2)`.
#[inline]
fn hav(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}

/// `2R·asin(√h)` with the argument clamped to the `asin` domain.
///
/// Rounding can push `h` marginally above 1 for near-antipodal points.
#[inline]
fn central_distance(h: f64) -> f64 {
    2.0 * EARTH_RADIUS_M * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Distance in meters between two points given as `(lat, lon)` pairs.
///
/// # Examples
///
/// ```
/// use geoscore::distance;
///
/// // Palermo to Catania
/// let d = distance(38.115556, 13.361389, 37.502669, 15.087269);
/// assert!((d - 166_274.26).abs() < 0.01);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let la1 = deg_to_rad(lat1);
    let lo1 = deg_to_rad(lon1);
    let la2 = deg_to_rad(lat2);
    let lo2 = deg_to_rad(lon2);

    let h = hav(la2 - la1) + la1.cos() * la2.cos() * hav(lo2 - lo1);
    central_distance(h)
}

/// Distance between two points on the same meridian.
///
/// With no longitude term the haversine reduces to `2R·asin(|sin(Δφ/2)|)`.
/// Latitudes keep `|Δφ/2|` within `[0, π/2]`, where `asin(sin(x)) = x`, so
/// this is exact rather than an approximation.
#[inline]
pub fn latitude_distance(lat1: f64, lat2: f64) -> f64 {
    EARTH_RADIUS_M * (deg_to_rad(lat2) - deg_to_rad(lat1)).abs()
}

/// Haversine distance taking `(lon, lat)` pairs, with the same-meridian
/// shortcut applied when the longitude term vanishes.
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lon1r = deg_to_rad(lon1);
    let lon2r = deg_to_rad(lon2);
    let v = ((lon2r - lon1r) / 2.0).sin();
    if v == 0.0 {
        return latitude_distance(lat1, lat2);
    }

    let lat1r = deg_to_rad(lat1);
    let lat2r = deg_to_rad(lat2);
    let u = ((lat2r - lat1r) / 2.0).sin();
    let a = u * u + lat1r.cos() * lat2r.cos() * v * v;
    central_distance(a)
}

/// Which test of the rectangle filter settled the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RectangleCheck {
    OutsideLatitude,
    OutsideLongitude,
    Inside(f64),
}

pub(crate) fn check_rectangle(
    width_m: f64,
    height_m: f64,
    center_lon: f64,
    center_lat: f64,
    point_lon: f64,
    point_lat: f64,
) -> RectangleCheck {
    // Latitude distance needs no trigonometry, so it goes first.
    if latitude_distance(point_lat, center_lat) > height_m / 2.0 {
        return RectangleCheck::OutsideLatitude;
    }

    // Measured along the point's own parallel.
    if haversine_distance(point_lon, point_lat, center_lon, point_lat) > width_m / 2.0 {
        return RectangleCheck::OutsideLongitude;
    }

    RectangleCheck::Inside(haversine_distance(
        center_lon, center_lat, point_lon, point_lat,
    ))
}

/// Tests whether a point lies in a `width_m` × `height_m` box centred on
/// `(center_lon, center_lat)`, and returns its distance from the centre if so.
///
/// A point is in the box when its north-south distance from the centre is at
/// most `height_m / 2` and its east-west distance, measured along the point's
/// own parallel, is at most `width_m / 2`. Rejected points return `(0.0,
/// false)` without computing the full distance.
///
/// # Examples
///
/// ```
/// use geoscore::distance_if_in_rectangle;
///
/// let (d, inside) = distance_if_in_rectangle(200_000.0, 200_000.0, 0.0, 0.0, 0.0, 0.1);
/// assert!(inside);
/// assert!((d - 11_122.63).abs() < 0.01);
///
/// let (d, inside) = distance_if_in_rectangle(200_000.0, 200_000.0, 0.0, 0.0, 0.0, 5.0);
/// assert!(!inside);
/// assert_eq!(d, 0.0);
/// ```
pub fn distance_if_in_rectangle(
    width_m: f64,
    height_m: f64,
    center_lon: f64,
    center_lat: f64,
    point_lon: f64,
    point_lat: f64,
) -> (f64, bool) {
    match check_rectangle(
        width_m, height_m, center_lon, center_lat, point_lon, point_lat,
    ) {
        RectangleCheck::Inside(meters) => (meters, true),
        rejected => {
            log::trace!(
                "({}, {}) rejected from box at ({}, {}): {:?}",
                point_lon,
                point_lat,
                center_lon,
                center_lat,
                rejected
            );
            (0.0, false)
        }
    }
}

/// Distance in meters between two points.
pub fn distance_between(a: &GeoPoint, b: &GeoPoint) -> f64 {
    haversine_distance(a.longitude, a.latitude, b.longitude, b.latitude)
}

/// Distance between two points expressed in `unit`.
pub fn distance_in(a: &GeoPoint, b: &GeoPoint, unit: DistanceUnit) -> f64 {
    unit.from_meters(distance_between(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: f64 = 200_000.0;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_degree_conversions() {
        assert_close(deg_to_rad(180.0), std::f64::consts::PI, 1e-15);
        assert_close(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0, 1e-12);
        assert_close(rad_to_deg(deg_to_rad(-37.25)), -37.25, 1e-12);
    }

    #[test]
    fn test_one_degree_at_equator() {
        let expected = EARTH_RADIUS_M * deg_to_rad(1.0);
        assert_close(distance(0.0, 0.0, 0.0, 1.0), expected, 1e-6);
        assert_close(distance(0.0, 0.0, 0.0, 1.0), 111_226.3, 0.01);
        assert_close(haversine_distance(0.0, 0.0, 1.0, 0.0), expected, 1e-6);
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(distance(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
        assert_eq!(haversine_distance(-74.0060, 40.7128, -74.0060, 40.7128), 0.0);
        assert_eq!(distance(-90.0, 0.0, -90.0, 0.0), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ((40.7128, -74.0060), (34.0522, -118.2437)),
            ((51.5072, -0.1276), (-33.8688, 151.2093)),
            ((0.0, 179.5), (0.0, -179.5)),
        ];

        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ab = distance(lat1, lon1, lat2, lon2);
            let ba = distance(lat2, lon2, lat1, lon1);
            assert_close(ab, ba, 1e-6);

            let ab = haversine_distance(lon1, lat1, lon2, lat2);
            let ba = haversine_distance(lon2, lat2, lon1, lat1);
            assert_close(ab, ba, 1e-6);
        }
    }

    #[test]
    fn test_antimeridian_is_short_way_round() {
        let d = distance(0.0, 179.5, 0.0, -179.5);
        assert_close(d, EARTH_RADIUS_M * deg_to_rad(1.0), 1e-6);
    }

    #[test]
    fn test_antipodal_points_are_clamped() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;

        let d = distance(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert_close(d, half_circumference, 1e-3);

        let d = haversine_distance(-73.9857, 40.7484, 106.0143, -40.7484);
        assert!(d.is_finite());
        assert_close(d, half_circumference, 1.0);

        // sqrt(h) just above 1 must not produce NaN.
        assert_close(central_distance(1.0 + 1e-15), half_circumference, 1e-6);
    }

    #[test]
    fn test_latitude_shortcut_matches_full_formula() {
        let cases = [(0.0, 10.0), (-45.0, 45.0), (12.5, 12.6), (-89.0, 89.0)];

        for (lat1, lat2) in cases {
            let shortcut = latitude_distance(lat1, lat2);
            let full = distance(lat1, 7.0, lat2, 7.0);
            assert!(
                ((shortcut - full) / full).abs() <= 1e-6,
                "{lat1} -> {lat2}: {shortcut} vs {full}"
            );
            assert_eq!(haversine_distance(7.0, lat1, 7.0, lat2), shortcut);
        }
    }

    #[test]
    fn test_monotonic_in_delta() {
        let mut previous = 0.0;
        for step in 1..=90 {
            let d = distance(10.0, 20.0, 10.0, 20.0 + step as f64);
            assert!(d >= previous);
            previous = d;
        }

        let mut previous = 0.0;
        for step in 1..=70 {
            let d = distance(10.0, 20.0, 10.0 + step as f64, 20.0);
            assert!(d >= previous);
            previous = d;
        }
    }

    #[test]
    fn test_rectangle_inside() {
        let (d, inside) = distance_if_in_rectangle(BOX, BOX, 0.0, 0.0, 0.0, 0.1);
        assert!(inside);
        assert_close(d, latitude_distance(0.0, 0.1), 1e-6);
    }

    #[test]
    fn test_rectangle_latitude_short_circuit() {
        assert_eq!(
            check_rectangle(BOX, BOX, 0.0, 0.0, 0.0, 5.0),
            RectangleCheck::OutsideLatitude
        );
        // Also rejected on latitude even though the longitude would be far out too.
        assert_eq!(
            check_rectangle(BOX, BOX, 0.0, 0.0, 50.0, 5.0),
            RectangleCheck::OutsideLatitude
        );
        assert_eq!(
            distance_if_in_rectangle(BOX, BOX, 0.0, 0.0, 0.0, 5.0),
            (0.0, false)
        );
    }

    #[test]
    fn test_rectangle_longitude_rejection() {
        assert_eq!(
            check_rectangle(BOX, BOX, 0.0, 0.0, 1.0, 0.0),
            RectangleCheck::OutsideLongitude
        );
        assert_eq!(
            distance_if_in_rectangle(BOX, BOX, 0.0, 0.0, 1.0, 0.0),
            (0.0, false)
        );
    }

    #[test]
    fn test_rectangle_width_uses_point_parallel() {
        // 1.3 degrees of longitude is ~144 km at the equator but ~72 km at 60N.
        let width = 160_000.0;
        let height = 20_000_000.0;

        let (_, at_equator) = distance_if_in_rectangle(width, height, 0.0, 0.0, 1.3, 0.0);
        assert!(!at_equator);

        let (d, at_sixty) = distance_if_in_rectangle(width, height, 0.0, 0.0, 1.3, 60.0);
        assert!(at_sixty);
        assert_close(d, haversine_distance(0.0, 0.0, 1.3, 60.0), 1e-6);
    }

    #[test]
    fn test_rectangle_corner_is_inside() {
        let (d, inside) = distance_if_in_rectangle(BOX, BOX, 0.0, 0.0, 0.5, 0.5);
        assert!(inside);
        assert!(d > latitude_distance(0.0, 0.5));
    }

    #[test]
    fn test_point_helpers() {
        let nyc = GeoPoint::new(-74.0060, 40.7128);
        let la = GeoPoint::new(-118.2437, 34.0522);

        let meters = distance_between(&nyc, &la);
        assert!(meters > 3_900_000.0 && meters < 4_000_000.0);
        assert_close(meters, distance(40.7128, -74.0060, 34.0522, -118.2437), 1e-6);
        assert_close(distance_in(&nyc, &la, DistanceUnit::Kilometers), meters / 1000.0, 1e-9);
    }

    #[test]
    fn test_close_to_geo_haversine() {
        use geo::{Distance, Haversine};

        // geo uses the IUGG mean radius, about 1.8 km shorter than ours.
        let a = geo::Point::new(2.3522, 48.8566);
        let b = geo::Point::new(-3.7038, 40.4168);
        let ours = distance_between(&a.into(), &b.into());
        let theirs = Haversine.distance(a, b);
        assert!(ours > theirs);
        assert!((ours - theirs) / theirs < 1e-3);
    }
}
