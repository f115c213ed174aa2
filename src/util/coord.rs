use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::Point;

/// Anything that supplies an x (longitude) and y (latitude) in degrees.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

/// Clamps a latitude into the [-90, 90] degree domain. Never fails.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.min(LATITUDE_MAX).max(-LATITUDE_MAX)
}

/// Wraps a longitude into [-180, 180).
///
/// Wraps in whole ±360 steps rather than a single modulo so that multi-wrap
/// inputs (e.g. 900) land on exactly the same value every time.
pub fn normalize_longitude(mut longitude: f64) -> f64 {
    // An infinite value never exits the wrap loop.
    if !longitude.is_finite() {
        return longitude;
    }
    while longitude < -LONGITUDE_MAX {
        longitude += LONGITUDE_MAX * 2.0;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= LONGITUDE_MAX * 2.0;
    }
    longitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_latitude() {
        assert_eq!(clip_latitude(95.0), 90.0);
        assert_eq!(clip_latitude(-95.0), -90.0);
        assert_eq!(clip_latitude(51.5), 51.5);
        assert_eq!(clip_latitude(90.0), 90.0);
    }

    #[test]
    fn test_normalize_longitude_in_range() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(-179.9), -179.9);
        assert_eq!(normalize_longitude(-180.0), -180.0);
    }

    #[test]
    fn test_normalize_longitude_wraps() {
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(181.0), -179.0);
        assert_eq!(normalize_longitude(-181.0), 179.0);
    }

    #[test]
    fn test_normalize_longitude_multi_wrap() {
        // 900 steps down through 540 and 180 to -180
        assert_eq!(normalize_longitude(900.0), -180.0);
        assert_eq!(normalize_longitude(720.5), 0.5);
        assert_eq!(normalize_longitude(-720.5), -0.5);
    }

    #[test]
    fn test_normalize_longitude_non_finite_passthrough() {
        assert_eq!(normalize_longitude(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize_longitude(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(normalize_longitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (100.0, 20.0);
        assert_eq!(tuple.x(), 100.0);
        assert_eq!(tuple.y(), 20.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(100.0, 20.0);
        assert_eq!(Coordinate::x(&point), 100.0);
        assert_eq!(Coordinate::y(&point), 20.0);
    }
}
