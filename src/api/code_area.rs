use crate::util::coord::Coordinate;
use geo_types::{Point, Rect, coord};
use serde::Serialize;

/// The bounding rectangle a full code decodes to.
///
/// Bounds are in decimal degrees, south/west inclusive and north/east
/// exclusive. Produced only by decoding; never mutated afterwards.
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC9G8F+6X")?;
/// assert!(area.south < area.north);
/// assert!(area.contains(area.center_latitude(), area.center_longitude()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    /// Inclusive southern latitude bound in degrees.
    pub south: f64,
    /// Inclusive western longitude bound in degrees.
    pub west: f64,
    /// Exclusive northern latitude bound in degrees.
    pub north: f64,
    /// Exclusive eastern longitude bound in degrees.
    pub east: f64,
    /// Number of digits in the code this area was decoded from.
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(south: f64, west: f64, north: f64, east: f64, code_length: usize) -> Self {
        Self {
            south,
            west,
            north,
            east,
            code_length,
        }
    }

    /// Latitude of the center in degrees.
    pub fn center_latitude(&self) -> f64 {
        (self.south + self.north) / 2.0
    }

    /// Longitude of the center in degrees.
    pub fn center_longitude(&self) -> f64 {
        (self.west + self.east) / 2.0
    }

    /// Center point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.center_longitude(), self.center_latitude())
    }

    /// Height of the cell in degrees of latitude.
    pub fn latitude_height(&self) -> f64 {
        self.north - self.south
    }

    /// Width of the cell in degrees of longitude.
    pub fn longitude_width(&self) -> f64 {
        self.east - self.west
    }

    /// The bounds as a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Half-open membership test: `south <= lat < north`, `west <= lng < east`.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.south <= latitude
            && latitude < self.north
            && self.west <= longitude
            && longitude < self.east
    }

    /// `contains` for anything implementing [`Coordinate`].
    pub fn contains_point(&self, coord: &impl Coordinate) -> bool {
        self.contains(coord.y(), coord.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    fn area() -> CodeArea {
        CodeArea::new(20.35, 2.75, 20.4, 2.8, 6)
    }

    #[test]
    fn test_center() {
        let area = area();
        assert!((area.center_latitude() - 20.375).abs() < 1e-12);
        assert!((area.center_longitude() - 2.775).abs() < 1e-12);
        assert_eq!(area.center(), Point::new(2.775, 20.375));
    }

    #[test]
    fn test_dimensions() {
        let area = area();
        assert!((area.latitude_height() - 0.05).abs() < 1e-12);
        assert!((area.longitude_width() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_contains_is_half_open() {
        let area = area();
        assert!(area.contains(20.35, 2.75));
        assert!(area.contains(20.399999, 2.799999));
        assert!(!area.contains(20.4, 2.775));
        assert!(!area.contains(20.375, 2.8));
        assert!(!area.contains(20.3, 2.775));
    }

    #[test]
    fn test_contains_point() {
        let area = area();
        assert!(area.contains_point(&point! { x: 2.775, y: 20.375 }));
        assert!(!area.contains_point(&(2.9, 20.375)));
    }

    #[test]
    fn test_to_rect() {
        let rect = area().to_rect();
        assert_eq!(rect.min().x, 2.75);
        assert_eq!(rect.min().y, 20.35);
        assert_eq!(rect.max().x, 2.8);
        assert_eq!(rect.max().y, 20.4);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&area()).unwrap();
        assert!(json.contains("\"south\":20.35"));
        assert!(json.contains("\"code_length\":6"));
    }
}
