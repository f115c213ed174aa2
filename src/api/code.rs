use crate::api::geocode::encode;
use crate::core::constants::{PADDING_CHARACTER, SEPARATOR};
use crate::core::precision::{compute_latitude_precision, compute_longitude_precision};
use crate::core::validate::{CodeKind, classify};
use crate::util::coord::Coordinate;
use crate::util::error::OlcError;
use geo_types::LineString;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A validated plus code.
///
/// Construction always runs the grammar scan, so every `Code` in existence is
/// exactly one of full or short. The string is held upper-cased; a `Code` is
/// immutable after construction.
///
/// # Example
///
/// ```
/// use olc_rs::{Code, CodeKind};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = Code::new("8FVC9G8F+6X")?;
/// assert_eq!(code.kind(), CodeKind::Full);
/// assert_eq!(code.separator_position(), 8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Code {
    value: String,
    #[serde(skip)]
    kind: CodeKind,
    #[serde(skip)]
    separator: usize,
}

impl Code {
    /// Validates a caller-supplied string into a `Code`, upper-casing it.
    pub fn new(code: &str) -> Result<Self, OlcError> {
        let value = code.to_ascii_uppercase();
        let (kind, separator) = classify(&value)?;
        Ok(Self {
            value,
            kind,
            separator,
        })
    }

    /// Encodes a point into a full code.
    ///
    /// Follows the geo convention: x is longitude, y is latitude.
    ///
    /// # Example
    /// ```
    /// use olc_rs::Code;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// let code = Code::from_point(&Point::new(8.524997, 47.365590), 10)?;
    /// assert!(code.is_full());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate, code_length: usize) -> Result<Self, OlcError> {
        encode(coord.y(), coord.x(), code_length)
    }

    /// Codes covering a line, sampled at half the smaller cell dimension and
    /// deduplicated.
    pub fn from_line_string(line: &LineString<f64>, code_length: usize) -> Result<Vec<Self>, OlcError> {
        let lat_step = compute_latitude_precision(code_length);
        let lng_step = compute_longitude_precision(code_length);
        let step_size = lat_step.min(lng_step) * 0.5;

        let mut seen: HashSet<String> = HashSet::new();
        let mut codes: Vec<Code> = Vec::new();

        for window in line.0.windows(2) {
            let start = &window[0];
            let end = &window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let steps = (segment_length / step_size).ceil() as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                let lng = start.x + t * dx;
                let lat = start.y + t * dy;

                let code = encode(lat, lng, code_length)?;
                if seen.insert(code.value.clone()) {
                    codes.push(code);
                }
            }
        }

        Ok(codes)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Full or short.
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Whether the separator sits at offset 8.
    pub fn is_full(&self) -> bool {
        self.kind == CodeKind::Full
    }

    /// Whether the separator sits before offset 8.
    pub fn is_short(&self) -> bool {
        self.kind == CodeKind::Short
    }

    /// Whether the code carries padding before the separator.
    pub fn is_padded(&self) -> bool {
        self.value.contains(PADDING_CHARACTER)
    }

    /// Offset of the separator character.
    pub fn separator_position(&self) -> usize {
        self.separator
    }

    /// Number of meaningful digits (separator and padding excluded).
    pub fn digit_count(&self) -> usize {
        self.value
            .chars()
            .filter(|c| *c != SEPARATOR && *c != PADDING_CHARACTER)
            .count()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Code {
    type Err = OlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::new(s)
    }
}
