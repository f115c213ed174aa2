use crate::api::code::Code;
use crate::api::geocode::{decode_code, encode};
use crate::util::error::OlcError;
use geo::Centroid;
use geo_types::Geometry;
use geojson::GeoJson;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for code cell geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry (WGS84)
    GeometryColumn(String),
    /// Separate longitude and latitude coordinate columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for CSV to plus-code conversion.
#[derive(Debug, Clone)]
pub struct CsvCodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub include_code_geometry: Option<GeometryFormat>,
}

impl CsvCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::new("geometry", 10);
    /// ```
    pub fn new(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_length,
            include_code_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 10);
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            code_length,
            include_code_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the code's cell rectangle in the output.
    pub fn with_code_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_code_geometry = Some(format);
        self
    }
}

pub trait CsvToCode {
    fn to_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), OlcError>;
}

impl<P: AsRef<Path>> CsvToCode for P {
    fn to_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), OlcError> {
        csv_to_code_csv(self, output_path, config)
    }
}

fn parse_err(detail: impl std::fmt::Display) -> OlcError {
    OlcError::GeometryParseError(detail.to_string())
}

/// Parses a geometry cell value, WGS84 assumed. A leading brace means
/// GeoJSON; anything else is treated as WKT.
fn parse_geometry(s: &str) -> Result<Geometry<f64>, OlcError> {
    let trimmed = s.trim();
    if !trimmed.starts_with('{') {
        return Wkt::<f64>::from_str(trimmed)
            .map_err(parse_err)?
            .try_into()
            .map_err(|_| parse_err("unsupported WKT geometry"));
    }

    let geometry = match trimmed.parse::<GeoJson>().map_err(parse_err)? {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat.geometry.ok_or_else(|| parse_err("Feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(parse_err(
                "FeatureCollection not supported, use individual geometries",
            ));
        }
    };
    Geometry::try_from(geometry).map_err(parse_err)
}

fn cell_geometry(code: &Code, format: GeometryFormat) -> Result<String, OlcError> {
    let polygon = decode_code(code)?.to_rect().to_polygon();
    Ok(match format {
        GeometryFormat::Wkt => {
            use wkt::ToWkt;
            polygon.wkt_string()
        }
        GeometryFormat::GeoJson => geojson::Geometry::from(&polygon).to_string(),
    })
}

fn geometry_to_codes(
    geom: Geometry<f64>,
    code_length: usize,
) -> Result<Vec<Code>, OlcError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![Code::from_point(&pt, code_length)?]),
        Geometry::MultiPoint(mp) => {
            let mut codes = Vec::new();
            for pt in mp.0 {
                codes.push(Code::from_point(&pt, code_length)?);
            }
            Ok(codes)
        }
        Geometry::LineString(line) => Code::from_line_string(&line, code_length),
        Geometry::MultiLineString(mls) => {
            let mut seen = HashSet::new();
            let mut all_codes = Vec::new();
            for line in mls.0 {
                for code in Code::from_line_string(&line, code_length)? {
                    if seen.insert(code.as_str().to_string()) {
                        all_codes.push(code);
                    }
                }
            }
            Ok(all_codes)
        }
        Geometry::Polygon(poly) => match poly.centroid() {
            Some(centroid) => Ok(vec![Code::from_point(&centroid, code_length)?]),
            None => Ok(vec![]),
        },
        Geometry::MultiPolygon(mp) => {
            let mut codes = Vec::new();
            for poly in mp.0 {
                if let Some(centroid) = poly.centroid() {
                    codes.push(Code::from_point(&centroid, code_length)?);
                }
            }
            Ok(codes)
        }
        Geometry::GeometryCollection(gc) => {
            let mut all_codes = Vec::new();
            for g in gc.0 {
                all_codes.extend(geometry_to_codes(g, code_length)?);
            }
            Ok(all_codes)
        }
        _ => Err(OlcError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry or coordinate columns to a CSV file with
/// plus codes.
///
/// Streams output to minimize memory usage for large files.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use olc_rs::{csv_to_code_csv, CsvCodeConfig, GeometryFormat};
///
/// let config = CsvCodeConfig::new("Geo Shape", 10)
///     .exclude(vec!["Geo Point".into()])
///     .with_code_geometry(GeometryFormat::Wkt);
///
/// csv_to_code_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use olc_rs::{csv_to_code_csv, CsvCodeConfig};
///
/// let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 10);
///
/// csv_to_code_csv("bus_stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvCodeConfig,
) -> Result<(), OlcError> {
    let file = File::open(csv_path).map_err(|e| OlcError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| OlcError::CsvError(e.to_string()))?
        .clone();

    // Determine which columns to exclude based on source type
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = headers.iter().position(|h| h == col).ok_or_else(|| {
                OlcError::CsvError(format!("Geometry column '{}' not found", col))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Geometry(idx), exclude)
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = headers.iter().position(|h| h == lon_column).ok_or_else(|| {
                OlcError::CsvError(format!("Longitude column '{}' not found", lon_column))
            })?;
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                OlcError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lon_idx);
            exclude.insert(lat_idx);
            (SourceIndices::Coordinates { lon_idx, lat_idx }, exclude)
        }
    };

    // Add user-specified exclusions
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| OlcError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    // Write header row
    let mut header_row: Vec<&str> = vec!["plus_code"];
    if config.include_code_geometry.is_some() {
        header_row.push("code_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    // Process rows
    for result in reader.records() {
        let record = result.map_err(|e| OlcError::CsvError(e.to_string()))?;

        let codes = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    OlcError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                geometry_to_codes(geom, config.code_length)?
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon_str = record
                    .get(*lon_idx)
                    .ok_or_else(|| {
                        OlcError::CsvError(format!("Missing longitude column at index {}", lon_idx))
                    })?
                    .trim();
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        OlcError::CsvError(format!("Missing latitude column at index {}", lat_idx))
                    })?
                    .trim();

                let lon: f64 = lon_str.parse().map_err(|_| {
                    OlcError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;
                let lat: f64 = lat_str.parse().map_err(|_| {
                    OlcError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;

                vec![encode(lat, lon, config.code_length)?]
            }
        };

        for code in codes {
            let mut row: Vec<String> = vec![code.as_str().to_string()];

            if let Some(format) = config.include_code_geometry {
                row.push(cell_geometry(&code, format)?);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| OlcError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_geojson_point() -> Result<(), OlcError> {
        let json = r#"{"type":"Point","coordinates":[-0.1,51.5]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-0.1)).abs() < 0.001);
                assert!((pt.y() - 51.5).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), OlcError> {
        let wkt = "POINT(-0.1 51.5)";
        let geom = parse_geometry(wkt)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-0.1)).abs() < 0.001);
                assert!((pt.y() - 51.5).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_linestring() -> Result<(), OlcError> {
        let wkt = "LINESTRING(-0.1 51.5, -0.2 51.6)";
        let geom = parse_geometry(wkt)?;
        match geom {
            Geometry::LineString(line) => {
                assert_eq!(line.0.len(), 2);
            }
            _ => panic!("Expected LineString"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geometry_unwraps_features() -> Result<(), OlcError> {
        let feature = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-0.1,51.5]}}"#;
        assert!(matches!(parse_geometry(feature)?, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        assert!(matches!(
            parse_geometry("NOT A GEOMETRY"),
            Err(OlcError::GeometryParseError(_))
        ));
        assert!(matches!(
            parse_geometry(r#"{"type":"FeatureCollection","features":[]}"#),
            Err(OlcError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_geometry_to_codes_point() -> Result<(), OlcError> {
        let geom = parse_geometry("POINT(2.7821875 20.3700625)")?;
        let codes = geometry_to_codes(geom, 10)?;
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].as_str(), "7FG49QCJ+2V");
        Ok(())
    }

    #[test]
    fn test_geometry_to_codes_linestring_dedupes(
    ) -> Result<(), OlcError> {
        let geom = parse_geometry("LINESTRING(8.5249 47.3655, 8.5261 47.3661)")?;
        let codes = geometry_to_codes(geom, 10)?;
        assert!(!codes.is_empty());
        let unique: HashSet<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(unique.len(), codes.len());
        Ok(())
    }

    #[test]
    fn test_csv_with_geometry_column() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "ASSET_ID,TYPE,geometry").map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(
            file,
            "CDT123,Pipe,\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[-0.1,51.5]}}\""
        )
        .map_err(|e| OlcError::IoError(e.to_string()))?;

        let config = CsvCodeConfig::new("geometry", 10);
        csv_to_code_csv(&csv_path, &output_path, &config)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| OlcError::IoError(e.to_string()))?;
        assert!(output.contains("plus_code"));
        assert!(output.contains("9C3XGW22+")); // London cell prefix
        Ok(())
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "StopCode,Name,Longitude,Latitude")
            .map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "ABC123,Temple Meads,-2.58302,51.44827")
            .map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "DEF456,Castle Park,-2.59298,51.45503")
            .map_err(|e| OlcError::IoError(e.to_string()))?;

        let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 10);
        csv_to_code_csv(&csv_path, &output_path, &config)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| OlcError::IoError(e.to_string()))?;
        assert!(output.contains("plus_code"));
        assert!(output.contains("StopCode"));
        assert!(output.contains("Name"));
        assert!(!output.contains(",Longitude,"));
        assert!(!output.contains(",Latitude"));
        Ok(())
    }

    #[test]
    fn test_csv_with_code_geometry() -> Result<(), OlcError> {
        let dir = tempdir().map_err(|e| OlcError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "ID,geometry").map_err(|e| OlcError::IoError(e.to_string()))?;
        writeln!(file, "1,\"POINT(2.775 20.375)\"")
            .map_err(|e| OlcError::IoError(e.to_string()))?;

        let config = CsvCodeConfig::new("geometry", 6).with_code_geometry(GeometryFormat::Wkt);
        csv_to_code_csv(&csv_path, &output_path, &config)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| OlcError::IoError(e.to_string()))?;
        assert!(output.contains("code_geometry"));
        assert!(output.contains("7FG49Q00+"));
        assert!(output.contains("POLYGON"));
        Ok(())
    }

    #[test]
    fn test_csv_invalid_coordinate_reports_row_value() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).unwrap();
        writeln!(file, "ID,Longitude,Latitude").unwrap();
        writeln!(file, "1,not-a-number,51.5").unwrap();

        let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 10);
        let result = csv_to_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(OlcError::CsvError(_))));
    }

    #[test]
    fn test_csv_missing_column() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).unwrap();
        writeln!(file, "ID,geometry").unwrap();

        let config = CsvCodeConfig::new("shape", 10);
        let result = csv_to_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(OlcError::CsvError(_))));
    }
}
