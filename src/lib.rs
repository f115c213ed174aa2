//! # olc-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `Code` - Single Plus Code Operations
//!
//! ```
//! use olc_rs::{encode, decode};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(47.365590, 8.524997, 10)?;
//! println!("{}", code);
//! let area = decode(code.as_str())?;
//! println!("center: ({}, {})", area.center_latitude(), area.center_longitude());
//! # Ok(())
//! # }
//! ```
//!
//! Short codes can be recovered against a nearby reference location:
//!
//! ```
//! use olc_rs::{shorten, recover};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let short = shorten("8FVC9G8F+6X", 47.5, 8.5)?;
//! let full = recover(short.as_str(), 47.5, 8.5)?;
//! assert_eq!(full.as_str(), "8FVC9G8F+6X");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CodeGrid` - Collections of Cells
//!
//! ```
//! use olc_rs::CodeGrid;
//! use geo_types::point;
//!
//! let grid = CodeGrid::builder()
//!     .code_length(8)
//!     .extent(47.36, 8.52, 47.37, 8.54)
//!     .build();
//!
//! let pt = point! { x: 8.525, y: 47.365 };
//! if let Some(code) = grid.get_cell_at(&pt) {
//!     println!("{}", code);
//! }
//! ```
//!
//! ### 3. `CsvToCode` - CSV File Conversion
//!
//! Convert CSV files with geometry columns (WKT or GeoJSON) to plus-coded CSVs:
//!
//! ```no_run
//! use olc_rs::{CsvToCode, CsvCodeConfig, GeometryFormat};
//!
//! let config = CsvCodeConfig::new("geometry", 10)
//!     .exclude(vec!["Geo Point".into()])
//!     .with_code_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "input.csv".to_code_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or use separate coordinate columns:
//!
//! ```no_run
//! use olc_rs::{CsvCodeConfig, csv_to_code_csv};
//!
//! let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 10);
//!
//! csv_to_code_csv("bus_stops.csv", "output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    Code, CodeArea, CodeGrid, CodeGridBuilder, CoordinateSource, CsvCodeConfig, CsvToCode,
    GeometryFormat, contains, csv_to_code_csv, decode, encode, is_full, is_padded, is_short,
    is_valid, recover, shorten,
};
pub use core::{
    CODE_ALPHABET, CodeKind, MAX_DIGIT_COUNT, MIN_CODE_LENGTH, PADDING_CHARACTER, SEPARATOR,
    SEPARATOR_POSITION, compute_latitude_precision, compute_longitude_precision,
};
pub use util::{Coordinate, OlcError, clip_latitude, normalize_longitude};

pub use geo_types;
