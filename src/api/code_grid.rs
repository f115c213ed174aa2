use crate::api::code::Code;
use crate::api::code_area::CodeArea;
use crate::api::geocode::{decode_code, encode};
use crate::core::codec::{
    lat_degrees_to_units, lat_units_to_degrees, lng_degrees_to_units, lng_units_to_degrees,
};
use crate::core::constants::{MIN_CODE_LENGTH, PAIR_CODE_LENGTH};
use crate::core::precision::{lat_place_value, lng_place_value};
use crate::util::error::OlcError;
use geo_types::{Point, Rect};

/// The set of code cells tiling a latitude/longitude extent at one code
/// length.
///
/// # Example
///
/// ```
/// use olc_rs::CodeGrid;
/// use geo_types::point;
///
/// let grid = CodeGrid::builder()
///     .code_length(8)
///     .extent(47.36, 8.52, 47.37, 8.54)
///     .build();
///
/// let pt = point! { x: 8.53, y: 47.365 };
/// if let Some(code) = grid.get_cell_at(&pt) {
///     println!("{}", code);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CodeGrid {
    cells: Vec<Code>,
    code_length: usize,
}

impl CodeGrid {
    pub fn builder() -> CodeGridBuilder {
        CodeGridBuilder::new()
    }

    /// Grid covering `south..north` by `west..east` degrees.
    pub fn from_extent(south: f64, west: f64, north: f64, east: f64, code_length: usize) -> Self {
        let cells = generate_cells_for_extent(south, west, north, east, code_length);
        Self { cells, code_length }
    }

    /// Grid covering a rect (x = longitude, y = latitude).
    pub fn from_rect(rect: &Rect<f64>, code_length: usize) -> Self {
        Self::from_extent(
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x,
            code_length,
        )
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Code] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.cells.iter()
    }

    /// The cell containing a point, if the point falls inside the extent.
    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&Code> {
        let target = encode(point.y(), point.x(), self.code_length).ok()?;
        self.cells.iter().find(|cell| **cell == target)
    }

    /// Decodes every cell back to its bounding rectangle.
    pub fn areas(&self) -> Result<Vec<CodeArea>, OlcError> {
        self.cells.iter().map(decode_code).collect()
    }

    /// The cells as plain `geo_types` rectangles.
    pub fn to_rects(&self) -> Result<Vec<Rect<f64>>, OlcError> {
        Ok(self.areas()?.iter().map(CodeArea::to_rect).collect())
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Code>
    where
        F: Fn(&Code) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct CodeGridBuilder {
    code_length: Option<usize>,
    south: Option<f64>,
    west: Option<f64>,
    north: Option<f64>,
    east: Option<f64>,
}

impl CodeGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = Some(code_length);
        self
    }

    pub fn extent(mut self, south: f64, west: f64, north: f64, east: f64) -> Self {
        self.south = Some(south);
        self.west = Some(west);
        self.north = Some(north);
        self.east = Some(east);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.south = Some(rect.min().y);
        self.west = Some(rect.min().x);
        self.north = Some(rect.max().y);
        self.east = Some(rect.max().x);
        self
    }

    pub fn build(self) -> CodeGrid {
        let code_length = self.code_length.expect("code_length must be set");
        let south = self.south.expect("extent must be set");
        let west = self.west.expect("extent must be set");
        let north = self.north.expect("extent must be set");
        let east = self.east.expect("extent must be set");

        CodeGrid::from_extent(south, west, north, east, code_length)
    }
}

/// Cells are stepped in fixed-point units so adjacent cells tile exactly,
/// then each center is encoded. Extents crossing the antimeridian are not
/// split; pass two grids for that.
fn generate_cells_for_extent(
    south: f64,
    west: f64,
    north: f64,
    east: f64,
    code_length: usize,
) -> Vec<Code> {
    if code_length < MIN_CODE_LENGTH
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Vec::new();
    }
    if south >= north || west >= east {
        return Vec::new();
    }

    let lat_step = lat_place_value(code_length);
    let lng_step = lng_place_value(code_length);

    let lat_start = (lat_degrees_to_units(south) / lat_step) * lat_step;
    let lng_start = (lng_degrees_to_units(west) / lng_step) * lng_step;
    let lat_end = lat_degrees_to_units(north);
    let lng_end = lng_degrees_to_units(east);

    let mut cells = Vec::new();

    let mut lat = lat_start;
    while lat < lat_end {
        let mut lng = lng_start;
        while lng < lng_end {
            // Halving after the unit conversion keeps the half-step exact
            // even when the step is a single unit.
            let center_lat = lat_units_to_degrees(2 * lat + lat_step) / 2.0 - 90.0;
            let center_lng = lng_units_to_degrees(2 * lng + lng_step) / 2.0 - 180.0;
            if let Ok(code) = encode(center_lat, center_lng, code_length) {
                cells.push(code);
            }
            lng += lng_step;
        }
        lat += lat_step;
    }

    cells
}
