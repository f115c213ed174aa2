pub mod code;
pub mod code_area;
pub mod code_csv;
pub mod code_grid;
pub mod geocode;

pub use code::Code;
pub use code_area::CodeArea;
pub use code_csv::{CoordinateSource, CsvCodeConfig, CsvToCode, GeometryFormat, csv_to_code_csv};
pub use code_grid::{CodeGrid, CodeGridBuilder};
pub use geocode::{
    contains, decode, encode, is_full, is_padded, is_short, is_valid, recover, shorten,
};
