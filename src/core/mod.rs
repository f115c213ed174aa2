pub mod codec;
pub mod constants;
pub mod precision;
pub mod validate;

pub use constants::{
    CODE_ALPHABET, ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, MIN_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR, SEPARATOR_POSITION,
};
pub use precision::{compute_latitude_precision, compute_longitude_precision};
pub use validate::CodeKind;
