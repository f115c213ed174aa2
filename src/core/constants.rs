/// The 20 digit characters, in ascending value order.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Number base of a single digit.
pub const ENCODING_BASE: i64 = 20;

/// Separates the leading digits from the trailing digits of a code.
pub const SEPARATOR: char = '+';

/// Digit offset of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Replaces trailing pair-stage digits in low-precision codes.
pub const PADDING_CHARACTER: char = '0';

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Maximum number of digits in a code.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Minimum code length accepted by encoding.
pub const MIN_CODE_LENGTH: usize = 4;

/// Number of refinement digits beyond the pair stage.
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Columns of the refinement grid (longitude).
pub const GRID_COLUMNS: i64 = 4;

/// Rows of the refinement grid (latitude).
pub const GRID_ROWS: i64 = 5;

/// Latitude domain bound in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Longitude domain bound in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Integer degree bounds used by the fixed-point codec.
pub(crate) const LAT_MAX_DEGREES: i64 = 90;
pub(crate) const LNG_MAX_DEGREES: i64 = 180;

/// Units per degree after the pair stage (20^3).
pub(crate) const PAIR_PRECISION: i64 = ENCODING_BASE.pow(3);

/// Units per degree of latitude at full 15-digit precision (25 000 000).
pub(crate) const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Units per degree of longitude at full 15-digit precision (8 192 000).
pub(crate) const FINAL_LNG_PRECISION: i64 =
    PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
