use crate::core::constants::{
    CODE_ALPHABET, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_ROWS, LAT_MAX_DEGREES, LATITUDE_MAX, LNG_MAX_DEGREES, LONGITUDE_MAX,
    MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
use crate::util::error::OlcError;

/// Value of an alphabet byte, or `None` when the byte is not a digit.
pub(crate) fn digit_value(digit: u8) -> Option<i64> {
    CODE_ALPHABET.bytes().position(|b| b == digit).map(|i| i as i64)
}

/// Whether a character belongs to the digit alphabet.
pub(crate) fn is_alphabet_char(c: char) -> bool {
    c.is_ascii() && digit_value(c as u8).is_some()
}

/// Converts a degree value to positive fixed-point units.
///
/// Rounds at the micro-unit before truncating so binary-float noise in the
/// product cannot move a value across a digit boundary.
fn to_fixed_units(degrees: f64, max_degrees: i64, precision: i64) -> i64 {
    let units = (degrees + max_degrees as f64) * precision as f64;
    ((units * 1e6).round() / 1e6) as i64
}

/// Generates the code for a coordinate already clipped, normalized, and
/// nudged off the pole.
///
/// Digits are produced least-significant first from integer accumulators:
/// the grid stage divides latitude by 5 and longitude by 4 per digit, the
/// pair stage divides both by 20 per digit pair. Separator and padding
/// placement is decided here and nowhere else.
pub(crate) fn encode_digits(latitude: f64, longitude: f64, code_length: usize) -> String {
    let alphabet = CODE_ALPHABET.as_bytes();
    let mut lat_val = to_fixed_units(latitude, LAT_MAX_DEGREES, FINAL_LAT_PRECISION);
    let mut lng_val = to_fixed_units(longitude, LNG_MAX_DEGREES, FINAL_LNG_PRECISION);

    let mut reversed: Vec<char> = Vec::with_capacity(MAX_DIGIT_COUNT + 1);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let row = lat_val % GRID_ROWS;
            let col = lng_val % GRID_COLUMNS;
            reversed.push(alphabet[(row * GRID_COLUMNS + col) as usize] as char);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for _ in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(alphabet[(lng_val % ENCODING_BASE) as usize] as char);
        reversed.push(alphabet[(lat_val % ENCODING_BASE) as usize] as char);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }

    let mut code: Vec<char> = reversed.into_iter().rev().collect();
    code.truncate(code_length);

    if code_length >= SEPARATOR_POSITION {
        code.insert(SEPARATOR_POSITION, SEPARATOR);
    } else {
        while code.len() < SEPARATOR_POSITION {
            code.push(PADDING_CHARACTER);
        }
        code.push(SEPARATOR);
    }

    code.into_iter().collect()
}

/// Decodes a digits-only code body into fixed-point bounds.
///
/// Returns `(south, west, lat_place, lng_place)`: the south-west corner in
/// fixed-point units relative to the domain origin, plus the unit size of the
/// final digit on each axis. The caller adds the place values to obtain the
/// north-east corner.
pub(crate) fn decode_digits(digits: &str) -> Result<(i64, i64, i64, i64), OlcError> {
    let bytes = digits.as_bytes();
    let mut south = -LAT_MAX_DEGREES * FINAL_LAT_PRECISION;
    let mut west = -LNG_MAX_DEGREES * FINAL_LNG_PRECISION;

    // First pair digit is worth a full 20 degrees.
    let mut lat_place = FINAL_LAT_PRECISION * ENCODING_BASE;
    let mut lng_place = FINAL_LNG_PRECISION * ENCODING_BASE;

    let pair_digits = bytes.len().min(PAIR_CODE_LENGTH);
    let mut i = 0;
    while i < pair_digits {
        if i > 0 {
            lat_place /= ENCODING_BASE;
            lng_place /= ENCODING_BASE;
        }
        south += value_of(bytes[i])? * lat_place;
        west += value_of(bytes[i + 1])? * lng_place;
        i += 2;
    }

    for &b in bytes.iter().take(MAX_DIGIT_COUNT).skip(PAIR_CODE_LENGTH) {
        lat_place /= GRID_ROWS;
        lng_place /= GRID_COLUMNS;
        let digit = value_of(b)?;
        south += (digit / GRID_COLUMNS) * lat_place;
        west += (digit % GRID_COLUMNS) * lng_place;
    }

    Ok((south, west, lat_place, lng_place))
}

fn value_of(digit: u8) -> Result<i64, OlcError> {
    digit_value(digit)
        .ok_or_else(|| OlcError::InvalidCode(format!("invalid digit '{}'", digit as char)))
}

/// Converts fixed-point latitude units back to degrees.
pub(crate) fn lat_units_to_degrees(units: i64) -> f64 {
    units as f64 / FINAL_LAT_PRECISION as f64
}

/// Converts fixed-point longitude units back to degrees.
pub(crate) fn lng_units_to_degrees(units: i64) -> f64 {
    units as f64 / FINAL_LNG_PRECISION as f64
}

/// Converts a latitude in degrees to fixed-point units from the south pole,
/// clamped to the encodable domain.
pub(crate) fn lat_degrees_to_units(latitude: f64) -> i64 {
    let max = 2 * LAT_MAX_DEGREES * FINAL_LAT_PRECISION;
    to_fixed_units(latitude.min(LATITUDE_MAX).max(-LATITUDE_MAX), LAT_MAX_DEGREES, FINAL_LAT_PRECISION)
        .min(max)
}

/// Converts a longitude in degrees to fixed-point units from the antimeridian.
pub(crate) fn lng_degrees_to_units(longitude: f64) -> i64 {
    let max = 2 * LNG_MAX_DEGREES * FINAL_LNG_PRECISION;
    to_fixed_units(longitude.min(LONGITUDE_MAX).max(-LONGITUDE_MAX), LNG_MAX_DEGREES, FINAL_LNG_PRECISION)
        .min(max)
}
