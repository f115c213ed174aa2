use crate::core::constants::{
    ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_COLUMNS, GRID_ROWS,
    MAX_DIGIT_COUNT, PAIR_CODE_LENGTH, PAIR_PRECISION,
};

/// Height in degrees of a cell with the given number of code digits.
///
/// Pair-stage lengths are expected to be even; lengths beyond the pair stage
/// refine by grid rows.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        (ENCODING_BASE as f64).powi(code_length as i32 / -2 + 2)
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Width in degrees of a cell with the given number of code digits.
pub fn compute_longitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        compute_latitude_precision(code_length)
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_COLUMNS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Cell height for a code length, in fixed-point latitude units.
pub(crate) fn lat_place_value(code_length: usize) -> i64 {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    if code_length <= PAIR_CODE_LENGTH {
        let pair_unit = FINAL_LAT_PRECISION / PAIR_PRECISION;
        pair_unit * ENCODING_BASE.pow(((PAIR_CODE_LENGTH - code_length) / 2) as u32)
    } else {
        FINAL_LAT_PRECISION / PAIR_PRECISION / GRID_ROWS.pow((code_length - PAIR_CODE_LENGTH) as u32)
    }
}

/// Cell width for a code length, in fixed-point longitude units.
pub(crate) fn lng_place_value(code_length: usize) -> i64 {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    if code_length <= PAIR_CODE_LENGTH {
        let pair_unit = FINAL_LNG_PRECISION / PAIR_PRECISION;
        pair_unit * ENCODING_BASE.pow(((PAIR_CODE_LENGTH - code_length) / 2) as u32)
    } else {
        FINAL_LNG_PRECISION / PAIR_PRECISION
            / GRID_COLUMNS.pow((code_length - PAIR_CODE_LENGTH) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_stage_precision() {
        assert_eq!(compute_latitude_precision(2), 20.0);
        assert_eq!(compute_latitude_precision(4), 1.0);
        assert_eq!(compute_latitude_precision(6), 0.05);
        assert_eq!(compute_latitude_precision(8), 0.0025);
        assert_eq!(compute_latitude_precision(10), 0.000125);
    }

    #[test]
    fn test_grid_stage_precision() {
        assert_eq!(compute_latitude_precision(11), 0.000125 / 5.0);
        assert_eq!(compute_longitude_precision(11), 0.000125 / 4.0);
        assert_eq!(compute_latitude_precision(15), 1.0 / 25_000_000.0);
        assert_eq!(compute_longitude_precision(15), 1.0 / 8_192_000.0);
    }

    #[test]
    fn test_place_values_match_degree_precision() {
        for len in [2usize, 4, 6, 8, 10, 11, 12, 13, 14, 15] {
            let lat_deg = lat_place_value(len) as f64 / FINAL_LAT_PRECISION as f64;
            let lng_deg = lng_place_value(len) as f64 / FINAL_LNG_PRECISION as f64;
            assert!((lat_deg - compute_latitude_precision(len)).abs() < 1e-12);
            assert!((lng_deg - compute_longitude_precision(len)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_place_values_are_exact_at_the_limits() {
        assert_eq!(lat_place_value(15), 1);
        assert_eq!(lng_place_value(15), 1);
        assert_eq!(lat_place_value(10), 3125);
        assert_eq!(lng_place_value(10), 1024);
        assert_eq!(lat_place_value(2), 3125 * 160_000);
        assert_eq!(lng_place_value(2), 1024 * 160_000);
    }
}
