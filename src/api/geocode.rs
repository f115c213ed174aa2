use crate::api::code::Code;
use crate::api::code_area::CodeArea;
use crate::core::codec::{decode_digits, encode_digits, lat_units_to_degrees, lng_units_to_degrees};
use crate::core::constants::{
    LATITUDE_MAX, MAX_DIGIT_COUNT, MIN_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR, SEPARATOR_POSITION,
};
use crate::core::precision::compute_latitude_precision;
use crate::util::coord::{clip_latitude, normalize_longitude};
use crate::util::error::OlcError;

/// Encodes a coordinate into a code of the requested digit count.
///
/// Latitude is clamped to [-90, 90] and longitude wrapped into [-180, 180)
/// first; a latitude of exactly 90 is nudged just inside the top cell so the
/// result always decodes. Lengths above 15 are clamped to 15.
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = encode(20.3700625, 2.7821875, 10)?;
/// assert_eq!(code.as_str(), "7FG49QCJ+2V");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::InvalidCodeLength`] when the length is below 4, or odd and
/// below the 10-digit pair stage.
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<Code, OlcError> {
    if code_length < MIN_CODE_LENGTH
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(OlcError::InvalidCodeLength(code_length));
    }
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    // The north pole would otherwise fall just outside the last row of cells.
    if latitude == LATITUDE_MAX {
        latitude -= 0.9 * compute_latitude_precision(code_length);
    }

    Code::new(&encode_digits(latitude, longitude, code_length))
}

/// Decodes a full code into the rectangle it names.
///
/// # Errors
///
/// Grammar failures from construction, and [`OlcError::NotFullCode`] for
/// short codes.
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    let code = Code::new(code)?;
    decode_code(&code)
}

pub(crate) fn decode_code(code: &Code) -> Result<CodeArea, OlcError> {
    if !code.is_full() {
        return Err(OlcError::NotFullCode);
    }
    let digits: String = code
        .as_str()
        .chars()
        .filter(|c| *c != SEPARATOR && *c != PADDING_CHARACTER)
        .take(MAX_DIGIT_COUNT)
        .collect();

    let (south, west, lat_place, lng_place) = decode_digits(&digits)?;
    Ok(CodeArea::new(
        lat_units_to_degrees(south),
        lng_units_to_degrees(west),
        lat_units_to_degrees(south + lat_place),
        lng_units_to_degrees(west + lng_place),
        digits.len(),
    ))
}

/// Removes as many leading digit pairs as the reference point allows.
///
/// Candidate removals are tried from four pairs down to one; the first whose
/// cell the reference sits comfortably inside (0.3 of the cell height, a
/// safety margin below the half-cell limit) wins.
///
/// # Errors
///
/// [`OlcError::NotFullCode`] / [`OlcError::PaddedCode`] when the input cannot
/// be shortened, [`OlcError::ReferenceTooFar`] when no removal qualifies.
pub fn shorten(code: &str, ref_latitude: f64, ref_longitude: f64) -> Result<Code, OlcError> {
    let code = Code::new(code)?;
    if !code.is_full() {
        return Err(OlcError::NotFullCode);
    }
    if code.is_padded() {
        return Err(OlcError::PaddedCode);
    }

    let area = decode_code(&code)?;
    let range = (ref_latitude - area.center_latitude())
        .abs()
        .max((ref_longitude - area.center_longitude()).abs());

    for removed_pairs in (1..=4).rev() {
        if range < compute_latitude_precision(removed_pairs * 2) * 0.3 {
            return Code::new(&code.as_str()[removed_pairs * 2..]);
        }
    }
    Err(OlcError::ReferenceTooFar)
}

/// Expands a short code into the full code nearest a reference point.
///
/// Already-full codes are returned unchanged. The missing leading digits are
/// taken from the encoded reference point; because the reference may sit near
/// a cell edge, the decoded center is then shifted by one prefix-cell step
/// toward the reference whenever it is more than half a step away (latitude
/// shifts that would leave the domain are suppressed).
pub fn recover(code: &str, ref_latitude: f64, ref_longitude: f64) -> Result<Code, OlcError> {
    let code = Code::new(code)?;
    if code.is_full() {
        return Ok(code);
    }

    let ref_latitude = clip_latitude(ref_latitude);
    let ref_longitude = normalize_longitude(ref_longitude);

    let prefix_length = SEPARATOR_POSITION - code.separator_position();
    let resolution = compute_latitude_precision(prefix_length);
    let half_resolution = resolution / 2.0;

    let reference = encode(ref_latitude, ref_longitude, PAIR_CODE_LENGTH)?;
    let candidate = format!("{}{}", &reference.as_str()[..prefix_length], code.as_str());
    let area = decode(&candidate)?;

    let mut center_lat = area.center_latitude();
    let mut center_lng = area.center_longitude();

    if ref_latitude + half_resolution < center_lat && center_lat - resolution >= -LATITUDE_MAX {
        center_lat -= resolution;
    } else if ref_latitude - half_resolution > center_lat
        && center_lat + resolution <= LATITUDE_MAX
    {
        center_lat += resolution;
    }

    if ref_longitude + half_resolution < center_lng {
        center_lng -= resolution;
    } else if ref_longitude - half_resolution > center_lng {
        center_lng += resolution;
    }

    encode(center_lat, center_lng, area.code_length)
}

/// Whether the string is a grammar-valid code of any kind.
pub fn is_valid(code: &str) -> bool {
    Code::new(code).is_ok()
}

/// Whether the string is a valid full code. Grammar failures become `false`.
pub fn is_full(code: &str) -> bool {
    Code::new(code).map(|c| c.is_full()).unwrap_or(false)
}

/// Whether the string is a valid short code. Grammar failures become `false`.
pub fn is_short(code: &str) -> bool {
    Code::new(code).map(|c| c.is_short()).unwrap_or(false)
}

/// Whether the string is a valid code carrying padding.
pub fn is_padded(code: &str) -> bool {
    Code::new(code).map(|c| c.is_padded()).unwrap_or(false)
}

/// Whether the point lies inside the rectangle the code decodes to.
///
/// # Errors
///
/// Propagates decode failures; only membership itself is a boolean.
pub fn contains(code: &str, latitude: f64, longitude: f64) -> Result<bool, OlcError> {
    Ok(decode(code)?.contains(latitude, longitude))
}
