use crate::core::codec::{digit_value, is_alphabet_char};
use crate::core::constants::{ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION};
use crate::util::error::OlcError;

/// Classification of a grammar-valid code. A valid code is exactly one of
/// the two; anything else fails classification with a grammar error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// Separator at offset 8: all leading digits present.
    Full,
    /// Separator before offset 8: leading digits omitted, recoverable
    /// against a reference point.
    Short,
}

/// Runs the grammar scan over an upper-cased candidate string.
///
/// Returns the code kind and the separator offset. The scan is purely
/// syntactic; whether the code decodes to anything meaningful is not its
/// concern.
pub(crate) fn classify(code: &str) -> Result<(CodeKind, usize), OlcError> {
    if code.len() < 2 {
        return Err(OlcError::InvalidCode("code is too short".to_string()));
    }

    let mut separator = None;
    for (i, c) in code.char_indices() {
        if c == SEPARATOR {
            if separator.is_some() {
                return Err(OlcError::InvalidCode(
                    "more than one separator".to_string(),
                ));
            }
            separator = Some(i);
        }
    }
    let separator = separator
        .ok_or_else(|| OlcError::InvalidCode("missing separator".to_string()))?;
    if separator > SEPARATOR_POSITION || separator % 2 == 1 {
        return Err(OlcError::InvalidCode(format!(
            "separator at offset {}",
            separator
        )));
    }

    // Leading digits: alphabet characters, then optionally contiguous padding.
    let mut pad_start = None;
    for (i, c) in code[..separator].char_indices() {
        if c == PADDING_CHARACTER {
            if pad_start.is_none() {
                pad_start = Some(i);
            }
        } else if pad_start.is_some() {
            return Err(OlcError::InvalidCode(
                "digit after padding".to_string(),
            ));
        } else if !is_alphabet_char(c) {
            return Err(OlcError::InvalidCode(format!("invalid character '{}'", c)));
        }
    }
    if let Some(pad) = pad_start {
        if separator < SEPARATOR_POSITION {
            return Err(OlcError::InvalidCode(
                "short code with padding".to_string(),
            ));
        }
        if !matches!(pad, 2 | 4 | 6) {
            return Err(OlcError::InvalidCode(format!(
                "padding starts at offset {}",
                pad
            )));
        }
    }

    // Trailing digits: forbidden on padded codes, never exactly one, and
    // drawn from the alphabet only.
    let trailing = &code[separator + 1..];
    if !trailing.is_empty() {
        if pad_start.is_some() {
            return Err(OlcError::InvalidCode(
                "padded code with trailing digits".to_string(),
            ));
        }
        if trailing.len() == 1 {
            return Err(OlcError::InvalidCode(
                "single trailing digit".to_string(),
            ));
        }
        for c in trailing.chars() {
            if !is_alphabet_char(c) {
                return Err(OlcError::InvalidCode(format!("invalid character '{}'", c)));
            }
        }
    }

    if separator == SEPARATOR_POSITION {
        // First digit pair must stay inside the coordinate domain.
        let bytes = code.as_bytes();
        if let Some(first) = digit_value(bytes[0]) {
            if (first * ENCODING_BASE) as f64 >= LATITUDE_MAX * 2.0 {
                return Err(OlcError::InvalidCode(
                    "first latitude digit out of range".to_string(),
                ));
            }
        }
        if let Some(second) = digit_value(bytes[1]) {
            if (second * ENCODING_BASE) as f64 >= LONGITUDE_MAX * 2.0 {
                return Err(OlcError::InvalidCode(
                    "first longitude digit out of range".to_string(),
                ));
            }
        }
        Ok((CodeKind::Full, separator))
    } else {
        Ok((CodeKind::Short, separator))
    }
}
