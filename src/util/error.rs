/// Error type for olc-rs operations.
#[derive(Debug, PartialEq)]
pub enum OlcError {
    /// The requested code length cannot be encoded (below 4, or odd below 10).
    InvalidCodeLength(usize),
    /// The string fails the code grammar.
    InvalidCode(String),
    /// The operation requires a full code but was given a short one.
    NotFullCode,
    /// The operation cannot be applied to a padded code.
    PaddedCode,
    /// The reference point is too far from the code to shorten against.
    ReferenceTooFar,
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for OlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OlcError::InvalidCodeLength(len) => write!(f, "Invalid code length: {}", len),
            OlcError::InvalidCode(msg) => write!(f, "Invalid code: {}", msg),
            OlcError::NotFullCode => write!(f, "Code is not a full code"),
            OlcError::PaddedCode => write!(f, "Code must not be padded"),
            OlcError::ReferenceTooFar => write!(f, "Reference point is too far to shorten"),
            OlcError::IoError(msg) => write!(f, "IO error: {}", msg),
            OlcError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            OlcError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for OlcError {}
