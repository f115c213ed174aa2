pub mod coord;
pub mod error;

pub use coord::{Coordinate, clip_latitude, normalize_longitude};
pub use error::OlcError;
