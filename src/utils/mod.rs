pub mod constants;
pub mod coordinates;
pub mod dates;
pub mod files;

pub use constants::*;
pub use coordinates::{parse_coordinates, parse_optional_coordinates, ParseError};
pub use dates::{parse_date, parse_optional_date};
pub use files::{format_file_size, is_allowed_file, validate_upload};
