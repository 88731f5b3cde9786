use thiserror::Error;

use crate::models::Coordinate;
use crate::utils::constants::DEGREE_SIGN;

/// Failure to read a coordinate pair out of free text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("GPS parsing error: Empty GPS coordinates")]
    Empty,

    #[error(
        "GPS parsing error: Could not parse GPS coordinates '{input}'. \
         Use format: '0.6341° N, 35.7364° E' or '-0.6341, 35.7364'"
    )]
    Unrecognized { input: String },
}

/// The two accepted shapes of coordinate text, picked by token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoordinateForm<'a> {
    /// `-0.6341, 35.7364`
    Decimal { latitude: &'a str, longitude: &'a str },
    /// `0.6341 N, 35.7364 E`
    Hemisphere {
        latitude: &'a str,
        lat_hemisphere: &'a str,
        longitude: &'a str,
        lon_hemisphere: &'a str,
    },
}

impl<'a> CoordinateForm<'a> {
    fn from_tokens(tokens: &[&'a str]) -> Option<Self> {
        match *tokens {
            [latitude, longitude] => Some(CoordinateForm::Decimal {
                latitude,
                longitude,
            }),
            [latitude, lat_hemisphere, longitude, lon_hemisphere] => {
                Some(CoordinateForm::Hemisphere {
                    latitude,
                    lat_hemisphere,
                    longitude,
                    lon_hemisphere,
                })
            }
            _ => None,
        }
    }

    fn resolve(self) -> Option<Coordinate> {
        match self {
            CoordinateForm::Decimal {
                latitude,
                longitude,
            } => Some(Coordinate::new(
                latitude.parse().ok()?,
                longitude.parse().ok()?,
            )),
            CoordinateForm::Hemisphere {
                latitude,
                lat_hemisphere,
                longitude,
                lon_hemisphere,
            } => {
                let lat = latitude.parse::<f64>().ok()? * hemisphere_sign(lat_hemisphere, "N");
                let lon = longitude.parse::<f64>().ok()? * hemisphere_sign(lon_hemisphere, "E");
                Some(Coordinate::new(lat, lon))
            }
        }
    }
}

/// Any marker other than the positive one (or a blank) flips the sign.
fn hemisphere_sign(marker: &str, positive: &str) -> f64 {
    if marker.is_empty() || marker.eq_ignore_ascii_case(positive) {
        1.0
    } else {
        -1.0
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse free-text GPS coordinates into decimal degrees.
///
/// Accepts either two signed decimals or `lat hemisphere lon hemisphere`,
/// with optional degree signs and comma/space separators. Values are not
/// range-checked; see [`Coordinate`]'s `Validate` impl for that.
///
/// # Examples
/// ```
/// use irrigation_insights::utils::parse_coordinates;
///
/// let coordinate = parse_coordinates("0.6341° S, 35.7364° W").unwrap();
/// assert_eq!(coordinate.latitude(), -0.6341);
/// assert_eq!(coordinate.longitude(), -35.7364);
/// ```
pub fn parse_coordinates(text: &str) -> Result<Coordinate, ParseError> {
    let cleaned = text.replace(DEGREE_SIGN, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens = tokenize(cleaned);
    CoordinateForm::from_tokens(&tokens)
        .and_then(CoordinateForm::resolve)
        .ok_or_else(|| ParseError::Unrecognized {
            input: text.to_string(),
        })
}

/// Same as [`parse_coordinates`] for a form field that may be absent.
pub fn parse_optional_coordinates(text: Option<&str>) -> Result<Coordinate, ParseError> {
    match text {
        Some(text) => parse_coordinates(text),
        None => Err(ParseError::Empty),
    }
}
