use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A latitude/longitude pair in signed decimal degrees.
///
/// The parser does not clamp or reject out-of-range values; callers decide
/// whether to run [`Validate::validate`] before storing a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as `0.6341° N, 35.7364° E`.
    pub fn to_hemisphere_string(&self) -> String {
        let lat_hemisphere = if self.latitude < 0.0 { 'S' } else { 'N' };
        let lon_hemisphere = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{}° {}, {}° {}",
            self.latitude.abs(),
            lat_hemisphere,
            self.longitude.abs(),
            lon_hemisphere
        )
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
