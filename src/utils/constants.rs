/// Coordinate text
pub const DEGREE_SIGN: char = '°';

/// Date formats
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";
pub const YEAR_LABEL_FORMAT: &str = "%Y";

/// Chart labels
pub const NO_EVENT_LABEL: &str = "No Event";
pub const UNREGISTERED_LABEL: &str = "Unregistered";

/// Scheme categories
pub const WATER_AVAILABILITY_CATEGORIES: [&str; 4] = ["Adequate", "Inadequate", "Seasonal", "No water"];
pub const FUNCTIONAL_STATUSES: [&str; 2] = ["Fully functional", "Partially functional"];

/// Upload constraints
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["pdf", "png", "jpg", "jpeg", "gif"];
pub const MAX_CONTENT_LENGTH: u64 = 10 * 1024 * 1024; // 10MB

/// Processing defaults
pub const DEFAULT_GPS_COLUMN: &str = "gps";
pub const DEFAULT_GRANULARITY: &str = "monthly";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const ENV_PREFIX: &str = "IRRIGATION";
