/// Stored date format for measurement rows
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the recent-observations window, in calendar months
pub const RECENT_WINDOW_MONTHS: u32 = 12;

/// Default data files
pub const DEFAULT_MEASUREMENTS_FILE: &str = "Resources/hawaii_measurements.csv";
pub const DEFAULT_STATIONS_FILE: &str = "Resources/hawaii_stations.csv";

/// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration sources
pub const DEFAULT_CONFIG_FILE: &str = "climate-api";
pub const ENV_PREFIX: &str = "CLIMATE";
pub const ENV_SEPARATOR: &str = "__";

/// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// API routes
pub const ROUTE_PRECIPITATION: &str = "/api/v1.0/precipitation";
pub const ROUTE_STATIONS: &str = "/api/v1.0/stations";
pub const ROUTE_TOBS: &str = "/api/v1.0/tobs";
pub const ROUTE_START: &str = "/api/v1.0/:start";
pub const ROUTE_START_END: &str = "/api/v1.0/:start/:end";

/// Reader defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
