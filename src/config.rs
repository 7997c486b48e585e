//! Layered settings: built-in defaults, an optional config file,
//! `CLIMATE_`-prefixed environment variables, then command-line overrides.

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_MEASUREMENTS_FILE,
    DEFAULT_PORT, DEFAULT_STATIONS_FILE, ENV_PREFIX, ENV_SEPARATOR,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub server: ServerSettings,
    #[validate(nested)]
    pub data: DataSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DataSettings {
    #[validate(custom(function = "validate_path"))]
    pub measurements: PathBuf,
    #[validate(custom(function = "validate_path"))]
    pub stations: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub measurements: Option<PathBuf>,
    pub stations: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_path(path: &PathBuf) -> std::result::Result<(), validator::ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(validator::ValidationError::new("empty_path"));
    }
    Ok(())
}

impl Settings {
    /// Build settings from every layer. A missing config file is not an error
    /// unless one was named explicitly.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("data.measurements", DEFAULT_MEASUREMENTS_FILE)?
            .set_default("data.stations", DEFAULT_STATIONS_FILE)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option(
                "data.measurements",
                overrides
                    .measurements
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option(
                "data.stations",
                overrides
                    .stations
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("log.level", overrides.log_level.clone())?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}
