//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::validate::ValidatorConfig;

/// Environment variable naming the map file.
pub const MAP_VAR: &str = "TUBE_MAP";
/// Environment variable naming the station listing.
pub const STATIONS_VAR: &str = "TUBE_STATIONS";
/// Environment variable naming the line listing.
pub const LINES_VAR: &str = "TUBE_LINES";
/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TUBE_ADDR";
/// Environment variable enabling strict route endpoints.
pub const STRICT_VAR: &str = "TUBE_REQUIRE_STATION_ENDPOINT";

const DEFAULT_MAP: &str = "map.txt";
const DEFAULT_STATIONS: &str = "stations.txt";
const DEFAULT_LINES: &str = "lines.txt";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("invalid TUBE_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Boolean flag was not one of the accepted spellings
    #[error("invalid {name} {value:?}: expected true/false/1/0")]
    InvalidFlag { name: &'static str, value: String },
}

/// Configuration for the tube route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the map file
    pub map_path: PathBuf,
    /// Path to the station listing
    pub stations_path: PathBuf,
    /// Path to the line listing
    pub lines_path: PathBuf,
    /// Address to listen on
    pub addr: SocketAddr,
    /// Route validation settings
    pub validator: ValidatorConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let strict = match lookup(STRICT_VAR) {
            Some(value) => parse_flag(STRICT_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            map_path: path(MAP_VAR, DEFAULT_MAP),
            stations_path: path(STATIONS_VAR, DEFAULT_STATIONS),
            lines_path: path(LINES_VAR, DEFAULT_LINES),
            addr,
            validator: ValidatorConfig::new(strict),
        })
    }

    /// Set the map path.
    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the route validation settings.
    pub fn with_validator(mut self, validator: ValidatorConfig) -> Self {
        self.validator = validator;
        self
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
