//! Application configuration, read from the environment.
//!
//! | Variable                | Meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `RAILWAY_MAP`           | map notation (default: [`REFERENCE_MAP`]) |
//! | `RAILWAY_MAP_FILE`      | file holding the map; wins over the above |
//! | `RAILWAY_SHORTEST_PATH` | `relaxation` (default) or `dijkstra`      |
//! | `RAILWAY_OUTPUT`        | `text` (default) or `json`                |

use std::path::PathBuf;
use std::str::FromStr;

use crate::planner::{SearchConfig, ShortestPathStrategy, UnknownStrategy};

/// The standard Kiwiland railway map.
pub const REFERENCE_MAP: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Map file could not be read
    #[error("failed to read map file {path}: {source}")]
    ReadMap {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown shortest path strategy
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    /// Unknown output format
    #[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
    Output(String),
}

/// How query results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Output(s.to_string())),
        }
    }
}

/// Configuration for a railway session.
#[derive(Debug, Clone)]
pub struct RailwayConfig {
    /// Map notation offered to the user at startup.
    pub map: String,

    /// Query parameters.
    pub search: SearchConfig,

    /// Result format.
    pub output: OutputFormat,
}

impl Default for RailwayConfig {
    fn default() -> Self {
        Self {
            map: REFERENCE_MAP.to_string(),
            search: SearchConfig::default(),
            output: OutputFormat::default(),
        }
    }
}

impl RailwayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup.
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("RAILWAY_MAP_FILE") {
            let path = PathBuf::from(path);
            let map = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::ReadMap { path, source })?;
            config.map = map.trim().to_string();
        } else if let Some(map) = lookup("RAILWAY_MAP") {
            config.map = map;
        }

        if let Some(strategy) = lookup("RAILWAY_SHORTEST_PATH") {
            config.search.shortest_path = strategy.parse::<ShortestPathStrategy>()?;
        }
        if let Some(output) = lookup("RAILWAY_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }
}
