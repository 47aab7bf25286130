//! Top-level error type for a railway session.

use crate::config::ConfigError;
use crate::notation::MalformedRoute;
use crate::planner::QueryError;

/// Any error surfaced to the user of the railway tool.
#[derive(Debug, thiserror::Error)]
pub enum RailwayError {
    /// The railway map could not be parsed
    #[error(transparent)]
    Map(#[from] MalformedRoute),

    /// A query was rejected
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Configuration was invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
