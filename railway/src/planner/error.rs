//! Query error types.

use crate::network::UnknownStation;

/// Errors from a route query.
///
/// A query naming an unknown destination is not an error; it simply finds
/// no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A station argument was empty
    #[error("argument not supplied: {0}")]
    MissingArgument(&'static str),

    /// A numeric bound was not an integer
    #[error("argument `{name}` is not a number: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    /// The origin station is not on the map
    #[error("origin {0}")]
    UnknownStation(#[from] UnknownStation),
}
