//! Map notation error types.

/// A map token that does not follow the `OD#` notation.
///
/// Any malformed token aborts construction of the whole map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRoute {
    /// Token has fewer than three characters after trimming
    #[error("malformed route {token:?}: format is \"OD#\" where O = origin, D = destination, # = distance")]
    TooShort { token: String },

    /// Origin or destination is not a single uppercase letter
    #[error("malformed route {token:?}: station name must be an uppercase letter")]
    InvalidStationName { token: String },

    /// Distance is not a non-negative integer
    #[error("malformed route {token:?}: distance must be a non-negative integer")]
    InvalidDistance { token: String },
}

impl MalformedRoute {
    /// The offending token, as given.
    pub fn token(&self) -> &str {
        match self {
            MalformedRoute::TooShort { token }
            | MalformedRoute::InvalidStationName { token }
            | MalformedRoute::InvalidDistance { token } => token,
        }
    }
}
