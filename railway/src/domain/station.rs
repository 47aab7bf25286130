//! Station identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Error returned when a map token names an invalid station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name {found:?}: {reason}")]
pub struct InvalidStation {
    found: char,
    reason: &'static str,
}

/// A station on the railway map.
///
/// Stations are opaque, case-sensitive tokens. The map notation only ever
/// produces single uppercase letters (see [`Station::from_letter`]), but
/// queries may name any token, and an unknown token is simply a station
/// with no routes.
///
/// # Examples
///
/// ```
/// use railway::domain::Station;
///
/// let a = Station::from_letter('A').unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Lowercase is rejected by the map notation
/// assert!(Station::from_letter('a').is_err());
///
/// // Queries accept any token
/// assert_eq!(Station::new("Kiwi").as_str(), "Kiwi");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Create a station from an arbitrary token.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a station from a map-notation character.
    ///
    /// The character must be an uppercase ASCII letter (A-Z).
    pub fn from_letter(c: char) -> Result<Self, InvalidStation> {
        if !c.is_ascii_uppercase() {
            return Err(InvalidStation {
                found: c,
                reason: "must be an uppercase ASCII letter A-Z",
            });
        }
        Ok(Self(c.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
