//! Parsing of `OD#` route tokens.

use crate::domain::{Distance, Station};

use super::MalformedRoute;

/// A single decoded map token: one directed edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub origin: Station,
    pub destination: Station,
    pub distance: Distance,
}

/// A railway map as given by the user.
///
/// Either one comma-delimited string (`"AB5, BC4"`) or tokens that have
/// already been split (`["AB5", "BC4"]`).
#[derive(Debug, Clone, Copy)]
pub enum MapNotation<'a> {
    Delimited(&'a str),
    Tokens(&'a [&'a str]),
}

impl MapNotation<'_> {
    /// Normalize to a sequence of trimmed tokens.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            MapNotation::Delimited(s) => s.split(',').map(str::trim).collect(),
            MapNotation::Tokens(tokens) => tokens.iter().map(|t| t.trim()).collect(),
        }
    }
}

impl<'a> From<&'a str> for MapNotation<'a> {
    fn from(s: &'a str) -> Self {
        MapNotation::Delimited(s)
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for MapNotation<'a> {
    fn from(tokens: &'a [&'b str]) -> Self {
        MapNotation::Tokens(tokens)
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [&'b str; N]> for MapNotation<'a> {
    fn from(tokens: &'a [&'b str; N]) -> Self {
        MapNotation::Tokens(tokens)
    }
}

/// Parse a single route token such as `"AB5"`.
///
/// Surrounding whitespace is ignored. The first two characters name the
/// origin and destination stations and must be uppercase letters; the rest
/// is the distance.
///
/// # Examples
///
/// ```
/// use railway::notation::parse_route;
///
/// let spec = parse_route("AE5").unwrap();
/// assert_eq!(spec.origin.as_str(), "A");
/// assert_eq!(spec.destination.as_str(), "E");
/// assert_eq!(spec.distance, 5);
///
/// assert!(parse_route("A").is_err());
/// assert!(parse_route("zA4").is_err());
/// assert!(parse_route("DED").is_err());
/// ```
pub fn parse_route(token: &str) -> Result<RouteSpec, MalformedRoute> {
    let trimmed = token.trim();
    let mut chars = trimmed.chars();

    let (Some(origin), Some(destination)) = (chars.next(), chars.next()) else {
        return Err(MalformedRoute::TooShort {
            token: token.to_string(),
        });
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(MalformedRoute::TooShort {
            token: token.to_string(),
        });
    }

    let invalid_name = |_| MalformedRoute::InvalidStationName {
        token: token.to_string(),
    };
    let origin = Station::from_letter(origin).map_err(invalid_name)?;
    let destination = Station::from_letter(destination).map_err(invalid_name)?;

    let distance = rest
        .parse::<Distance>()
        .map_err(|_| MalformedRoute::InvalidDistance {
            token: token.to_string(),
        })?;

    Ok(RouteSpec {
        origin,
        destination,
        distance,
    })
}

/// Parse every token of a map, failing on the first malformed one.
pub fn parse_routes<'a>(
    notation: impl Into<MapNotation<'a>>,
) -> Result<Vec<RouteSpec>, MalformedRoute> {
    notation.into().tokens().into_iter().map(parse_route).collect()
}
