//! Route queries over a railway network.
//!
//! Four query shapes are supported:
//! - the distance of a fully specified route ([`Planner::route_distance`])
//! - routes bounded by a number of stops ([`Planner::routes_by_stops`])
//! - routes bounded by a total distance ([`Planner::routes_within`])
//! - the shortest distance between two stations, including the shortest
//!   cycle back to the origin ([`Planner::shortest_distance`])
//!
//! Queries borrow the network read-only and never modify it.

mod config;
mod distance;
mod error;
mod shortest;
mod stops;
mod within;

#[cfg(test)]
mod reference_tests;

pub use config::{SearchConfig, ShortestPathStrategy, UnknownStrategy};
pub use error::QueryError;
pub use stops::StopMode;

use crate::domain::Station;
use crate::network::{RailNetwork, UnknownStation};

/// A numeric query bound, given either as an integer or as user text.
///
/// Text that does not parse as an integer is rejected with
/// [`QueryError::InvalidArgument`].
pub trait Bound {
    fn to_bound(&self, name: &'static str) -> Result<i64, QueryError>;
}

impl Bound for i64 {
    fn to_bound(&self, _name: &'static str) -> Result<i64, QueryError> {
        Ok(*self)
    }
}

impl Bound for i32 {
    fn to_bound(&self, _name: &'static str) -> Result<i64, QueryError> {
        Ok(i64::from(*self))
    }
}

impl Bound for u32 {
    fn to_bound(&self, _name: &'static str) -> Result<i64, QueryError> {
        Ok(i64::from(*self))
    }
}

impl Bound for usize {
    fn to_bound(&self, _name: &'static str) -> Result<i64, QueryError> {
        Ok(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl Bound for str {
    fn to_bound(&self, name: &'static str) -> Result<i64, QueryError> {
        self.trim()
            .parse()
            .map_err(|_| QueryError::InvalidArgument {
                name,
                value: self.to_string(),
            })
    }
}

impl Bound for &str {
    fn to_bound(&self, name: &'static str) -> Result<i64, QueryError> {
        (**self).to_bound(name)
    }
}

impl Bound for String {
    fn to_bound(&self, name: &'static str) -> Result<i64, QueryError> {
        self.as_str().to_bound(name)
    }
}

/// Route planner over a borrowed network.
pub struct Planner<'a> {
    network: &'a RailNetwork,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a RailNetwork, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Validate the station arguments shared by every query.
    ///
    /// Both stations must be non-empty and the origin must be on the map.
    /// The destination may be unknown.
    fn check_endpoints(&self, origin: &str, destination: &str) -> Result<(), QueryError> {
        check_supplied(origin, destination)?;
        self.check_origin(origin)
    }

    fn check_origin(&self, origin: &str) -> Result<(), QueryError> {
        if !self.network.contains(origin) {
            return Err(UnknownStation(Station::new(origin)).into());
        }
        Ok(())
    }
}

fn check_supplied(origin: &str, destination: &str) -> Result<(), QueryError> {
    if origin.is_empty() {
        return Err(QueryError::MissingArgument("origin"));
    }
    if destination.is_empty() {
        return Err(QueryError::MissingArgument("destination"));
    }
    Ok(())
}
