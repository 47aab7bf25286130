//! Routes through the railway map.

use std::fmt;

use serde::Serialize;

use super::Station;

/// Distance carried by a single edge of the map.
pub type Distance = u32;

/// A walk through the map together with its total distance.
///
/// A route always has at least two stations. Stations may repeat, since
/// cycles are legal (e.g. `C-D-C`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    stations: Vec<Station>,
    distance: u64,
}

impl Route {
    /// Create a route from its stations and total distance.
    ///
    /// Returns `None` if fewer than two stations are given.
    pub fn new(stations: Vec<Station>, distance: u64) -> Option<Self> {
        if stations.len() < 2 {
            return None;
        }
        Some(Self { stations, distance })
    }

    /// Create a route from a walk the caller knows has at least two stations.
    pub(crate) fn from_walk(stations: Vec<Station>, distance: u64) -> Self {
        debug_assert!(stations.len() >= 2);
        Self { stations, distance }
    }

    /// The stations visited, origin first.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Total distance along the route.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Number of stops (edges traversed).
    pub fn stops(&self) -> usize {
        self.stations.len() - 1
    }

    /// The first station.
    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    /// The last station.
    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// The stations joined with `-`, e.g. `A-B-C`.
    pub fn path(&self) -> String {
        let names: Vec<&str> = self.stations.iter().map(Station::as_str).collect();
        names.join("-")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path(), self.distance)
    }
}
