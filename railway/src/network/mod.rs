//! The railway network: a directed, weighted adjacency structure.
//!
//! Each station maps to its outgoing edges in insertion order. The order
//! matters: route enumeration reports results in the order edges were
//! added to the map.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::debug;

use crate::domain::{Distance, Station};
use crate::notation::{MalformedRoute, MapNotation, parse_routes};

/// Error returned when looking up a station that is not on the map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("station {0} not found")]
pub struct UnknownStation(pub Station);

/// A directed edge leaving a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub to: Station,
    pub distance: Distance,
}

/// A railway map.
///
/// Every station that appears at either end of an edge is known to the
/// network, even if it has no outgoing edges.
///
/// # Examples
///
/// ```
/// use railway::network::RailNetwork;
///
/// let network: RailNetwork = "AB5, BC4".parse().unwrap();
/// assert_eq!(network.edge_distance("A", "B"), Some(5));
/// assert_eq!(network.edge_distance("B", "A"), None);
/// assert!(network.contains("C"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    routes: HashMap<Station, Vec<Edge>>,
}

impl RailNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from map notation.
    ///
    /// Fails on the first malformed token; no partial network is returned.
    pub fn from_notation<'a>(notation: impl Into<MapNotation<'a>>) -> Result<Self, MalformedRoute> {
        let specs = parse_routes(notation)?;
        let mut network = Self::new();
        for spec in specs {
            network.insert(spec.origin, spec.destination, spec.distance);
        }
        debug!(
            stations = network.station_count(),
            edges = network.edge_count(),
            "Built railway network"
        );
        Ok(network)
    }

    /// Add a directed edge, overwriting any existing edge for the same pair.
    ///
    /// An overwritten edge keeps its position in the origin's outgoing order.
    pub fn insert(&mut self, origin: Station, destination: Station, distance: Distance) {
        if !self.routes.contains_key(&destination) {
            self.routes.insert(destination.clone(), Vec::new());
        }
        let edges = self.routes.entry(origin).or_default();
        match edges.iter_mut().find(|edge| edge.to == destination) {
            Some(edge) => edge.distance = distance,
            None => edges.push(Edge {
                to: destination,
                distance,
            }),
        }
    }

    /// Outgoing edges of a station, in insertion order.
    pub fn neighbors(&self, station: &str) -> Result<&[Edge], UnknownStation> {
        self.routes
            .get(station)
            .map(Vec::as_slice)
            .ok_or_else(|| UnknownStation(Station::new(station)))
    }

    /// Distance of the direct edge between two stations, if there is one.
    pub fn edge_distance(&self, origin: &str, destination: &str) -> Option<Distance> {
        self.routes
            .get(origin)?
            .iter()
            .find(|edge| edge.to.as_str() == destination)
            .map(|edge| edge.distance)
    }

    /// Check if a station is on the map.
    pub fn contains(&self, station: &str) -> bool {
        self.routes.contains_key(station)
    }

    /// All known stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.routes.keys()
    }

    pub fn station_count(&self) -> usize {
        self.routes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Outgoing edges of a station, empty for unknown stations.
    pub(crate) fn edges_from(&self, station: &str) -> &[Edge] {
        self.routes.get(station).map(Vec::as_slice).unwrap_or_default()
    }
}

impl FromStr for RailNetwork {
    type Err = MalformedRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str) -> Station {
        Station::new(s)
    }

    #[test]
    fn build_from_token_list() {
        let network = RailNetwork::from_notation(&["AB1", "AC2", "CA4"]).unwrap();
        assert_eq!(network.edge_distance("A", "B"), Some(1));
        assert_eq!(network.edge_distance("A", "C"), Some(2));
        assert_eq!(network.edge_distance("C", "A"), Some(4));
    }

    #[test]
    fn build_from_delimited_string() {
        let network = RailNetwork::from_notation("DE3, FD7, AG2").unwrap();
        assert_eq!(network.edge_distance("D", "E"), Some(3));
        assert_eq!(network.edge_distance("F", "D"), Some(7));
        assert_eq!(network.edge_distance("A", "G"), Some(2));
    }

    #[test]
    fn malformed_token_fails_construction() {
        let err = RailNetwork::from_notation("AB1, aC2").unwrap_err();
        assert!(matches!(err, MalformedRoute::InvalidStationName { .. }));
    }

    #[test]
    fn networks_are_independent() {
        let first: RailNetwork = "AB1".parse().unwrap();
        let second: RailNetwork = "CD2".parse().unwrap();
        assert!(!first.contains("C"));
        assert!(!second.contains("A"));
    }

    #[test]
    fn destination_only_station_is_known() {
        let network: RailNetwork = "AB1".parse().unwrap();
        assert!(network.contains("B"));
        assert!(network.neighbors("B").unwrap().is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let network: RailNetwork = "AB1".parse().unwrap();
        assert_eq!(network.edge_distance("B", "A"), None);
    }

    #[test]
    fn zero_distance_differs_from_no_edge() {
        let network: RailNetwork = "AB0".parse().unwrap();
        assert_eq!(network.edge_distance("A", "B"), Some(0));
        assert_eq!(network.edge_distance("A", "C"), None);
    }

    #[test]
    fn unknown_station_neighbors_fail() {
        let network: RailNetwork = "AB1".parse().unwrap();
        assert_eq!(network.neighbors("Z"), Err(UnknownStation(st("Z"))));
        assert_eq!(
            network.neighbors("Z").unwrap_err().to_string(),
            "station Z not found"
        );
    }

    #[test]
    fn last_write_wins_in_place() {
        let mut network = RailNetwork::new();
        network.insert(st("A"), st("B"), 1);
        network.insert(st("A"), st("C"), 2);
        network.insert(st("A"), st("B"), 9);

        let edges = network.neighbors("A").unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], Edge { to: st("B"), distance: 9 });
        assert_eq!(edges[1], Edge { to: st("C"), distance: 2 });
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let network: RailNetwork = "AD5, AB5, AE7".parse().unwrap();
        let order: Vec<&str> = network
            .neighbors("A")
            .unwrap()
            .iter()
            .map(|edge| edge.to.as_str())
            .collect();
        assert_eq!(order, vec!["D", "B", "E"]);
    }

    #[test]
    fn counts() {
        let network: RailNetwork = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
        assert_eq!(network.station_count(), 5);
        assert_eq!(network.edge_count(), 9);
        let mut stations: Vec<&str> = network.stations().map(Station::as_str).collect();
        stations.sort();
        assert_eq!(stations, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn self_loop() {
        let network: RailNetwork = "AA3".parse().unwrap();
        assert_eq!(network.edge_distance("A", "A"), Some(3));
        assert_eq!(network.station_count(), 1);
    }

    #[test]
    fn network_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RailNetwork>();
    }
}
