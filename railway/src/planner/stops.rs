//! Route enumeration bounded by a number of stops.

use std::slice;

use tracing::debug;

use crate::domain::{Route, Station};
use crate::network::{Edge, RailNetwork};

use super::{Bound, Planner, QueryError};

/// How a stop bound is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopMode {
    /// Routes with at most the given number of stops.
    #[default]
    AtMost,

    /// Routes with exactly the given number of stops.
    Exactly,
}

/// Work-stack frame: the unexplored edges of one station on the current
/// path, and the stops left on arrival there.
struct Frame<'a> {
    edges: slice::Iter<'a, Edge>,
    remaining: u64,
    travelled: u64,
}

impl<'a> Planner<'a> {
    /// All routes from `origin` to `destination` within a stop bound.
    ///
    /// A stop is one edge traversed, so a direct edge is one stop. Results
    /// are in depth-first discovery order, following each station's edges in
    /// the order they were added to the map.
    ///
    /// In [`StopMode::AtMost`], reaching a station with a direct edge to the
    /// destination reports that edge and stops exploring from that station;
    /// other branches carry on independently. In [`StopMode::Exactly`], a
    /// direct edge only counts on the last stop.
    ///
    /// The trivial zero-stop route is never reported, even when `origin`
    /// and `destination` are the same station.
    pub fn routes_by_stops(
        &self,
        origin: &str,
        destination: &str,
        stops: impl Bound,
        mode: StopMode,
    ) -> Result<Vec<Route>, QueryError> {
        super::check_supplied(origin, destination)?;
        let stops = stops.to_bound("stops")?;
        self.check_origin(origin)?;

        let mut routes = Vec::new();
        if stops >= 1 {
            let mut path = vec![Station::new(origin)];
            let mut stack: Vec<Frame<'_>> = self
                .enter_station(destination, stops.unsigned_abs(), mode, &path, 0, &mut routes)
                .into_iter()
                .collect();

            while let Some(frame) = stack.last_mut() {
                let Some(edge) = frame.edges.next() else {
                    stack.pop();
                    path.pop();
                    continue;
                };
                let remaining = frame.remaining - 1;
                let travelled = frame.travelled + u64::from(edge.distance);

                path.push(edge.to.clone());
                let next =
                    self.enter_station(destination, remaining, mode, &path, travelled, &mut routes);
                match next {
                    Some(next) => stack.push(next),
                    None => {
                        path.pop();
                    }
                }
            }
        }

        debug!(
            origin,
            destination,
            stops,
            ?mode,
            routes = routes.len(),
            "Stop-bounded search complete"
        );
        Ok(routes)
    }

    /// Arrive at the last station of `path` with `remaining` stops left
    /// (always at least one).
    ///
    /// Records a route if a direct edge to the destination is accepted here.
    /// Returns the frame to explore onwards from, or `None` when this
    /// station is a leaf of the search.
    fn enter_station(
        &self,
        destination: &str,
        remaining: u64,
        mode: StopMode,
        path: &[Station],
        travelled: u64,
        routes: &mut Vec<Route>,
    ) -> Option<Frame<'a>> {
        let network: &'a RailNetwork = self.network;
        let current = path.last()?;
        let edges = network.edges_from(current.as_str());

        let accepts_direct = match mode {
            StopMode::AtMost => true,
            StopMode::Exactly => remaining == 1,
        };
        if accepts_direct {
            if let Some(edge) = edges.iter().find(|edge| edge.to.as_str() == destination) {
                let mut stations = path.to_vec();
                stations.push(edge.to.clone());
                routes.push(Route::from_walk(
                    stations,
                    travelled + u64::from(edge.distance),
                ));
                return None;
            }
        }

        if remaining == 1 {
            return None;
        }
        Some(Frame {
            edges: edges.iter(),
            remaining,
            travelled,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::planner::SearchConfig;
    use proptest::prelude::*;

    /// Strategy for small random maps over stations A-E.
    fn network_strategy() -> impl Strategy<Value = RailNetwork> {
        prop::collection::vec((0u8..5, 0u8..5, 1u32..20), 1..15).prop_map(|edges| {
            let mut network = RailNetwork::new();
            for (o, d, w) in edges {
                network.insert(
                    Station::new(((b'A' + o) as char).to_string()),
                    Station::new(((b'A' + d) as char).to_string()),
                    w,
                );
            }
            network
        })
    }

    proptest! {
        /// More stop budget never removes routes back to a station
        #[test]
        fn at_most_is_monotonic(network in network_strategy(), n in 1i64..6) {
            let config = SearchConfig::default();
            let planner = Planner::new(&network, &config);
            let stations: Vec<String> = network.stations().map(|s| s.to_string()).collect();
            for s in &stations {
                let fewer = planner.routes_by_stops(s, s, n, StopMode::AtMost).unwrap();
                let more = planner.routes_by_stops(s, s, n + 1, StopMode::AtMost).unwrap();
                prop_assert!(fewer.len() <= more.len());
            }
        }

        /// Every reported route is a real walk within the bound
        #[test]
        fn routes_are_valid_walks(network in network_strategy(), n in 1i64..6) {
            let config = SearchConfig::default();
            let planner = Planner::new(&network, &config);
            for mode in [StopMode::AtMost, StopMode::Exactly] {
                for route in planner.routes_by_stops("A", "B", n, mode).unwrap_or_default() {
                    prop_assert_eq!(route.origin().as_str(), "A");
                    prop_assert_eq!(route.destination().as_str(), "B");
                    match mode {
                        StopMode::AtMost => {
                            prop_assert!(route.stops() as i64 <= n);
                        }
                        StopMode::Exactly => {
                            prop_assert_eq!(route.stops() as i64, n);
                        }
                    }
                    let rest: Vec<&str> = route.stations()[1..].iter().map(Station::as_str).collect();
                    prop_assert_eq!(
                        planner.route_distance("A", &rest).unwrap(),
                        Some(route.distance())
                    );
                }
            }
        }
    }
}
