//! Route enumeration bounded by total distance.

use std::slice;

use tracing::debug;

use crate::domain::{Route, Station};
use crate::network::Edge;

use super::{Bound, Planner, QueryError};

/// Work-stack frame: the unexplored edges of one station on the current
/// path, and the distance budget left on arrival there.
struct Frame<'a> {
    edges: slice::Iter<'a, Edge>,
    budget: i64,
    travelled: u64,
}

impl Planner<'_> {
    /// All routes from `origin` to `destination` shorter than `max_distance`.
    ///
    /// The bound is strict: a route exactly `max_distance` long is not
    /// reported. Results are in depth-first discovery order.
    ///
    /// Exploration continues past the destination, so routes may pass
    /// through it (or through the origin) any number of times. Termination
    /// relies on edge distances being positive; a path is never extended
    /// beyond `max_distance` stops, which only matters for maps with
    /// zero-distance cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::network::RailNetwork;
    /// use railway::planner::{Planner, SearchConfig};
    ///
    /// let network: RailNetwork = "AB1, AC2, CA4".parse().unwrap();
    /// let config = SearchConfig::default();
    /// let planner = Planner::new(&network, &config);
    ///
    /// let routes = planner.routes_within("A", "C", 14).unwrap();
    /// let found: Vec<String> = routes.iter().map(|r| r.to_string()).collect();
    /// assert_eq!(found, vec!["A-C (2)", "A-C-A-C (8)"]);
    /// ```
    pub fn routes_within(
        &self,
        origin: &str,
        destination: &str,
        max_distance: impl Bound,
    ) -> Result<Vec<Route>, QueryError> {
        super::check_supplied(origin, destination)?;
        let max_distance = max_distance.to_bound("max_distance")?;
        self.check_origin(origin)?;

        let mut routes = Vec::new();
        let mut path = vec![Station::new(origin)];
        let mut stack = vec![Frame {
            edges: self.network.edges_from(origin).iter(),
            budget: max_distance,
            travelled: 0,
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let (budget, travelled) = (frame.budget, frame.travelled);
            let Some(edge) = frame.edges.next() else {
                stack.pop();
                path.pop();
                continue;
            };

            let distance = i64::from(edge.distance);
            let reached = travelled + u64::from(edge.distance);

            if edge.to.as_str() == destination && distance < budget {
                let mut stations = path.clone();
                stations.push(edge.to.clone());
                routes.push(Route::from_walk(stations, reached));
            }

            let rest = budget.saturating_sub(distance);
            if rest > 0 && (stack.len() as i64) < max_distance {
                path.push(edge.to.clone());
                stack.push(Frame {
                    edges: self.network.edges_from(edge.to.as_str()).iter(),
                    budget: rest,
                    travelled: reached,
                });
            }
        }

        debug!(
            origin,
            destination,
            max_distance,
            routes = routes.len(),
            "Distance-bounded search complete"
        );
        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{RailNetwork, UnknownStation};
    use crate::planner::SearchConfig;

    fn network() -> RailNetwork {
        "AB1, AC2, CA4".parse().unwrap()
    }

    fn summary(routes: &[Route]) -> Vec<String> {
        routes.iter().map(Route::to_string).collect()
    }

    #[test]
    fn argument_errors() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert_eq!(
            planner.routes_within("", "A", 5),
            Err(QueryError::MissingArgument("origin"))
        );
        assert_eq!(
            planner.routes_within("A", "B", "Z"),
            Err(QueryError::InvalidArgument {
                name: "max_distance",
                value: "Z".into()
            })
        );
        assert_eq!(
            planner.routes_within("D", "A", 5),
            Err(QueryError::UnknownStation(UnknownStation(Station::new("D"))))
        );
    }

    #[test]
    fn non_positive_ceiling_finds_nothing() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert!(planner.routes_within("A", "B", -1).unwrap().is_empty());
        assert!(planner.routes_within("A", "B", 0).unwrap().is_empty());
        assert!(planner.routes_within("A", "B", i64::MIN).unwrap().is_empty());
        assert!(
            planner
                .routes_within("A", "B", "-9223372036854775808")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn ceiling_is_strict() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert!(planner.routes_within("A", "B", 1).unwrap().is_empty());
        assert_eq!(
            summary(&planner.routes_within("A", "B", 2).unwrap()),
            vec!["A-B (1)"]
        );
    }

    #[test]
    fn routes_pass_through_destination() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert_eq!(
            summary(&planner.routes_within("A", "C", 14).unwrap()),
            vec!["A-C (2)", "A-C-A-C (8)"]
        );
        assert_eq!(
            summary(&planner.routes_within("A", "C", 15).unwrap()),
            vec!["A-C (2)", "A-C-A-C (8)", "A-C-A-C-A-C (14)"]
        );
    }

    #[test]
    fn large_ceiling() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert_eq!(planner.routes_within("A", "C", 1000).unwrap().len(), 167);
    }

    #[test]
    fn text_ceiling_is_accepted() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert_eq!(planner.routes_within("A", "C", "14").unwrap().len(), 2);
    }

    #[test]
    fn unknown_destination_is_empty() {
        let network = network();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        assert!(planner.routes_within("A", "Q", 100).unwrap().is_empty());
    }

    #[test]
    fn zero_distance_cycle_terminates() {
        let network: RailNetwork = "AB0, BA0, AC1".parse().unwrap();
        let config = SearchConfig::default();
        let planner = Planner::new(&network, &config);

        let routes = planner.routes_within("A", "C", 3).unwrap();
        assert!(!routes.is_empty());
        assert!(routes.iter().all(|r| r.distance() < 3 && r.stops() <= 3));
    }
}
