//! Shortest distance between two stations.
//!
//! When origin and destination are the same station, the answer is the
//! shortest cycle back to it, never zero.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::Station;

use super::{Planner, QueryError, ShortestPathStrategy};

impl Planner<'_> {
    /// Length of the shortest route from `origin` to `destination`.
    ///
    /// Returns `Ok(None)` if the destination cannot be reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::network::RailNetwork;
    /// use railway::planner::{Planner, SearchConfig};
    ///
    /// let network: RailNetwork = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
    /// let config = SearchConfig::default();
    /// let planner = Planner::new(&network, &config);
    ///
    /// assert_eq!(planner.shortest_distance("A", "C"), Ok(Some(9)));
    /// assert_eq!(planner.shortest_distance("B", "B"), Ok(Some(9)));
    /// ```
    pub fn shortest_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<u64>, QueryError> {
        self.check_endpoints(origin, destination)?;

        let shortest = match self.config.shortest_path {
            ShortestPathStrategy::Relaxation => self.relax(origin, destination),
            ShortestPathStrategy::Dijkstra => self.dijkstra(origin, destination),
        };

        debug!(
            origin,
            destination,
            strategy = %self.config.shortest_path,
            ?shortest,
            "Shortest route search complete"
        );
        Ok(shortest)
    }

    /// Depth-first relaxation over a stack of `(from, to, distance to from)`
    /// entries seeded from the origin's edges.
    ///
    /// An entry is expanded only while it beats the best distance found so
    /// far, and only if it reaches its station more cheaply than any earlier
    /// expansion did. The second rule keeps cycles from being walked forever
    /// when the destination is unreachable.
    fn relax(&self, origin: &str, destination: &str) -> Option<u64> {
        let mut best = self
            .network
            .edge_distance(origin, destination)
            .map(u64::from);
        let mut expanded: HashMap<&Station, u64> = HashMap::new();

        let mut frontier: Vec<(&str, &Station, u64)> = self
            .network
            .edges_from(origin)
            .iter()
            .map(|edge| (origin, &edge.to, 0))
            .collect();

        while let Some((from, to, before)) = frontier.pop() {
            let Some(edge_distance) = self.network.edge_distance(from, to.as_str()) else {
                continue;
            };
            let distance = before + u64::from(edge_distance);

            if best.is_some_and(|best| distance >= best) {
                continue;
            }
            if expanded.get(to).is_some_and(|&seen| distance >= seen) {
                continue;
            }
            expanded.insert(to, distance);

            if to.as_str() == destination {
                trace!(distance, "Found shorter route");
                best = Some(distance);
            }
            frontier.extend(
                self.network
                    .edges_from(to.as_str())
                    .iter()
                    .map(|edge| (to.as_str(), &edge.to, distance)),
            );
        }

        best
    }

    /// Dijkstra's algorithm, seeded with the origin's outgoing edges so that
    /// a query from a station to itself finds the shortest cycle.
    fn dijkstra(&self, origin: &str, destination: &str) -> Option<u64> {
        let mut settled: HashSet<&Station> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<(u64, &Station)>> = self
            .network
            .edges_from(origin)
            .iter()
            .map(|edge| Reverse((u64::from(edge.distance), &edge.to)))
            .collect();

        while let Some(Reverse((distance, station))) = heap.pop() {
            if station.as_str() == destination {
                return Some(distance);
            }
            if !settled.insert(station) {
                continue;
            }
            for edge in self.network.edges_from(station.as_str()) {
                if !settled.contains(&edge.to) {
                    heap.push(Reverse((distance + u64::from(edge.distance), &edge.to)));
                }
            }
        }

        None
    }
}
