//! Distance along a fully specified route.

use tracing::trace;

use super::{Planner, QueryError};

impl Planner<'_> {
    /// Total distance along `origin`, then each of `stops` in turn.
    ///
    /// Returns `Ok(None)` if any consecutive pair of stations has no direct
    /// edge; a route that breaks part-way has no distance at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::network::RailNetwork;
    /// use railway::planner::{Planner, SearchConfig};
    ///
    /// let network: RailNetwork = "AB5, BC4, AE7".parse().unwrap();
    /// let config = SearchConfig::default();
    /// let planner = Planner::new(&network, &config);
    ///
    /// assert_eq!(planner.route_distance("A", &["B", "C"]), Ok(Some(9)));
    /// assert_eq!(planner.route_distance("A", &["E", "C"]), Ok(None));
    /// ```
    pub fn route_distance<S: AsRef<str>>(
        &self,
        origin: &str,
        stops: &[S],
    ) -> Result<Option<u64>, QueryError> {
        let first: &str = stops.first().map(|s| s.as_ref()).unwrap_or_default();
        self.check_endpoints(origin, first)?;

        let mut total = 0u64;
        let mut from = origin;
        for stop in stops {
            let to = stop.as_ref();
            let Some(distance) = self.network.edge_distance(from, to) else {
                trace!(from, to, "No direct edge, route does not exist");
                return Ok(None);
            };
            total += u64::from(distance);
            from = to;
        }
        Ok(Some(total))
    }
}
