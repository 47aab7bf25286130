//! Query results rendered for output.
//!
//! Each report renders either as the plain text the menu prints, or as
//! JSON for scripting.

use serde::Serialize;

use crate::domain::Route;
use crate::planner::StopMode;

/// Printed in place of a result when no route exists.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// A route in a report.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    /// Stations joined with `-`
    pub path: String,

    /// Number of stops
    pub stops: usize,

    /// Total distance
    pub distance: u64,
}

impl From<&Route> for RouteReport {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path(),
            stops: route.stops(),
            distance: route.distance(),
        }
    }
}

/// Result of one query.
#[derive(Debug, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryReport {
    RouteDistance {
        route: String,
        distance: Option<u64>,
    },
    RoutesByStops {
        origin: String,
        destination: String,
        stops: i64,
        exact: bool,
        routes: Vec<RouteReport>,
    },
    RoutesWithin {
        origin: String,
        destination: String,
        max_distance: i64,
        routes: Vec<RouteReport>,
    },
    ShortestDistance {
        origin: String,
        destination: String,
        distance: Option<u64>,
    },
}

impl QueryReport {
    pub fn route_distance<S: AsRef<str>>(origin: &str, stops: &[S], distance: Option<u64>) -> Self {
        let mut route = origin.to_string();
        for stop in stops {
            route.push('-');
            route.push_str(stop.as_ref());
        }
        QueryReport::RouteDistance { route, distance }
    }

    pub fn routes_by_stops(
        origin: &str,
        destination: &str,
        stops: i64,
        mode: StopMode,
        routes: &[Route],
    ) -> Self {
        QueryReport::RoutesByStops {
            origin: origin.to_string(),
            destination: destination.to_string(),
            stops,
            exact: mode == StopMode::Exactly,
            routes: routes.iter().map(RouteReport::from).collect(),
        }
    }

    pub fn routes_within(
        origin: &str,
        destination: &str,
        max_distance: i64,
        routes: &[Route],
    ) -> Self {
        QueryReport::RoutesWithin {
            origin: origin.to_string(),
            destination: destination.to_string(),
            max_distance,
            routes: routes.iter().map(RouteReport::from).collect(),
        }
    }

    pub fn shortest_distance(origin: &str, destination: &str, distance: Option<u64>) -> Self {
        QueryReport::ShortestDistance {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance,
        }
    }

    /// Number of routes found, for route-listing queries.
    pub fn route_count(&self) -> Option<usize> {
        match self {
            QueryReport::RoutesByStops { routes, .. } | QueryReport::RoutesWithin { routes, .. } => {
                Some(routes.len())
            }
            _ => None,
        }
    }

    /// The line printed by the interactive menu.
    pub fn to_text(&self) -> String {
        match self {
            QueryReport::RouteDistance {
                route,
                distance: Some(distance),
            } => format!("The distance along route {route} is: {distance}"),
            QueryReport::ShortestDistance {
                origin,
                destination,
                distance: Some(distance),
            } => format!("The shortest route between {origin} and {destination} is {distance}"),
            QueryReport::RoutesByStops { routes, .. } | QueryReport::RoutesWithin { routes, .. }
                if !routes.is_empty() =>
            {
                let listed: Vec<String> = routes
                    .iter()
                    .map(|r| format!("{} ({})", r.path, r.distance))
                    .collect();
                format!("There are {} routes: {}", routes.len(), listed.join(", "))
            }
            _ => NO_SUCH_ROUTE.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
