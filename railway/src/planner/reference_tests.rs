//! Queries against the standard Kiwiland railway map.

use super::*;
use crate::config::REFERENCE_MAP;
use crate::domain::Route;

fn network() -> RailNetwork {
    REFERENCE_MAP.parse().unwrap()
}

fn summary(routes: &[Route]) -> Vec<String> {
    routes.iter().map(Route::to_string).collect()
}

#[test]
fn route_distances() {
    let network = network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    assert_eq!(planner.route_distance("A", &["B", "C"]), Ok(Some(9)));
    assert_eq!(planner.route_distance("A", &["D"]), Ok(Some(5)));
    assert_eq!(planner.route_distance("A", &["D", "C"]), Ok(Some(13)));
    assert_eq!(
        planner.route_distance("A", &["E", "B", "C", "D"]),
        Ok(Some(22))
    );
    assert_eq!(planner.route_distance("A", &["E", "D"]), Ok(None));
}

#[test]
fn route_distance_is_repeatable() {
    let network = network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let first = planner.route_distance("A", &["E", "B", "C", "D"]);
    for _ in 0..5 {
        assert_eq!(planner.route_distance("A", &["E", "B", "C", "D"]), first);
    }
}

#[test]
fn trips_with_at_most_three_stops() {
    let network = network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let routes = planner.routes_by_stops("C", "C", 3, StopMode::AtMost).unwrap();
    assert_eq!(summary(&routes), vec!["C-D-C (16)", "C-E-B-C (9)"]);
}

#[test]
fn trips_with_exactly_four_stops() {
    let network = network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let routes = planner.routes_by_stops("A", "C", 4, StopMode::Exactly).unwrap();
    assert_eq!(routes.len(), 3);
    assert!(routes.iter().all(|r| r.stops() == 4));
    assert_eq!(
        summary(&routes),
        vec!["A-B-C-D-C (25)", "A-D-C-D-C (29)", "A-D-E-B-C (18)"]
    );
}

#[test]
fn shortest_routes() {
    let network = network();
    for strategy in [ShortestPathStrategy::Relaxation, ShortestPathStrategy::Dijkstra] {
        let config = SearchConfig::new(strategy);
        let planner = Planner::new(&network, &config);

        assert_eq!(planner.shortest_distance("A", "C"), Ok(Some(9)));
        assert_eq!(planner.shortest_distance("B", "B"), Ok(Some(9)));
    }
}

#[test]
fn trips_shorter_than_thirty() {
    let network = network();
    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    let routes = planner.routes_within("C", "C", 30).unwrap();
    assert_eq!(routes.len(), 7);
    assert!(routes.iter().all(|r| r.distance() < 30));
    assert_eq!(
        summary(&routes),
        vec![
            "C-D-C (16)",
            "C-D-C-E-B-C (25)",
            "C-D-E-B-C (21)",
            "C-E-B-C (9)",
            "C-E-B-C-D-C (25)",
            "C-E-B-C-E-B-C (18)",
            "C-E-B-C-E-B-C-E-B-C (27)",
        ]
    );
}
