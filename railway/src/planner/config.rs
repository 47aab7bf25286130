//! Search configuration for the route planner.

use std::fmt;
use std::str::FromStr;

/// Algorithm used to answer shortest-route queries.
///
/// Both strategies give identical answers on every finite map; they differ
/// only in how much of the map they explore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortestPathStrategy {
    /// Depth-first relaxation pruned by the best distance found so far.
    #[default]
    Relaxation,

    /// Dijkstra's algorithm over a binary heap.
    Dijkstra,
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shortest path strategy {0:?} (expected \"relaxation\" or \"dijkstra\")")]
pub struct UnknownStrategy(String);

impl FromStr for ShortestPathStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxation" => Ok(ShortestPathStrategy::Relaxation),
            "dijkstra" => Ok(ShortestPathStrategy::Dijkstra),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for ShortestPathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathStrategy::Relaxation => f.write_str("relaxation"),
            ShortestPathStrategy::Dijkstra => f.write_str("dijkstra"),
        }
    }
}

/// Configuration parameters for route queries.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Algorithm for shortest-route queries.
    pub shortest_path: ShortestPathStrategy,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(shortest_path: ShortestPathStrategy) -> Self {
        Self { shortest_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.shortest_path, ShortestPathStrategy::Relaxation);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(ShortestPathStrategy::Dijkstra);
        assert_eq!(config.shortest_path, ShortestPathStrategy::Dijkstra);
    }

    #[test]
    fn parse_strategy() {
        assert_eq!(
            "relaxation".parse::<ShortestPathStrategy>(),
            Ok(ShortestPathStrategy::Relaxation)
        );
        assert_eq!(
            " Dijkstra ".parse::<ShortestPathStrategy>(),
            Ok(ShortestPathStrategy::Dijkstra)
        );
        assert!("bellman-ford".parse::<ShortestPathStrategy>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for strategy in [ShortestPathStrategy::Relaxation, ShortestPathStrategy::Dijkstra] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}
