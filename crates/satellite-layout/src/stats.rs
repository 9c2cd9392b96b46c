//! Global edge weight bounds of a bound graph.

use satellite_core::WeightedGraph;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_THRESHOLD_RATIO;

/// Minimum and maximum edge weight, collected once per bound graph.
///
/// Both bounds start at zero and widen to cover every edge weight, so
/// `min_weight <= 0 <= max_weight` always holds. A graph without edges
/// reports `0` for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightStats {
    pub min_weight: f32,
    pub max_weight: f32,
}

impl WeightStats {
    /// Scan every edge of `graph`.
    pub fn compute(graph: &WeightedGraph) -> Self {
        graph
            .edges
            .iter()
            .fold(Self::default(), |stats, edge| Self {
                min_weight: if stats.min_weight > edge.weight {
                    edge.weight
                } else {
                    stats.min_weight
                },
                max_weight: if stats.max_weight < edge.weight {
                    edge.weight
                } else {
                    stats.max_weight
                },
            })
    }

    /// Threshold used until the host sets one.
    pub fn default_threshold(&self) -> f32 {
        DEFAULT_THRESHOLD_RATIO * self.max_weight
    }

    /// Clamp a threshold into `[min_weight, max_weight]`.
    ///
    /// The value is capped to the maximum first and floored to the minimum
    /// second, so if the bounds were ever inverted the floor wins.
    pub fn clamp_threshold(&self, value: f32) -> f32 {
        let capped = if value < self.max_weight {
            value
        } else {
            self.max_weight
        };
        if capped > self.min_weight {
            capped
        } else {
            self.min_weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satellite_core::WeightedGraphBuilder;

    fn stats_of(weights: &[f32]) -> WeightStats {
        let mut builder = WeightedGraphBuilder::directed();
        let hub = builder.add_node("hub");
        for (i, &w) in weights.iter().enumerate() {
            let n = builder.add_node(format!("n{i}"));
            builder.add_edge(hub, n, w);
        }
        WeightStats::compute(&builder.build())
    }

    #[test]
    fn test_empty_graph_has_zero_bounds() {
        let stats = stats_of(&[]);
        assert_eq!(stats, WeightStats::default());
        assert_eq!(stats.default_threshold(), 0.0);
    }

    #[test]
    fn test_bounds_include_zero() {
        let stats = stats_of(&[1.0, 5.0, 9.0]);
        assert_eq!(stats.min_weight, 0.0);
        assert_eq!(stats.max_weight, 9.0);
        assert!((stats.default_threshold() - 0.9).abs() < 1e-6);

        let stats = stats_of(&[-2.0, 3.0]);
        assert_eq!(stats.min_weight, -2.0);
        assert_eq!(stats.max_weight, 3.0);
    }

    #[test]
    fn test_clamp_threshold() {
        let stats = stats_of(&[2.0, 10.0]);
        assert_eq!(stats.clamp_threshold(4.0), 4.0);
        assert_eq!(stats.clamp_threshold(40.0), 10.0);
        assert_eq!(stats.clamp_threshold(-1.0), 0.0);
        assert_eq!(stats.clamp_threshold(f32::NAN), 10.0);
    }

    #[test]
    fn test_clamp_threshold_is_idempotent() {
        let stats = stats_of(&[-3.0, 7.5]);
        for value in [-100.0, -3.0, -0.5, 0.0, 2.0, 7.5, 8.0, 1e9] {
            let once = stats.clamp_threshold(value);
            assert_eq!(stats.clamp_threshold(once), once);
        }
    }

    #[test]
    fn test_inverted_bounds_floor_wins() {
        let stats = WeightStats {
            min_weight: 5.0,
            max_weight: 1.0,
        };
        assert_eq!(stats.clamp_threshold(3.0), 5.0);
        assert_eq!(stats.clamp_threshold(0.0), 5.0);
    }
}
