//! Layout configuration and its bounds.

use serde::{Deserialize, Serialize};

/// Area size used until the host sets one.
pub const DEFAULT_AREA: i32 = 500;
/// Smallest accepted area size.
pub const MIN_AREA: i32 = 200;
/// Largest accepted area size.
pub const MAX_AREA: i32 = 3000;
/// Fraction of the maximum edge weight used as the default threshold.
pub const DEFAULT_THRESHOLD_RATIO: f32 = 0.1;

/// Which neighbors of the center become satellites in a directed graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Targets of the center's outgoing edges.
    #[default]
    Successor,
    /// Sources of the center's incoming edges.
    Predecessor,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Successor => "Successor",
            Direction::Predecessor => "Predecessor",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Host-facing layout settings.
///
/// Values read from a host may be out of range; the controller clamps them
/// when they are applied (see `SatelliteLayout::apply_config`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Successors or predecessors of the center (directed graphs only).
    pub direction: Direction,
    /// Label of the center node. Empty disables the layout.
    pub earth: String,
    /// Outer radius of the satellite ring.
    pub area_size: i32,
    /// Edges lighter than this are amplified away from the center.
    pub threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            earth: String::new(),
            area_size: DEFAULT_AREA,
            threshold: 0.0,
        }
    }
}

/// Clamp an area size into `[MIN_AREA, MAX_AREA]`, capping before flooring.
pub fn clamp_area(value: i32) -> i32 {
    let capped = if value < MAX_AREA { value } else { MAX_AREA };
    if capped > MIN_AREA {
        capped
    } else {
        MIN_AREA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_config_default() {
        let config = LayoutConfig::default();
        assert_eq!(config.direction, Direction::Successor);
        assert!(config.earth.is_empty());
        assert_eq!(config.area_size, DEFAULT_AREA);
    }

    #[test]
    fn test_clamp_area() {
        assert_eq!(clamp_area(500), 500);
        assert_eq!(clamp_area(199), MIN_AREA);
        assert_eq!(clamp_area(-7), MIN_AREA);
        assert_eq!(clamp_area(3001), MAX_AREA);
        assert_eq!(clamp_area(i32::MAX), MAX_AREA);
        assert_eq!(clamp_area(MIN_AREA), MIN_AREA);
        assert_eq!(clamp_area(MAX_AREA), MAX_AREA);
    }

    #[test]
    fn test_clamp_area_is_idempotent() {
        for value in [i32::MIN, -1, 0, 199, 200, 201, 1234, 2999, 3000, 3001, i32::MAX] {
            assert_eq!(clamp_area(clamp_area(value)), clamp_area(value));
        }
    }

    #[test]
    fn test_config_serialization() {
        let json = r#"{"direction": "predecessor", "earth": "sun"}"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.direction, Direction::Predecessor);
        assert_eq!(config.earth, "sun");
        assert_eq!(config.area_size, DEFAULT_AREA);

        let back = serde_json::to_string(&config).unwrap();
        assert!(back.contains("\"predecessor\""));
    }
}
