//! Lays out the planets of a small weighted graph around the sun.
//!
//! Run with: cargo run --example solar_system -- [center-label]

use satellite_core::{GraphModel, WeightedGraphBuilder};
use satellite_layout::{Direction, NodeRanker, SatelliteLayout, SortMetric};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = WeightedGraphBuilder::directed();
    let sun = builder.add_node("sun");
    let planets = [
        ("mercury", 0.4),
        ("venus", 0.7),
        ("earth", 1.0),
        ("mars", 1.5),
        ("jupiter", 5.2),
        ("saturn", 9.5),
    ];
    let mut earth = None;
    for (name, weight) in planets {
        let planet = builder.add_node(name);
        builder.add_edge(sun, planet, weight);
        if name == "earth" {
            earth = Some(planet);
        }
    }
    let moon = builder.add_node("moon");
    if let Some(earth) = earth {
        builder.add_edge(earth, moon, 0.1);
    }

    let mut layout = SatelliteLayout::new();
    layout.bind(GraphModel::shared(builder.build()))?;

    let mut ranker = NodeRanker::new(&layout)?;
    println!("Nodes by degree:");
    for row in ranker.sort_by(SortMetric::Degree) {
        println!("  {:<8} {}", row.label, row.degree);
    }

    let center = std::env::args().nth(1).unwrap_or_else(|| "sun".to_string());
    layout.set_earth(center);
    layout.set_direction(Direction::Successor);
    layout.set_threshold(2.0);

    layout.start()?;
    while layout.is_busy() {
        layout.step()?;
        layout.stop()?;
    }

    println!(
        "Satellites of '{}' (area {}, threshold {}):",
        layout.earth(),
        layout.area_size(),
        layout.threshold()
    );
    for node in layout.placed_nodes()? {
        println!(
            "  {:<8} x={:>9.2} y={:>9.2} r={:>8.2}",
            node.label,
            node.position.x,
            node.position.y,
            node.position.length()
        );
    }

    Ok(())
}
