//! End-to-end tests driving the layout through bind/start/step/stop.

use std::collections::HashMap;
use std::f32::consts::TAU;
use std::sync::Arc;

use satellite_core::{GraphModel, PlacedNode, Position, WeightedGraph, WeightedGraphBuilder};
use satellite_layout::{Direction, LayoutConfig, LayoutError, SatelliteLayout, MAX_AREA, MIN_AREA};

// ============================================================================
// Helpers
// ============================================================================

fn run(model: Arc<GraphModel>, configure: impl FnOnce(&mut SatelliteLayout)) -> Vec<PlacedNode> {
    let mut layout = SatelliteLayout::new();
    layout.bind(model).expect("bind");
    configure(&mut layout);
    layout.start().expect("start");
    layout.step().expect("step");
    layout.stop().expect("stop");
    layout.placed_nodes().expect("placed nodes")
}

fn by_label(placed: &[PlacedNode]) -> HashMap<&str, Position> {
    placed.iter().map(|p| (p.label.as_str(), p.position)).collect()
}

fn sorted_labels(placed: &[PlacedNode]) -> Vec<&str> {
    let mut labels: Vec<&str> = placed.iter().map(|p| p.label.as_str()).collect();
    labels.sort_unstable();
    labels
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

/// A(center) -> B (1), A -> C (5), A -> D (9), plus E -> A (2) and an unrelated F -> B (4).
fn planets() -> Arc<GraphModel> {
    let mut builder = WeightedGraphBuilder::directed();
    let a = builder.add_node("A");
    let b = builder.add_node("B");
    let c = builder.add_node("C");
    let d = builder.add_node("D");
    let e = builder.add_node("E");
    let f = builder.add_node("F");
    builder.add_edge(a, b, 1.0);
    builder.add_edge(a, c, 5.0);
    builder.add_edge(a, d, 9.0);
    builder.add_edge(e, a, 2.0);
    builder.add_edge(f, b, 4.0);
    GraphModel::shared(builder.build())
}

fn visible_edge_count(layout: &SatelliteLayout) -> usize {
    let model = layout.graph_model().expect("bound");
    let visible = model.visible_view().expect("visible view");
    model.with_view(visible, |v| v.edge_count()).expect("view")
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_directed_successors_survive() {
    let mut layout = SatelliteLayout::new();
    layout.bind(planets()).unwrap();
    layout.set_earth("A");
    layout.step().unwrap();

    let placed = layout.placed_nodes().unwrap();
    assert_eq!(sorted_labels(&placed), ["A", "B", "C", "D"]);
    assert_eq!(visible_edge_count(&layout), 3);
}

#[test]
fn test_directed_predecessors_survive() {
    let placed = run(planets(), |layout| {
        layout.set_earth("A");
        layout.set_direction(Direction::Predecessor);
        layout.set_threshold(3.0);
    });

    assert_eq!(sorted_labels(&placed), ["A", "E"]);
    let positions = by_label(&placed);
    assert_eq!(positions["A"], Position::ORIGIN);
    // Single satellite sits at angle 0; 2 < 3 so it is amplified.
    let expected = ((3.0 - 2.0) / 3.0 * 0.5 + 0.5) * 500.0;
    assert!(close(positions["E"].x, expected));
    assert!(close(positions["E"].y, 0.0));
}

#[test]
fn test_predecessor_edges_all_point_at_center() {
    let mut builder = WeightedGraphBuilder::directed();
    let a = builder.add_node("A");
    let x = builder.add_node("X");
    let y = builder.add_node("Y");
    builder.add_edge(x, a, 1.0);
    builder.add_edge(y, a, 2.0);
    builder.add_edge(x, y, 3.0);

    let mut layout = SatelliteLayout::new();
    layout.bind(GraphModel::shared(builder.build())).unwrap();
    layout.set_earth("A");
    layout.set_direction(Direction::Predecessor);
    layout.step().unwrap();

    let placed = layout.placed_nodes().unwrap();
    assert_eq!(sorted_labels(&placed), ["A", "X", "Y"]);
    assert_eq!(visible_edge_count(&layout), 2);

    let model = layout.graph_model().expect("bound");
    let visible = model.visible_view().unwrap();
    let all_into_center = model
        .with_view(visible, |view| {
            let center = view.find_by_label("A").expect("center survives");
            view.edge_snapshot()
                .into_iter()
                .all(|e| view.endpoints(e).map(|(_, target)| target) == Some(center))
        })
        .unwrap();
    assert!(all_into_center);
}

#[test]
fn test_undirected_neighbors_survive() {
    let mut builder = WeightedGraphBuilder::undirected();
    let center = builder.add_node("center");
    let b = builder.add_node("B");
    let c = builder.add_node("C");
    let d = builder.add_node("D");
    builder.add_edge(center, b, 0.2);
    builder.add_edge(c, center, 7.0);
    builder.add_edge(b, c, 3.0);
    builder.add_edge(c, d, 1.0);

    let mut layout = SatelliteLayout::new();
    layout.bind(GraphModel::shared(builder.build())).unwrap();
    layout.set_earth("center");
    layout.step().unwrap();

    let placed = layout.placed_nodes().unwrap();
    assert_eq!(sorted_labels(&placed), ["B", "C", "center"]);
    assert_eq!(visible_edge_count(&layout), 2);
    assert_eq!(by_label(&placed)["center"], Position::ORIGIN);
}

#[test]
fn test_unknown_center_empties_view() {
    let placed = run(planets(), |layout| layout.set_earth("ZZZ"));
    assert!(placed.is_empty());
}

#[test]
fn test_empty_center_keeps_full_graph() {
    let mut layout = SatelliteLayout::new();
    layout.bind(planets()).unwrap();
    layout.step().unwrap();

    let placed = layout.placed_nodes().unwrap();
    assert_eq!(placed.len(), 6);
    assert_eq!(visible_edge_count(&layout), 5);
    assert!(placed.iter().all(|p| p.position == Position::ORIGIN));
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_scenario_radii_and_angles() {
    let placed = run(planets(), |layout| {
        layout.set_earth("A");
        layout.set_threshold(3.0);
    });
    let positions = by_label(&placed);
    assert_eq!(positions["A"], Position::ORIGIN);

    // Signed radii for area 500, threshold 3, max weight 9.
    let expected = [("B", 416.6667_f32), ("C", 41.6667), ("D", -125.0)];

    let step = TAU / 3.0;
    let mut slots = Vec::new();
    for (label, signed_radius) in expected {
        let pos = positions[label];
        assert!(close(pos.length(), signed_radius.abs()), "{label}: {pos:?}");

        let (ux, uy) = (pos.x / signed_radius, pos.y / signed_radius);
        let angle = uy.atan2(ux).rem_euclid(TAU);
        let slot = (angle / step).round() as usize % 3;
        assert!((angle - step * (angle / step).round()).abs() < 1e-3);
        slots.push(slot);
    }
    slots.sort_unstable();
    assert_eq!(slots, [0, 1, 2]);
}

#[test]
fn test_weaker_edges_sit_further_out() {
    let mut builder = WeightedGraphBuilder::directed();
    let hub = builder.add_node("hub");
    for (label, w) in [("w1", 1.0), ("w2", 2.0), ("w4", 4.0), ("w8", 8.0)] {
        let n = builder.add_node(label);
        builder.add_edge(hub, n, w);
    }
    builder.add_edge(hub, hub, 100.0);

    let placed = run(GraphModel::shared(builder.build()), |layout| {
        layout.set_earth("hub");
        layout.set_threshold(10.0);
    });
    let positions = by_label(&placed);

    assert_eq!(positions["hub"], Position::ORIGIN);
    let radii: Vec<f32> = ["w1", "w2", "w4", "w8"]
        .iter()
        .map(|l| positions[l].length())
        .collect();
    for pair in radii.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert!(radii.iter().all(|&r| (250.0..=500.0).contains(&r)));
}

#[test]
fn test_threshold_at_max_weight_is_guarded() {
    let placed = run(planets(), |layout| {
        layout.set_earth("A");
        layout.set_threshold(1_000.0);
    });
    let positions = by_label(&placed);

    // Threshold clamps to the max weight (9); D hits the 0 / 0 branch.
    assert_eq!(positions["D"], Position::ORIGIN);
    assert!(positions.values().all(|p| p.x.is_finite() && p.y.is_finite()));
}

// ============================================================================
// Lifecycle and configuration
// ============================================================================

#[test]
fn test_unbound_layout() {
    let mut layout = SatelliteLayout::new();
    assert_eq!(layout.start(), Err(LayoutError::NotInitialized));
    assert_eq!(layout.step(), Err(LayoutError::NotInitialized));
    assert!(!layout.is_busy());
}

#[test]
fn test_repeated_steps_keep_one_published_view() {
    let model = planets();
    let mut layout = SatelliteLayout::new();
    layout.bind(Arc::clone(&model)).unwrap();
    layout.set_earth("A");
    layout.start().unwrap();
    for _ in 0..5 {
        layout.step().unwrap();
        assert_eq!(model.view_count().unwrap(), 2);
        assert_eq!(Some(model.visible_view().unwrap()), layout.current_view());
    }
    assert!(layout.is_busy());
    layout.stop().unwrap();
    assert!(!layout.is_busy());

    // The full graph is never touched by a layout pass.
    assert_eq!(model.read(|g| g.node_count()).unwrap(), 6);
}

#[test]
fn test_config_from_json_is_clamped() -> anyhow::Result<()> {
    let config: LayoutConfig = serde_json::from_str(
        r#"{"direction": "successor", "earth": "A", "area_size": 99999, "threshold": -4.0}"#,
    )?;

    let mut layout = SatelliteLayout::new();
    layout.bind(planets())?;
    layout.apply_config(config);
    assert_eq!(layout.area_size(), MAX_AREA);
    assert_eq!(layout.threshold(), 0.0);

    layout.set_area_size(0);
    assert_eq!(layout.area_size(), MIN_AREA);
    Ok(())
}

#[test]
fn test_graph_from_json() -> anyhow::Result<()> {
    let graph: WeightedGraph = serde_json::from_str(
        r#"{
            "kind": "undirected",
            "nodes": [{"id": 0, "label": "x"}, {"id": 1, "label": "y"}, {"id": 2, "label": "z"}],
            "edges": [{"id": 0, "source": 1, "target": 0, "weight": 2.0}]
        }"#,
    )?;

    let placed = run(GraphModel::shared(graph), |layout| layout.set_earth("x"));
    let positions = by_label(&placed);
    assert_eq!(positions.len(), 2);
    // Default threshold is 0.2; weight 2 is on the strong branch:
    // (2 - 0.2 - 2) * 0.5 * 500 / (2 - 0.2)
    let expected = -0.2 * 0.5 * 500.0 / 1.8;
    assert!(close(positions["y"].x, expected));
    Ok(())
}
