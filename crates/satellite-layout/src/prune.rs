//! Reduces a view to the center node and its direct neighbors.
//!
//! Removals are issued against snapshots of the node and edge indices taken
//! before mutation starts, never against the live collections.

use satellite_core::{EdgeIndex, GraphView, NodeIndex};
use tracing::{debug, warn};

use crate::config::Direction;

/// A neighbor of the center that survived pruning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    /// Edge connecting the satellite to the center.
    pub edge: EdgeIndex,
    /// The satellite node itself.
    pub node: NodeIndex,
    /// Weight of `edge`.
    pub weight: f32,
}

/// Outcome of a successful prune.
#[derive(Debug, Clone, PartialEq)]
pub struct Pruned {
    /// The center node.
    pub earth: NodeIndex,
    /// One entry per surviving edge, in view order.
    pub satellites: Vec<Satellite>,
}

/// Prune `view` around the node labelled `earth_label`.
///
/// Directed views keep the successors or predecessors of the center according
/// to `direction`; undirected views keep every adjacent node. When no node
/// carries the label the view is cleared and `None` is returned.
pub fn prune(view: &mut GraphView, earth_label: &str, direction: Direction) -> Option<Pruned> {
    let Some(earth) = view.find_by_label(earth_label) else {
        warn!(earth = earth_label, "Center node not found, clearing view");
        view.clear();
        return None;
    };

    let nodes = view.node_snapshot();
    let satellites = if view.is_directed() {
        prune_directed(view, earth, &nodes, direction)
    } else {
        prune_undirected(view, earth, &nodes)
    };

    debug!(
        earth = earth_label,
        nodes = view.node_count(),
        edges = view.edge_count(),
        satellites = satellites.len(),
        "Pruned view"
    );

    Some(Pruned { earth, satellites })
}

fn prune_directed(
    view: &mut GraphView,
    earth: NodeIndex,
    nodes: &[NodeIndex],
    direction: Direction,
) -> Vec<Satellite> {
    for &node in nodes {
        let keep = node == earth
            || match direction {
                Direction::Successor => view.is_successor(earth, node),
                Direction::Predecessor => view.is_predecessor(earth, node),
            };
        if !keep {
            view.remove_node(node);
        }
    }

    for edge in view.edge_snapshot() {
        let Some((source, target)) = view.endpoints(edge) else {
            continue;
        };
        let anchored = match direction {
            Direction::Successor => source == earth,
            Direction::Predecessor => target == earth,
        };
        if !anchored {
            view.remove_edge(edge);
        }
    }

    let edges = match direction {
        Direction::Successor => view.out_edges(earth),
        Direction::Predecessor => view.in_edges(earth),
    };
    collect_satellites(view, earth, edges)
}

fn prune_undirected(view: &mut GraphView, earth: NodeIndex, nodes: &[NodeIndex]) -> Vec<Satellite> {
    for &node in nodes {
        if node != earth && !view.is_adjacent(earth, node) {
            view.remove_node(node);
        }
    }

    for edge in view.edge_snapshot() {
        let Some((source, target)) = view.endpoints(edge) else {
            continue;
        };
        if source != earth && target != earth {
            view.remove_edge(edge);
        }
    }

    let edges = view.incident_edges(earth);
    collect_satellites(view, earth, edges)
}

/// Resolve the far end of each edge. Self-loops on the center have no
/// satellite and are skipped.
fn collect_satellites(view: &GraphView, earth: NodeIndex, edges: Vec<EdgeIndex>) -> Vec<Satellite> {
    edges
        .into_iter()
        .filter_map(|edge| {
            let (source, target) = view.endpoints(edge)?;
            let node = if source == earth { target } else { source };
            if node == earth {
                return None;
            }
            Some(Satellite {
                edge,
                node,
                weight: view.weight(edge)?,
            })
        })
        .collect()
}
