//! Core graph types for satellite layouts.
//!
//! A [`WeightedGraph`] is the immutable topology handed over by the host. It is
//! wrapped by a [`GraphModel`], which owns the graph together with any number of
//! isolated [`GraphView`]s. Layout algorithms never touch the full graph: they
//! create a view, prune and position it, and then publish it as the visible one.
//!
//! ```text
//! WeightedGraph ──▶ GraphModel ──▶ new_view() ──▶ GraphView (mutable copy)
//!                        ▲                            │
//!                        └──── set_visible_view() ◀───┘
//! ```

mod error;
mod model;
mod view;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use error::{CoreError, CoreResult};
pub use model::{GraphModel, ViewId};
pub use petgraph::stable_graph::{EdgeIndex, NodeIndex};
pub use view::{GraphView, ViewEdge, ViewNode};

/// Identifier for nodes within a [`WeightedGraph`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Identifier for edges within a [`WeightedGraph`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

/// Whether edges have a source and a target, or just two ends.
///
/// The kind is graph-wide: a graph is either fully directed or fully undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

/// A node of the graph.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Display label, used by hosts to pick the center node.
    pub label: String,
}

/// A weighted connection between two nodes.
///
/// For undirected graphs `source` and `target` form an unordered pair.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Originating node identifier.
    pub source: NodeId,
    /// Destination node identifier.
    pub target: NodeId,
    /// Edge weight.
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

/// Full weighted graph as supplied by the host.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// Directed or undirected.
    #[serde(default)]
    pub kind: GraphKind,
    /// All nodes that make up the graph.
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    /// All edges that connect nodes in the graph.
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl WeightedGraph {
    /// Creates an empty graph of the given kind.
    pub fn empty(kind: GraphKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// First node carrying `label`, in insertion order.
    pub fn node_by_label(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Number of edge ends touching each node. A self-loop counts twice.
    pub fn degrees(&self) -> HashMap<NodeId, usize> {
        let mut degrees: HashMap<NodeId, usize> = self.nodes.iter().map(|n| (n.id, 0)).collect();
        for edge in &self.edges {
            for end in [edge.source, edge.target] {
                if let Some(d) = degrees.get_mut(&end) {
                    *d += 1;
                }
            }
        }
        degrees
    }
}

/// Builder for constructing a [`WeightedGraph`] with sequential identifiers.
#[derive(Debug, Default)]
pub struct WeightedGraphBuilder {
    kind: GraphKind,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl WeightedGraphBuilder {
    /// Start a directed graph.
    pub fn directed() -> Self {
        Self::default()
    }

    /// Start an undirected graph.
    pub fn undirected() -> Self {
        Self {
            kind: GraphKind::Undirected,
            ..Self::default()
        }
    }

    /// Add a labelled node.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(GraphNode {
            id,
            label: label.into(),
        });
        id
    }

    /// Add an edge between two known nodes. Returns `None` if either end is unknown.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f32) -> Option<EdgeId> {
        let known = |id: NodeId| self.nodes.iter().any(|n| n.id == id);
        if !known(source) || !known(target) {
            return None;
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(GraphEdge {
            id,
            source,
            target,
            weight,
        });
        Some(id)
    }

    pub fn build(self) -> WeightedGraph {
        WeightedGraph {
            kind: self.kind,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// A 2D position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// A node together with the coordinate assigned to it in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
}
