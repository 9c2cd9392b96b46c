//! Mutable topology projections of a [`WeightedGraph`].
//!
//! A view is backed by a `StableDiGraph`, so removing nodes or edges never
//! shifts the indices of the survivors. Callers that remove elements while
//! walking the graph take a snapshot first (`node_snapshot`/`edge_snapshot`)
//! and issue removals against the snapshot.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::{EdgeId, GraphKind, NodeId, PlacedNode, Position, WeightedGraph};

/// Node payload inside a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
}

/// Edge payload inside a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEdge {
    pub id: EdgeId,
    pub weight: f32,
}

/// An isolated, mutable copy of a graph's topology.
#[derive(Debug, Clone)]
pub struct GraphView {
    kind: GraphKind,
    graph: StableDiGraph<ViewNode, ViewEdge>,
}

impl GraphView {
    /// Copy the topology of `graph`. Nodes start at the position recorded in
    /// `positions`, or at the origin when absent.
    pub(crate) fn from_graph(graph: &WeightedGraph, positions: &HashMap<NodeId, Position>) -> Self {
        let mut view = StableDiGraph::with_capacity(graph.node_count(), graph.edge_count());
        let mut id_to_index = HashMap::with_capacity(graph.node_count());

        for node in &graph.nodes {
            let idx = view.add_node(ViewNode {
                id: node.id,
                label: node.label.clone(),
                position: positions.get(&node.id).copied().unwrap_or_default(),
            });
            id_to_index.insert(node.id, idx);
        }

        for edge in &graph.edges {
            if let (Some(&from), Some(&to)) =
                (id_to_index.get(&edge.source), id_to_index.get(&edge.target))
            {
                view.add_edge(
                    from,
                    to,
                    ViewEdge {
                        id: edge.id,
                        weight: edge.weight,
                    },
                );
            }
        }

        Self {
            kind: graph.kind,
            graph: view,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Stable copy of the current node indices.
    pub fn node_snapshot(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    /// Stable copy of the current edge indices.
    pub fn edge_snapshot(&self) -> Vec<EdgeIndex> {
        self.graph.edge_indices().collect()
    }

    pub fn node(&self, node: NodeIndex) -> Option<&ViewNode> {
        self.graph.node_weight(node)
    }

    pub fn edge(&self, edge: EdgeIndex) -> Option<&ViewEdge> {
        self.graph.edge_weight(edge)
    }

    pub fn label(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(|n| n.label.as_str())
    }

    pub fn weight(&self, edge: EdgeIndex) -> Option<f32> {
        self.graph.edge_weight(edge).map(|e| e.weight)
    }

    /// `(source, target)` of an edge.
    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    /// First node whose label equals `label`, in index order.
    pub fn find_by_label(&self, label: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].label == label)
    }

    /// Index of the node with the given graph identifier.
    pub fn find_by_id(&self, id: NodeId) -> Option<NodeIndex> {
        self.graph.node_indices().find(|&idx| self.graph[idx].id == id)
    }

    /// Whether an edge `of -> node` exists.
    pub fn is_successor(&self, of: NodeIndex, node: NodeIndex) -> bool {
        self.graph.contains_edge(of, node)
    }

    /// Whether an edge `node -> of` exists.
    pub fn is_predecessor(&self, of: NodeIndex, node: NodeIndex) -> bool {
        self.graph.contains_edge(node, of)
    }

    /// Whether an edge exists between `a` and `b` in either orientation.
    pub fn is_adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.contains_edge(a, b) || self.graph.contains_edge(b, a)
    }

    pub fn out_edges(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| e.id())
            .collect()
    }

    pub fn in_edges(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|e| e.id())
            .collect()
    }

    /// Edges touching `node` at either end. Self-loops are listed once.
    pub fn incident_edges(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges = self.out_edges(node);
        edges.extend(
            self.graph
                .edges_directed(node, Direction::Incoming)
                .filter(|e| e.source() != node)
                .map(|e| e.id()),
        );
        edges
    }

    pub fn remove_node(&mut self, node: NodeIndex) -> Option<ViewNode> {
        self.graph.remove_node(node)
    }

    pub fn remove_edge(&mut self, edge: EdgeIndex) -> Option<ViewEdge> {
        self.graph.remove_edge(edge)
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    pub fn position(&self, node: NodeIndex) -> Option<Position> {
        self.graph.node_weight(node).map(|n| n.position)
    }

    /// Move a node. Returns `false` if the node is not in the view.
    pub fn set_position(&mut self, node: NodeIndex, position: Position) -> bool {
        match self.graph.node_weight_mut(node) {
            Some(n) => {
                n.position = position;
                true
            }
            None => false,
        }
    }

    /// All nodes of the view with their coordinates, in index order.
    pub fn placed_nodes(&self) -> Vec<PlacedNode> {
        self.graph
            .node_weights()
            .map(|n| PlacedNode {
                id: n.id,
                label: n.label.clone(),
                position: n.position,
            })
            .collect()
    }

    pub(crate) fn positions(&self) -> HashMap<NodeId, Position> {
        self.graph
            .node_weights()
            .map(|n| (n.id, n.position))
            .collect()
    }
}
