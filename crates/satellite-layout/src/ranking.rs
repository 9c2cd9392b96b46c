//! Helper for choosing the center node from a sorted node list.

use std::cmp::Reverse;

use satellite_core::NodeId;

use crate::layout::SatelliteLayout;
use crate::Result;

/// Ordering applied to the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMetric {
    /// Lexical by label.
    #[default]
    Name,
    /// Most connected first, ties by label.
    Degree,
}

impl SortMetric {
    pub const ALL: [SortMetric; 2] = [SortMetric::Name, SortMetric::Degree];

    pub fn title(&self) -> &'static str {
        match self {
            SortMetric::Name => "Name",
            SortMetric::Degree => "Degree",
        }
    }
}

/// One row of the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedNode {
    pub id: NodeId,
    pub label: String,
    pub degree: usize,
}

/// Node list with a pending center selection.
///
/// The selection is only written back to the layout on [`NodeRanker::commit`].
#[derive(Debug, Clone)]
pub struct NodeRanker {
    rows: Vec<RankedNode>,
    selection: String,
}

impl NodeRanker {
    /// Snapshot the nodes of the layout's bound graph.
    pub fn new(layout: &SatelliteLayout) -> Result<Self> {
        let rows = match layout.graph_model() {
            Some(model) => model.read(|graph| {
                let degrees = graph.degrees();
                graph
                    .nodes
                    .iter()
                    .map(|n| RankedNode {
                        id: n.id,
                        label: n.label.clone(),
                        degree: degrees.get(&n.id).copied().unwrap_or(0),
                    })
                    .collect::<Vec<_>>()
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            rows,
            selection: layout.earth().to_string(),
        })
    }

    /// Re-sort the list.
    pub fn sort_by(&mut self, metric: SortMetric) -> &[RankedNode] {
        match metric {
            SortMetric::Name => self.rows.sort_by(|a, b| a.label.cmp(&b.label)),
            SortMetric::Degree => self
                .rows
                .sort_by(|a, b| (Reverse(a.degree), &a.label).cmp(&(Reverse(b.degree), &b.label))),
        }
        &self.rows
    }

    pub fn rows(&self) -> &[RankedNode] {
        &self.rows
    }

    /// Select the row at `index` of the current ordering; `None` or an index
    /// past the end clears the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index
            .and_then(|i| self.rows.get(i))
            .map(|row| row.label.clone())
            .unwrap_or_default();
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Make the selected node the layout's center.
    pub fn commit(&self, layout: &mut SatelliteLayout) {
        layout.set_earth(self.selection.clone());
    }
}
