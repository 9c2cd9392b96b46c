//! Shared graph model owning the full graph and its views.
//!
//! All access goes through one `RwLock`: statistics scans take the shared read
//! lock, while a layout pass holds the exclusive write lock for the whole of
//! [`GraphModel::update_view`], so no other thread observes a half-pruned view.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::view::GraphView;
use crate::{GraphNode, WeightedGraph};

/// Identifier of a view within a [`GraphModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

impl ViewId {
    /// The view mirroring the full graph. It always exists.
    pub const MAIN: ViewId = ViewId(0);
}

#[derive(Debug)]
struct ModelState {
    graph: WeightedGraph,
    views: HashMap<ViewId, GraphView>,
    visible: ViewId,
    next_view: u64,
}

impl ModelState {
    fn view(&self, id: ViewId) -> CoreResult<&GraphView> {
        self.views.get(&id).ok_or(CoreError::ViewNotFound { view: id })
    }
}

/// Thread-safe owner of a graph and its views.
#[derive(Debug)]
pub struct GraphModel {
    state: RwLock<ModelState>,
}

impl GraphModel {
    /// Wrap a graph. The main view is created and made visible.
    pub fn new(graph: WeightedGraph) -> Self {
        let main = GraphView::from_graph(&graph, &HashMap::new());
        let mut views = HashMap::new();
        views.insert(ViewId::MAIN, main);

        Self {
            state: RwLock::new(ModelState {
                graph,
                views,
                visible: ViewId::MAIN,
                next_view: 1,
            }),
        }
    }

    /// Convenience constructor for the usual shared ownership.
    pub fn shared(graph: WeightedGraph) -> Arc<Self> {
        Arc::new(Self::new(graph))
    }

    fn read_state(&self) -> CoreResult<RwLockReadGuard<'_, ModelState>> {
        self.state.read().map_err(|_| CoreError::LockPoisoned)
    }

    fn write_state(&self) -> CoreResult<RwLockWriteGuard<'_, ModelState>> {
        self.state.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Run `f` against the full graph under the shared read lock.
    pub fn read<R>(&self, f: impl FnOnce(&WeightedGraph) -> R) -> CoreResult<R> {
        let state = self.read_state()?;
        Ok(f(&state.graph))
    }

    /// Clone of the full graph.
    pub fn graph(&self) -> CoreResult<WeightedGraph> {
        self.read(|g| g.clone())
    }

    pub fn is_directed(&self) -> CoreResult<bool> {
        self.read(|g| g.is_directed())
    }

    /// All nodes of the full graph, in insertion order.
    pub fn nodes(&self) -> CoreResult<Vec<GraphNode>> {
        self.read(|g| g.nodes.clone())
    }

    /// Create a new view over the full graph.
    ///
    /// Nodes keep the coordinates they have in the currently visible view.
    pub fn new_view(&self) -> CoreResult<ViewId> {
        let mut state = self.write_state()?;
        let positions = state.view(state.visible)?.positions();
        let view = GraphView::from_graph(&state.graph, &positions);

        let id = ViewId(state.next_view);
        state.next_view += 1;
        state.views.insert(id, view);
        debug!(view = id.0, "Created graph view");
        Ok(id)
    }

    /// Mutate a view while holding the exclusive write lock.
    pub fn update_view<R>(&self, id: ViewId, f: impl FnOnce(&mut GraphView) -> R) -> CoreResult<R> {
        let mut state = self.write_state()?;
        let view = state
            .views
            .get_mut(&id)
            .ok_or(CoreError::ViewNotFound { view: id })?;
        Ok(f(view))
    }

    /// Inspect a view under the shared read lock.
    pub fn with_view<R>(&self, id: ViewId, f: impl FnOnce(&GraphView) -> R) -> CoreResult<R> {
        let state = self.read_state()?;
        Ok(f(state.view(id)?))
    }

    /// Make `id` the rendered view.
    pub fn set_visible_view(&self, id: ViewId) -> CoreResult<()> {
        let mut state = self.write_state()?;
        state.view(id)?;
        state.visible = id;
        debug!(view = id.0, "Published visible view");
        Ok(())
    }

    pub fn visible_view(&self) -> CoreResult<ViewId> {
        Ok(self.read_state()?.visible)
    }

    /// Drop a view. The main view and the visible view cannot be destroyed.
    pub fn destroy_view(&self, id: ViewId) -> CoreResult<()> {
        let mut state = self.write_state()?;
        if id == ViewId::MAIN {
            return Err(CoreError::MainViewProtected);
        }
        if id == state.visible {
            return Err(CoreError::VisibleViewProtected { view: id });
        }
        state
            .views
            .remove(&id)
            .ok_or(CoreError::ViewNotFound { view: id })?;
        debug!(view = id.0, "Destroyed graph view");
        Ok(())
    }

    /// Number of live views, the main view included.
    pub fn view_count(&self) -> CoreResult<usize> {
        Ok(self.read_state()?.views.len())
    }
}
