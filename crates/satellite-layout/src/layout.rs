//! Layout controller: binds a graph model, owns the configuration and drives
//! the prune/place pass through the host's start/step/stop lifecycle.

use std::sync::Arc;

use satellite_core::{CoreError, GraphModel, PlacedNode, ViewId};
use tracing::{debug, info, warn};

use crate::config::{clamp_area, Direction, LayoutConfig};
use crate::error::LayoutError;
use crate::place::{place, RadialParams};
use crate::prune::prune;
use crate::stats::WeightStats;
use crate::Result;

/// Run state as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    /// Not started, or stopped.
    #[default]
    Idle,
    /// Between `start` and `stop`; the host may call `step`.
    Running,
}

impl LayoutState {
    /// Transition on `start`.
    pub fn started(self) -> Self {
        LayoutState::Running
    }

    /// Transition on `stop`.
    pub fn stopped(self) -> Self {
        LayoutState::Idle
    }

    pub fn is_busy(self) -> bool {
        self == LayoutState::Running
    }
}

/// Places the direct neighbors of a chosen center node around it.
///
/// Every `step` builds a new view of the bound graph, prunes it down to the
/// center and its satellites, positions them, publishes the view and only then
/// retires the view published by the previous step.
#[derive(Debug, Default)]
pub struct SatelliteLayout {
    model: Option<Arc<GraphModel>>,
    stats: WeightStats,
    config: LayoutConfig,
    state: LayoutState,
    current_view: Option<ViewId>,
    /// View published before the same model was bound again; retired by the next `step`.
    pending_retirement: Option<ViewId>,
}

impl SatelliteLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a graph, collect its weight statistics and reset every property.
    pub fn bind(&mut self, model: Arc<GraphModel>) -> Result<()> {
        self.stats = model.read(WeightStats::compute)?;
        let rebinding = self
            .model
            .as_ref()
            .is_some_and(|bound| Arc::ptr_eq(bound, &model));
        let published = self.current_view.take().or_else(|| self.pending_retirement.take());
        self.pending_retirement = if rebinding { published } else { None };
        self.model = Some(model);
        self.reset_properties();

        info!(
            min_weight = self.stats.min_weight,
            max_weight = self.stats.max_weight,
            threshold = self.config.threshold,
            "Satellite layout bound to graph"
        );
        Ok(())
    }

    /// Restore the default configuration for the bound graph.
    pub fn reset_properties(&mut self) {
        self.config = LayoutConfig {
            threshold: self.stats.default_threshold(),
            ..LayoutConfig::default()
        };
    }

    fn model(&self) -> Result<&Arc<GraphModel>> {
        self.model.as_ref().ok_or(LayoutError::NotInitialized)
    }

    pub fn start(&mut self) -> Result<()> {
        self.model()?;
        self.state = self.state.started();
        Ok(())
    }

    /// Run one complete prune and place pass.
    pub fn step(&mut self) -> Result<()> {
        let model = Arc::clone(self.model()?);

        let view = model.new_view()?;
        if !self.config.earth.is_empty() {
            let earth = self.config.earth.as_str();
            let direction = self.config.direction;
            let params = RadialParams {
                area_size: self.config.area_size,
                threshold: self.config.threshold,
                max_weight: self.stats.max_weight,
            };

            let placed = model.update_view(view, |graph| {
                prune(graph, earth, direction).map(|pruned| {
                    let mut rng = rand::rng();
                    place(graph, &pruned, &params, &mut rng).len()
                })
            })?;
            debug!(view = view.0, earth, satellites = ?placed, "Layout pass finished");
        }

        model.set_visible_view(view)?;
        let previous = self.current_view.replace(view).or_else(|| self.pending_retirement.take());
        if let Some(old) = previous {
            retire(&model, old)?;
        }

        info!(view = view.0, earth = %self.config.earth, "Published satellite layout");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        self.model()?;
        self.state = self.state.stopped();
        Ok(())
    }

    /// Whether the host may keep calling `step`.
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn is_bound(&self) -> bool {
        self.model.is_some()
    }

    pub fn graph_model(&self) -> Option<&Arc<GraphModel>> {
        self.model.as_ref()
    }

    pub fn stats(&self) -> WeightStats {
        self.stats
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the whole configuration, clamping area size and threshold.
    pub fn apply_config(&mut self, config: LayoutConfig) {
        self.config = LayoutConfig {
            area_size: clamp_area(config.area_size),
            threshold: self.stats.clamp_threshold(config.threshold),
            ..config
        };
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    pub fn earth(&self) -> &str {
        &self.config.earth
    }

    pub fn set_earth(&mut self, earth: impl Into<String>) {
        self.config.earth = earth.into();
    }

    pub fn area_size(&self) -> i32 {
        self.config.area_size
    }

    pub fn set_area_size(&mut self, area_size: i32) {
        self.config.area_size = clamp_area(area_size);
    }

    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.config.threshold = self.stats.clamp_threshold(threshold);
    }

    /// View published by the last `step`, if any since binding.
    pub fn current_view(&self) -> Option<ViewId> {
        self.current_view
    }

    /// Nodes of the visible view with their coordinates.
    pub fn placed_nodes(&self) -> Result<Vec<PlacedNode>> {
        let model = self.model()?;
        let visible = model.visible_view()?;
        Ok(model.with_view(visible, |view| view.placed_nodes())?)
    }
}

/// Destroy a view that is no longer visible. A view the host already
/// destroyed is skipped.
fn retire(model: &GraphModel, view: ViewId) -> Result<()> {
    match model.destroy_view(view) {
        Ok(()) => Ok(()),
        Err(CoreError::ViewNotFound { view }) => {
            warn!(view = view.0, "Previous view already destroyed");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
