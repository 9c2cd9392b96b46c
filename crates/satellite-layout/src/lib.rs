//! Satellite layout: one center node with its direct neighbors arranged around it.
//!
//! The host picks a center ("earth") by label. Each layout pass works on a fresh
//! view of the graph:
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ new view │──▶│    prune     │──▶│    place     │──▶│   publish    │
//! │ (copy)   │   │ earth + its  │   │ radius from  │   │ visible view │
//! │          │   │ satellites   │   │ edge weight  │   │ retire old   │
//! └──────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Satellites connected by weak edges (below the threshold) are pushed out to
//! the band between half and the full area size; strong edges are pulled
//! towards the center in proportion to their weight.
//!
//! ```
//! use satellite_core::{GraphModel, WeightedGraphBuilder};
//! use satellite_layout::SatelliteLayout;
//!
//! let mut builder = WeightedGraphBuilder::directed();
//! let sun = builder.add_node("sun");
//! let earth = builder.add_node("earth");
//! builder.add_edge(sun, earth, 1.0);
//!
//! let mut layout = SatelliteLayout::new();
//! layout.bind(GraphModel::shared(builder.build())).unwrap();
//! layout.set_earth("sun");
//! layout.start().unwrap();
//! layout.step().unwrap();
//! layout.stop().unwrap();
//!
//! assert_eq!(layout.placed_nodes().unwrap().len(), 2);
//! ```

mod config;
mod descriptor;
mod error;
mod layout;
mod place;
mod prune;
mod ranking;
mod stats;

pub use config::{
    clamp_area, Direction, LayoutConfig, DEFAULT_AREA, DEFAULT_THRESHOLD_RATIO, MAX_AREA, MIN_AREA,
};
pub use descriptor::{LayoutInfo, PropertyDescriptor, LAYOUT_INFO, PROPERTIES};
pub use error::LayoutError;
pub use layout::{LayoutState, SatelliteLayout};
pub use place::{place, radius, Placement, RadialParams, AMPLIFY_SCOPE};
pub use prune::{prune, Pruned, Satellite};
pub use ranking::{NodeRanker, RankedNode, SortMetric};
pub use stats::WeightStats;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
