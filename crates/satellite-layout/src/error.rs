//! Error types for satellite layout operations.

use satellite_core::CoreError;
use thiserror::Error;

/// Errors that can occur while driving the layout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No graph has been bound yet.
    #[error("layout not initialized: bind a graph first")]
    NotInitialized,

    /// The graph model rejected a view operation.
    #[error("graph model error: {0}")]
    Graph(#[from] CoreError),
}
