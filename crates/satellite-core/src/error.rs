//! Error types for the graph model.

use thiserror::Error;

use crate::model::ViewId;

/// Result type alias for graph model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while managing graph views.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A view referenced by ID does not exist (never created or already destroyed).
    #[error("view not found: {view:?}")]
    ViewNotFound { view: ViewId },

    /// The main view mirrors the full graph and cannot be destroyed.
    #[error("the main view cannot be destroyed")]
    MainViewProtected,

    /// The visible view must be replaced before it can be destroyed.
    #[error("view {view:?} is visible and cannot be destroyed")]
    VisibleViewProtected { view: ViewId },

    /// Another thread panicked while holding the graph lock.
    #[error("graph lock poisoned")]
    LockPoisoned,
}
