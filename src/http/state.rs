//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::LabeledDataset;

/// Shared application state passed to all handlers.
///
/// The labeled dataset is loaded and clustered once at startup and treated
/// as read-only for the life of the process; requests only filter it.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<LabeledDataset>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<LabeledDataset>) -> Self {
        Self { dataset }
    }
}
