//! Application state for the web layer.

use std::sync::Arc;

use crate::pipeline::Aggregator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Departures pipeline
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}
