use std::sync::Arc;

use crate::store::ApplicationStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable application store. Default: `JsonFileStore` over the
    /// configured data file; tests substitute in-memory or failing stores.
    pub store: Arc<dyn ApplicationStore>,
}
