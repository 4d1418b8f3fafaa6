//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::Router;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Question router, built once at startup.
    pub router: Arc<Router>,
}

impl AppState {
    /// Create new application state.
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
