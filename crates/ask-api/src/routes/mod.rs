//! Route handlers for the ask service.

pub mod ask;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask::ask))
        // Health check
        .route("/health", get(health::health))
}
