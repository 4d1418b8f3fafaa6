//! HTTP front end for the question router.
//!
//! Serves `POST /ask`, `GET /health`, and a static web page for everything
//! else.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use crate::config::{Config, ConfigError};
pub use crate::error::ApiError;
pub use crate::state::AppState;

/// Build the full application: API routes, static fallback and CORS.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    routes::router()
        .fallback_service(ServeDir::new(static_dir.as_ref()).append_index_html_on_directories(true))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
