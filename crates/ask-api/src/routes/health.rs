//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    /// Tools the router can dispatch to.
    pub tools: Vec<String>,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let tools = state
        .router
        .registry()
        .list_tools()
        .into_iter()
        .map(String::from)
        .collect();

    Json(Health { status: "ok", tools })
}
