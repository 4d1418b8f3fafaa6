//! Question endpoint.

use axum::extract::State;
use axum::{Form, Json};
use orchestrator::Transcript;
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Form body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub text: String,
}

/// Answer a question and return the two-turn transcript.
pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Result<Json<Transcript>> {
    if form.text.trim().is_empty() {
        return Err(ApiError::EmptyQuestion);
    }

    info!(len = form.text.len(), "Answering question");

    let transcript = state.router.ask(&form.text).await?;
    Ok(Json(transcript))
}
