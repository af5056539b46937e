use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use serde::{Deserialize, Serialize};

use crate::application::ports::EnhancementError;
use crate::infrastructure::observability::preview_text;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EnhanceParams {
    pub transcription: Option<String>,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub enhanced_transcription: String,
}

/// Accepts `transcription` from the query string or, failing that, an
/// urlencoded form body.
#[tracing::instrument(skip_all)]
pub async fn enhance_handler(
    State(state): State<AppState>,
    Query(query): Query<EnhanceParams>,
    form: Result<Form<EnhanceParams>, FormRejection>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let transcription = query
        .transcription
        .or_else(|| form.ok().and_then(|Form(params)| params.transcription))
        .unwrap_or_default();

    if transcription.is_empty() {
        return Err(EnhancementError::EmptyInput.into());
    }

    tracing::debug!(preview = %preview_text(&transcription), "Enhancing transcription");

    let enhanced = state.enhancer.enhance(&transcription).await?;

    Ok(Json(EnhanceResponse {
        enhanced_transcription: enhanced,
    }))
}
