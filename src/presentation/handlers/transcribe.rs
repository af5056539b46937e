use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::TranscriptionError;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

use super::file_field::read_file_field;

const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub original_transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut multipart = multipart?;
    let field = read_file_field(&mut multipart, AUDIO_FIELD).await?;

    tracing::info!(
        filename = field.filename.as_deref().unwrap_or("-"),
        content_type = field.content_type.as_deref().unwrap_or("-"),
        bytes = field.data.len(),
        "Received audio file"
    );

    if field.data.is_empty() {
        return Err(TranscriptionError::EmptyAudio.into());
    }

    let transcript = state
        .transcription_service
        .transcribe(
            &field.data,
            field.filename.as_deref(),
            field.content_type.as_deref(),
        )
        .await?;

    Ok(Json(TranscribeResponse {
        original_transcript: transcript,
    }))
}
