use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

use super::file_field::read_file_field;

const UPLOAD_FIELD: &str = "file";
const UNNAMED_UPLOAD: &str = "upload";

#[derive(Serialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart?;
    let field = read_file_field(&mut multipart, UPLOAD_FIELD).await?;

    let filename = field
        .filename
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNNAMED_UPLOAD.to_string());

    let record = state
        .upload_store
        .store(field.data, &filename)
        .await
        .inspect_err(|e| tracing::error!(error = %e, filename = %filename, "Upload failed"))?;

    Ok(Json(UploadResponse {
        file_id: record.id.as_uuid().to_string(),
        filename: record.filename,
    }))
}
