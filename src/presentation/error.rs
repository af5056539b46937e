use std::any::Any;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{EnhancementError, TranscriptionError, UploadStoreError};

/// Error surfaced to HTTP clients as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<TranscriptionError> for ApiError {
    fn from(err: TranscriptionError) -> Self {
        if err.is_validation() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal(format!("Transcription error: {}", err))
        }
    }
}

impl From<UploadStoreError> for ApiError {
    fn from(err: UploadStoreError) -> Self {
        Self::internal(format!("Upload failed: {}", err))
    }
}

impl From<EnhancementError> for ApiError {
    fn from(err: EnhancementError) -> Self {
        match err {
            EnhancementError::EmptyInput => Self::bad_request(err.to_string()),
            EnhancementError::Failed(_) => Self::internal(format!("Enhancement error: {}", err)),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::new(err.status(), format!("Failed to read multipart: {}", err.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        Self::new(err.status(), err.body_text())
    }
}

/// Turns a handler panic into a 500 carrying the panic message.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    tracing::error!(panic = %message, "Request handler panicked");

    ApiError::internal(message).into_response()
}
