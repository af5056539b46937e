use axum::http::Uri;

use crate::presentation::error::ApiError;

pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::not_found("Not Found")
}
