use axum::extract::Multipart;
use bytes::Bytes;

use crate::presentation::error::ApiError;

/// A single file part pulled out of a multipart body.
#[derive(Debug)]
pub struct FileField {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Reads the part called `name`, skipping any other fields.
pub async fn read_file_field(multipart: &mut Multipart, name: &str) -> Result<FileField, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(name) {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await?;

        return Ok(FileField {
            filename,
            content_type,
            data,
        });
    }

    tracing::warn!(field = name, "Multipart body without expected file field");
    Err(ApiError::bad_request(format!("Missing file field '{}'", name)))
}
