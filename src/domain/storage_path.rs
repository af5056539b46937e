use std::fmt;

use super::upload::UploadId;

const FALLBACK_FILENAME: &str = "upload";

/// Location of an uploaded file relative to the content directory.
///
/// Uploads are write-only: the path is `<token>_<filename>` and is never
/// stored, so locating a file later requires both the token and the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_upload(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!(
            "{}_{}",
            upload_id.as_uuid(),
            sanitize_filename(filename)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps only the last path component so a client cannot escape the content directory.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    match last {
        "" | "." | ".." => FALLBACK_FILENAME.to_string(),
        name => name.to_string(),
    }
}
