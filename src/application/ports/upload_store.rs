use std::io;

use bytes::Bytes;

use crate::domain::UploadRecord;

#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Persists `content` under a freshly generated token and returns the record.
    async fn store(&self, content: Bytes, filename: &str) -> Result<UploadRecord, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
