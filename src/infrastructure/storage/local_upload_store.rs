use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::{StoragePath, UploadId, UploadRecord};

/// Writes uploads into a content directory on the local filesystem.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| UploadStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    #[tracing::instrument(skip(self, content), fields(bytes = content.len()))]
    async fn store(&self, content: Bytes, filename: &str) -> Result<UploadRecord, UploadStoreError> {
        let id = UploadId::new();
        let path = StoragePath::for_upload(&id, filename);
        let store_path = StorePath::from(path.as_str());
        let size_bytes = content.len() as u64;

        self.inner
            .put(&store_path, PutPayload::from(content))
            .await
            .map_err(|e| UploadStoreError::WriteFailed(e.to_string()))?;

        tracing::info!(
            upload_id = %id.as_uuid(),
            path = %path,
            size_bytes,
            "Upload stored"
        );

        Ok(UploadRecord::new(id, filename.to_string(), size_bytes))
    }
}
