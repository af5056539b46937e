use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of persisting an upload. The stored location is derived from these
/// two fields through [`super::StoragePath::for_upload`]; nothing else records it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRecord {
    pub id: UploadId,
    pub filename: String,
    pub size_bytes: u64,
}

impl UploadRecord {
    pub fn new(id: UploadId, filename: String, size_bytes: u64) -> Self {
        Self {
            id,
            filename,
            size_bytes,
        }
    }
}
