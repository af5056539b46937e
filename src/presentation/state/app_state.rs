use std::sync::Arc;

use crate::application::ports::{TextEnhancer, UploadStore};
use crate::application::services::TranscriptionService;

/// Shared per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub upload_store: Arc<dyn UploadStore>,
    pub transcription_service: Arc<TranscriptionService>,
    pub enhancer: Arc<dyn TextEnhancer>,
    pub max_upload_bytes: usize,
}
