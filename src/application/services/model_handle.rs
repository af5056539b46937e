use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::application::ports::{SpeechModel, SpeechModelLoader, TranscriptionError};

/// Lazily loaded speech model shared by every transcription request.
///
/// The loader runs on first demand. Concurrent first callers wait on the same
/// initialization; a failed load leaves the cell empty so a later request can
/// try again.
pub struct ModelHandle {
    loader: Arc<dyn SpeechModelLoader>,
    model: OnceCell<Arc<dyn SpeechModel>>,
}

impl ModelHandle {
    pub fn new(loader: Arc<dyn SpeechModelLoader>) -> Self {
        Self {
            loader,
            model: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn SpeechModel>, TranscriptionError> {
        let model = self
            .model
            .get_or_try_init(|| async {
                tracing::info!("Loading speech model on first use");
                let model = self.loader.load().await?;
                tracing::info!("Speech model ready");
                Ok::<_, TranscriptionError>(model)
            })
            .await?;

        Ok(Arc::clone(model))
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }
}
