use async_trait::async_trait;

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    async fn enhance(&self, text: &str) -> Result<String, EnhancementError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EnhancementError {
    #[error("Transcription text is required")]
    EmptyInput,
    #[error("enhancement failed: {0}")]
    Failed(String),
}
