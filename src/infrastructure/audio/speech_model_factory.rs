use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{SpeechModel, SpeechModelLoader, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::candle_whisper_model::CandleWhisperModel;
use super::openai_whisper_model::OpenAiWhisperModel;

/// Builds the configured speech model when the model handle first asks for it.
pub struct SpeechModelFactory {
    settings: TranscriptionSettings,
}

impl SpeechModelFactory {
    pub fn new(settings: TranscriptionSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SpeechModelLoader for SpeechModelFactory {
    async fn load(&self) -> Result<Arc<dyn SpeechModel>, TranscriptionError> {
        match self.settings.provider {
            TranscriptionProviderSetting::Local => {
                let model_id = self.settings.model.clone();
                let decoder_binary = self.settings.decoder_binary.clone();
                let model = tokio::task::spawn_blocking(move || {
                    CandleWhisperModel::load(&model_id, decoder_binary)
                })
                .await
                .map_err(|e| TranscriptionError::ModelUnavailable(format!("task join error: {}", e)))??;
                Ok(Arc::new(model))
            }
            TranscriptionProviderSetting::OpenAi => {
                let key = self
                    .settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| {
                        TranscriptionError::ModelUnavailable(
                            "transcription.api_key is required for the openai provider".to_string(),
                        )
                    })?;
                let model = OpenAiWhisperModel::new(
                    key,
                    self.settings.base_url.clone(),
                    self.settings.model.clone(),
                );
                Ok(Arc::new(model))
            }
        }
    }
}
