use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{SpeechModel, TranscriptionError};
use crate::domain::AudioFormat;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Remote Whisper behind an OpenAI-compatible `/audio/transcriptions` endpoint.
/// Every call is an independent HTTP request, so concurrent use is safe.
pub struct OpenAiWhisperModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperModel {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
        }
    }
}

#[async_trait]
impl SpeechModel for OpenAiWhisperModel {
    async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio = tokio::fs::read(path).await.map_err(|e| {
            TranscriptionError::TranscriptionFailed(format!("read staged audio: {}", e))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();
        let mime = AudioFormat::from_filename(&file_name)
            .unwrap_or(AudioFormat::DEFAULT)
            .mime();

        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        Ok(transcript.trim().to_string())
    }
}
