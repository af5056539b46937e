use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

/// A loaded speech-to-text capability that reads audio from a file path.
///
/// Implementations are shared by every in-flight request and must choose
/// their own policy for concurrent calls.
#[async_trait]
pub trait SpeechModel: Send + Sync {
    async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError>;
}

/// Builds a [`SpeechModel`]. Loading is expensive and is expected to run once.
#[async_trait]
pub trait SpeechModelLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn SpeechModel>, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Empty audio file")]
    EmptyAudio,
    #[error(
        "audio decoder `{binary}` was not found on PATH. Install ffmpeg (e.g. `apt install ffmpeg` or `brew install ffmpeg`) or set transcription.decoder_binary, then retry"
    )]
    DecoderMissing { binary: String },
    #[error(
        "speech model unavailable: {0}. Check the transcription provider settings and that the model files can be downloaded"
    )]
    ModelUnavailable(String),
    #[error("failed to stage audio: {0}")]
    Staging(#[from] io::Error),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}

impl TranscriptionError {
    /// True for failures caused by the request itself rather than the server.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyAudio)
    }
}
