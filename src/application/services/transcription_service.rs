use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::application::ports::{DecoderProbe, TranscriptionError};
use crate::domain::AudioFormat;
use crate::infrastructure::observability::preview_text;

use super::model_handle::ModelHandle;

const STAGED_FILE_PREFIX: &str = "murmur-audio-";

pub struct TranscriptionService {
    model: Arc<ModelHandle>,
    decoder_probe: Arc<dyn DecoderProbe>,
    staging_dir: PathBuf,
}

impl TranscriptionService {
    pub fn new(
        model: Arc<ModelHandle>,
        decoder_probe: Arc<dyn DecoderProbe>,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            model,
            decoder_probe,
            staging_dir,
        }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe(
        &self,
        audio: &[u8],
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        let format = AudioFormat::infer(filename, content_type);
        let staged = self.stage(audio, format)?;

        tracing::debug!(
            path = %staged.path().display(),
            format = format.extension(),
            "Audio staged for transcription"
        );

        let result = self.run(&staged).await;

        let staged_path = staged.path().to_path_buf();
        if let Err(e) = staged.close() {
            tracing::warn!(
                error = %e,
                path = %staged_path.display(),
                "Failed to remove staged audio file"
            );
        }

        match &result {
            Ok(text) => tracing::info!(
                chars = text.len(),
                preview = %preview_text(text),
                "Transcription completed"
            ),
            Err(e) => tracing::error!(error = %e, "Transcription failed"),
        }

        result
    }

    fn stage(&self, audio: &[u8], format: AudioFormat) -> Result<NamedTempFile, TranscriptionError> {
        let mut staged = tempfile::Builder::new()
            .prefix(STAGED_FILE_PREFIX)
            .suffix(&format.suffix())
            .tempfile_in(&self.staging_dir)?;

        staged.write_all(audio)?;
        staged.flush()?;

        Ok(staged)
    }

    async fn run(&self, staged: &NamedTempFile) -> Result<String, TranscriptionError> {
        self.decoder_probe.ensure_available().await?;

        let model = self.model.get().await?;
        let text = model.transcribe_file(staged.path()).await?;

        Ok(text.trim().to_string())
    }
}
