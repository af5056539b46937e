use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{DecoderProbe, TranscriptionError};

pub const DEFAULT_DECODER_BINARY: &str = "ffmpeg";
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Probes an ffmpeg-compatible executable by running `<binary> -version`.
#[derive(Debug, Clone)]
pub struct FfmpegProbe {
    binary: String,
}

impl FfmpegProbe {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for FfmpegProbe {
    fn default() -> Self {
        Self::new(DEFAULT_DECODER_BINARY)
    }
}

#[async_trait]
impl DecoderProbe for FfmpegProbe {
    async fn ensure_available(&self) -> Result<(), TranscriptionError> {
        let status = Command::new(&self.binary)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(&self.binary, e))?;

        if !status.success() {
            return Err(TranscriptionError::DecodingFailed(format!(
                "`{} -version` exited with {}",
                self.binary, status
            )));
        }

        Ok(())
    }
}

/// Decodes any container ffmpeg understands into 16 kHz mono f32 samples.
pub async fn decode_file_to_pcm(binary: &str, path: &Path) -> Result<Vec<f32>, TranscriptionError> {
    let output = Command::new(binary)
        .args(["-nostdin", "-hide_banner", "-loglevel", "error", "-i"])
        .arg(path)
        .args(["-f", "f32le", "-acodec", "pcm_f32le", "-ac", "1", "-ar"])
        .arg(TARGET_SAMPLE_RATE.to_string())
        .arg("-")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| spawn_error(binary, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TranscriptionError::DecodingFailed(format!(
            "{} exited with {}: {}",
            binary,
            output.status,
            stderr.trim()
        )));
    }

    let samples = pcm_from_f32le(&output.stdout);
    if samples.is_empty() {
        return Err(TranscriptionError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    tracing::debug!(
        samples = samples.len(),
        duration_secs = samples.len() as f32 / TARGET_SAMPLE_RATE as f32,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(samples)
}

pub fn pcm_from_f32le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

fn spawn_error(binary: &str, error: io::Error) -> TranscriptionError {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            TranscriptionError::DecoderMissing {
                binary: binary.to_string(),
            }
        }
        _ => TranscriptionError::DecodingFailed(format!("failed to run {}: {}", binary, error)),
    }
}
