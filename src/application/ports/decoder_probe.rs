use async_trait::async_trait;

use super::TranscriptionError;

/// Checks that the external audio decoder the speech model relies on can be run.
#[async_trait]
pub trait DecoderProbe: Send + Sync {
    async fn ensure_available(&self) -> Result<(), TranscriptionError>;
}
