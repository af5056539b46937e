use async_trait::async_trait;

use crate::application::ports::{EnhancementError, TextEnhancer};

/// Returns the transcript unchanged. Stands in until a real text-improvement
/// backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEnhancer;

#[async_trait]
impl TextEnhancer for PassthroughEnhancer {
    async fn enhance(&self, text: &str) -> Result<String, EnhancementError> {
        if text.is_empty() {
            return Err(EnhancementError::EmptyInput);
        }

        Ok(text.to_string())
    }
}
