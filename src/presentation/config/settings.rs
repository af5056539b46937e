use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub decoder_binary: String,
    /// Directory for staged audio files; the system temp dir when unset.
    #[serde(default)]
    pub staging_dir: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Local,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<Environment>.*` and `APP__*`
    /// environment variables, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_bytes", 100 * 1024 * 1024)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("transcription.provider", "local")?
            .set_default("transcription.model", "openai/whisper-base")?
            .set_default("transcription.decoder_binary", "ffmpeg")?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
