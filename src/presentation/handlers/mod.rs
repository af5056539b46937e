mod enhance;
mod fallback;
mod file_field;
mod health;
mod transcribe;
mod upload;

pub use enhance::{EnhanceParams, EnhanceResponse, enhance_handler};
pub use fallback::not_found_handler;
pub use health::{HealthResponse, health_handler};
pub use transcribe::{TranscribeResponse, transcribe_handler};
pub use upload::{UploadResponse, upload_handler};
