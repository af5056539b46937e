mod model_handle;
mod transcription_service;

pub use model_handle::ModelHandle;
pub use transcription_service::TranscriptionService;
