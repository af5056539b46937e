mod decoder_probe;
mod speech_model;
mod text_enhancer;
mod upload_store;

pub use decoder_probe::DecoderProbe;
pub use speech_model::{SpeechModel, SpeechModelLoader, TranscriptionError};
pub use text_enhancer::{EnhancementError, TextEnhancer};
pub use upload_store::{UploadStore, UploadStoreError};
