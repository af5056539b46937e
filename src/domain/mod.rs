mod audio_format;
mod storage_path;
mod upload;

pub use audio_format::AudioFormat;
pub use storage_path::{StoragePath, sanitize_filename};
pub use upload::{UploadId, UploadRecord};
