mod candle_whisper_model;
pub mod ffmpeg;
mod openai_whisper_model;
mod speech_model_factory;

pub use candle_whisper_model::CandleWhisperModel;
pub use ffmpeg::FfmpegProbe;
pub use openai_whisper_model::OpenAiWhisperModel;
pub use speech_model_factory::SpeechModelFactory;
