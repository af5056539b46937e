use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{SpeechModel, TranscriptionError};

use super::ffmpeg::decode_file_to_pcm;

const MEL_FILTERS_REPO: &str = "FL33TW00D-HF/whisper-base";
const MAX_DECODE_TOKENS: usize = 224;

/// Whisper running in-process on Candle. Audio files are decoded by the
/// external ffmpeg binary; inference is serialized because the decoder keeps
/// a KV cache between steps.
pub struct CandleWhisperModel {
    inner: Arc<WhisperInner>,
    decoder_binary: String,
}

struct WhisperInner {
    model: Mutex<m::model::Whisper>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
}

impl CandleWhisperModel {
    /// Downloads (or reuses the cached) weights and builds the model. Blocking.
    pub fn load(model_id: &str, decoder_binary: impl Into<String>) -> Result<Self, TranscriptionError> {
        let device = Device::Cpu;

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing Candle Whisper model"
        );

        let api = Api::new().map_err(|e| TranscriptionError::ModelUnavailable(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo.get("model.safetensors").map_err(|e| {
            TranscriptionError::ModelUnavailable(format!("model.safetensors: {}", e))
        })?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("parse config: {}", e)))?;

        let mel_file = mel_filters_file(config.num_mel_bins)?;
        let mel_repo = api.repo(Repo::new(MEL_FILTERS_REPO.to_string(), RepoType::Model));
        let mel_bytes_path = mel_repo
            .get(mel_file)
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("{}: {}", mel_file, e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("tokenizer: {}", e)))?;

        let mel_bytes = std::fs::read(&mel_bytes_path)
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("mel filters: {}", e)))?;
        let mel_filters = read_mel_filters(&mel_bytes, &config)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| TranscriptionError::ModelUnavailable(format!("weights: {}", e)))?
        };

        let model = m::model::Whisper::load(&vb, config.clone())
            .map_err(|e| TranscriptionError::ModelUnavailable(format!("model: {}", e)))?;

        tracing::info!("Candle Whisper model loaded");

        Ok(Self {
            inner: Arc::new(WhisperInner {
                model: Mutex::new(model),
                tokenizer,
                config,
                device,
                mel_filters,
            }),
            decoder_binary: decoder_binary.into(),
        })
    }
}

#[async_trait]
impl SpeechModel for CandleWhisperModel {
    async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let pcm = decode_file_to_pcm(&self.decoder_binary, path).await?;

        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || inner.transcribe_pcm(&pcm))
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("task join error: {}", e)))?
    }
}

impl WhisperInner {
    fn transcribe_pcm(&self, pcm: &[f32]) -> Result<String, TranscriptionError> {
        let chunk_samples = m::N_SAMPLES;
        let n_mel = self.config.num_mel_bins;

        let mut mel_tensors = Vec::new();
        for chunk in pcm.chunks(chunk_samples) {
            let mut samples = chunk.to_vec();
            samples.resize(chunk_samples, 0.0);

            let mel_data = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
            let n_frames = mel_data.len() / n_mel;

            let mel_tensor = Tensor::from_vec(mel_data, (1, n_mel, n_frames), &self.device)
                .map_err(|e| {
                    TranscriptionError::TranscriptionFailed(format!("mel tensor: {}", e))
                })?;
            mel_tensors.push(mel_tensor);
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| TranscriptionError::TranscriptionFailed("model lock poisoned".to_string()))?;

        let mut segments: Vec<String> = Vec::new();
        for (i, mel_tensor) in mel_tensors.iter().enumerate() {
            tracing::debug!(segment = i, "Transcribing audio segment");
            let text = decode_segment(&mut model, &self.tokenizer, &self.device, mel_tensor);
            model.reset_kv_cache();
            let text = text?;
            if !text.is_empty() {
                segments.push(text);
            }
        }

        tracing::debug!(segments = segments.len(), "Whisper decoding finished");

        Ok(segments.join(" "))
    }
}

fn decode_segment(
    model: &mut m::model::Whisper,
    tokenizer: &Tokenizer,
    device: &Device,
    mel: &Tensor,
) -> Result<String, TranscriptionError> {
    let sot_token = token_id(tokenizer, m::SOT_TOKEN)?;
    let transcribe_token = token_id(tokenizer, m::TRANSCRIBE_TOKEN)?;
    let no_timestamps_token = token_id(tokenizer, m::NO_TIMESTAMPS_TOKEN)?;
    let eot_token = token_id(tokenizer, m::EOT_TOKEN)?;

    let audio_features = model
        .encoder
        .forward(mel, true)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("encoder: {}", e)))?;

    let prompt = [sot_token, transcribe_token, no_timestamps_token];
    let mut tokens = prompt.to_vec();

    for _ in 0..MAX_DECODE_TOKENS {
        let token_tensor = Tensor::new(tokens.as_slice(), device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

        let decoder_output = model
            .decoder
            .forward(&token_tensor, &audio_features, tokens.len() == prompt.len())
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("decoder: {}", e)))?;

        let hidden = decoder_output
            .squeeze(0)
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;
        let logits = model
            .decoder
            .final_linear(&hidden)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("linear: {}", e)))?;

        let seq_len = logits
            .dim(0)
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;
        let next_token = logits
            .get(seq_len - 1)
            .and_then(|l| l.argmax(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

        if next_token == eot_token {
            break;
        }

        tokens.push(next_token);
    }

    let text = tokenizer
        .decode(&tokens[prompt.len()..], true)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("detokenize: {}", e)))?;

    Ok(text.trim().to_string())
}

fn token_id(tokenizer: &Tokenizer, token: &str) -> Result<u32, TranscriptionError> {
    tokenizer.token_to_id(token).ok_or_else(|| {
        TranscriptionError::TranscriptionFailed(format!("token not found: {}", token))
    })
}

fn mel_filters_file(num_mel_bins: usize) -> Result<&'static str, TranscriptionError> {
    match num_mel_bins {
        80 => Ok("melfilters.bytes"),
        128 => Ok("melfilters128.bytes"),
        other => Err(TranscriptionError::ModelUnavailable(format!(
            "unsupported number of mel bins: {}",
            other
        ))),
    }
}

fn read_mel_filters(bytes: &[u8], config: &Config) -> Result<Vec<f32>, TranscriptionError> {
    let expected_len = config.num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(TranscriptionError::ModelUnavailable(format!(
            "mel filters file too small: {} bytes, expected at least {}",
            bytes.len(),
            expected_len * 4
        )));
    }

    Ok(super::ffmpeg::pcm_from_f32le(&bytes[..expected_len * 4]))
}
