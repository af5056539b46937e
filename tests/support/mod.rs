#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use murmur::application::ports::{
    DecoderProbe, SpeechModel, SpeechModelLoader, TranscriptionError,
};

pub const TEST_TRANSCRIPT: &str = "the quick brown fox";

/// What the fake model observed for one call.
#[derive(Debug, Clone)]
pub struct StagedCall {
    pub path: PathBuf,
    pub existed: bool,
    pub contents: Vec<u8>,
}

pub enum ModelBehaviour {
    Transcript(String),
    Fail(String),
    Panic(String),
}

pub struct FakeSpeechModel {
    behaviour: ModelBehaviour,
    calls: Mutex<Vec<StagedCall>>,
}

impl FakeSpeechModel {
    pub fn new(behaviour: ModelBehaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StagedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SpeechModel for FakeSpeechModel {
    async fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let contents = std::fs::read(path).unwrap_or_default();
        self.calls.lock().unwrap().push(StagedCall {
            path: path.to_path_buf(),
            existed: path.exists(),
            contents,
        });

        match &self.behaviour {
            ModelBehaviour::Transcript(text) => Ok(format!("  {}\n", text)),
            ModelBehaviour::Fail(message) => {
                Err(TranscriptionError::TranscriptionFailed(message.clone()))
            }
            ModelBehaviour::Panic(message) => panic!("{}", message),
        }
    }
}

/// Hands out one shared fake model and counts how often it was built.
pub struct CountingLoader {
    model: Arc<FakeSpeechModel>,
    loads: AtomicUsize,
    delay: Duration,
}

impl CountingLoader {
    pub fn new(behaviour: ModelBehaviour) -> Self {
        Self {
            model: Arc::new(FakeSpeechModel::new(behaviour)),
            loads: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn transcribing(text: &str) -> Self {
        Self::new(ModelBehaviour::Transcript(text.to_string()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn model(&self) -> Arc<FakeSpeechModel> {
        Arc::clone(&self.model)
    }
}

#[async_trait::async_trait]
impl SpeechModelLoader for CountingLoader {
    async fn load(&self) -> Result<Arc<dyn SpeechModel>, TranscriptionError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.model.clone() as Arc<dyn SpeechModel>)
    }
}

/// Fails the first `failures` loads, then succeeds.
pub struct FlakyLoader {
    failures: usize,
    attempts: AtomicUsize,
}

impl FlakyLoader {
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechModelLoader for FlakyLoader {
    async fn load(&self) -> Result<Arc<dyn SpeechModel>, TranscriptionError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(TranscriptionError::ModelUnavailable(
                "weights not reachable".to_string(),
            ));
        }
        Ok(Arc::new(FakeSpeechModel::new(ModelBehaviour::Transcript(
            TEST_TRANSCRIPT.to_string(),
        ))))
    }
}

pub struct AvailableDecoder;

#[async_trait::async_trait]
impl DecoderProbe for AvailableDecoder {
    async fn ensure_available(&self) -> Result<(), TranscriptionError> {
        Ok(())
    }
}

pub const MISSING_DECODER_BINARY: &str = "murmur-test-no-such-decoder";

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}
