use murmur::application::ports::{SpeechModelLoader, TranscriptionError};
use murmur::infrastructure::audio::SpeechModelFactory;
use murmur::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

fn openai_settings(api_key: Option<&str>) -> TranscriptionSettings {
    TranscriptionSettings {
        provider: TranscriptionProviderSetting::OpenAi,
        model: "whisper-1".to_string(),
        decoder_binary: "ffmpeg".to_string(),
        staging_dir: None,
        api_key: api_key.map(str::to_string),
        base_url: None,
    }
}

#[tokio::test]
async fn given_openai_provider_without_key_when_loading_then_model_unavailable() {
    let factory = SpeechModelFactory::new(openai_settings(None));

    let err = factory.load().await.err().expect("load should fail");

    assert!(matches!(err, TranscriptionError::ModelUnavailable(_)));
    assert!(err.to_string().contains("api_key"));
}

#[tokio::test]
async fn given_openai_provider_with_blank_key_when_loading_then_model_unavailable() {
    let factory = SpeechModelFactory::new(openai_settings(Some("")));

    let result = factory.load().await;

    assert!(matches!(result, Err(TranscriptionError::ModelUnavailable(_))));
}

#[tokio::test]
async fn given_openai_provider_with_key_when_loading_then_builds_model_without_network() {
    let factory = SpeechModelFactory::new(openai_settings(Some("sk-test")));

    assert!(factory.load().await.is_ok());
}
