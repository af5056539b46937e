use murmur::presentation::config::{Environment, Settings, TranscriptionProviderSetting};

#[test]
fn given_known_names_when_parsing_environment_then_maps_variants() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_no_settings_file_when_loading_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.storage.upload_dir, "uploads");
    assert_eq!(settings.transcription.provider, TranscriptionProviderSetting::Local);
    assert_eq!(settings.transcription.decoder_binary, "ffmpeg");
    assert!(settings.transcription.api_key.is_none());
    assert!(settings.server.max_upload_bytes > 0);
}
