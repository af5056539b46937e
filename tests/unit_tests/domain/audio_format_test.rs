use murmur::domain::AudioFormat;

#[test]
fn given_known_content_types_when_inferring_then_maps_to_matching_suffix() {
    let cases = [
        ("audio/webm", ".webm"),
        ("audio/webm;codecs=opus", ".webm"),
        ("audio/mp3", ".mp3"),
        ("audio/mpeg", ".mp3"),
        ("audio/x-m4a", ".m4a"),
        ("audio/ogg", ".ogg"),
        ("audio/wav", ".wav"),
    ];

    for (content_type, suffix) in cases {
        assert_eq!(
            AudioFormat::infer(None, Some(content_type)).suffix(),
            suffix,
            "content type {}",
            content_type
        );
    }
}

#[test]
fn given_unknown_content_type_when_inferring_then_defaults_to_wav_even_with_filename() {
    let format = AudioFormat::infer(Some("voice.ogg"), Some("application/octet-stream"));

    assert_eq!(format, AudioFormat::Wav);
}

#[test]
fn given_content_type_and_filename_when_inferring_then_content_type_wins() {
    let format = AudioFormat::infer(Some("voice.mp3"), Some("audio/webm"));

    assert_eq!(format, AudioFormat::Webm);
}

#[test]
fn given_no_content_type_when_inferring_then_uses_filename_extension() {
    assert_eq!(AudioFormat::infer(Some("memo.M4A"), None), AudioFormat::M4a);
    assert_eq!(AudioFormat::infer(Some("memo.ogg"), Some("")), AudioFormat::Ogg);
}

#[test]
fn given_unknown_extension_when_inferring_then_defaults_to_wav() {
    assert_eq!(AudioFormat::infer(Some("memo.flac"), None), AudioFormat::Wav);
    assert_eq!(AudioFormat::infer(Some("memo"), None), AudioFormat::Wav);
    assert_eq!(AudioFormat::infer(None, None), AudioFormat::Wav);
}
