/// Container formats the speech model can be handed. The model infers its
/// decoder from the file extension, not from the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Webm,
    Mp3,
    M4a,
    Ogg,
}

/// Content-type fragments checked in order; the first match wins.
const CONTENT_TYPE_TABLE: &[(&str, AudioFormat)] = &[
    ("webm", AudioFormat::Webm),
    ("mp3", AudioFormat::Mp3),
    ("mpeg", AudioFormat::Mp3),
    ("m4a", AudioFormat::M4a),
    ("mp4", AudioFormat::M4a),
    ("ogg", AudioFormat::Ogg),
    ("wav", AudioFormat::Wav),
];

const KNOWN_FORMATS: [AudioFormat; 5] = [
    AudioFormat::Wav,
    AudioFormat::Webm,
    AudioFormat::Mp3,
    AudioFormat::M4a,
    AudioFormat::Ogg,
];

impl AudioFormat {
    pub const DEFAULT: Self = Self::Wav;

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
        }
    }

    /// File suffix including the leading dot.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension())
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let lowered = content_type.to_ascii_lowercase();
        CONTENT_TYPE_TABLE
            .iter()
            .find(|(fragment, _)| lowered.contains(fragment))
            .map(|(_, format)| *format)
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        KNOWN_FORMATS
            .into_iter()
            .find(|format| format.extension() == extension)
    }

    /// A present content type always decides, falling back to the default when
    /// it is not recognised. The filename is only consulted without one.
    pub fn infer(filename: Option<&str>, content_type: Option<&str>) -> Self {
        match content_type.filter(|ct| !ct.is_empty()) {
            Some(ct) => Self::from_content_type(ct).unwrap_or(Self::DEFAULT),
            None => filename
                .and_then(Self::from_filename)
                .unwrap_or(Self::DEFAULT),
        }
    }
}
