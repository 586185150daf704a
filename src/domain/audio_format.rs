use serde::{Deserialize, Serialize};

/// Audio container formats accepted at the pipeline boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Mp3,
    M4a,
    Ogg,
    Flac,
    Webm,
    Mp4,
    Mpeg,
}

impl AudioFormat {
    /// Maps a file extension (with or without a leading dot, any case)
    /// to a supported format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "wav" => Some(Self::Wav),
            "mp3" | "mpga" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "ogg" | "oga" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            "mp4" => Some(Self::Mp4),
            "mpeg" => Some(Self::Mpeg),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Webm => "webm",
            Self::Mp4 => "mp4",
            Self::Mpeg => "mpeg",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
