use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::audio_format::AudioFormat;

/// What the engine is asked to do with the audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskMode {
    /// Transcribe in the spoken language.
    Transcribe,
    /// Translate the speech to English while transcribing.
    Translate,
}

impl Default for TaskMode {
    fn default() -> Self {
        Self::Transcribe
    }
}

impl TaskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcribe => "transcribe",
            Self::Translate => "translate",
        }
    }
}

impl std::fmt::Display for TaskMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transcription request as it enters the pipeline.
///
/// The audio bytes are already validated by the caller; `language` is an
/// optional ISO 639-1 hint that takes precedence over whatever language
/// the engine reports.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Bytes,
    pub format: AudioFormat,
    pub language: Option<String>,
    pub task: TaskMode,
}

impl TranscriptionRequest {
    pub fn new(
        audio: impl Into<Bytes>,
        format: AudioFormat,
        language: Option<String>,
        task: TaskMode,
    ) -> Self {
        Self {
            audio: audio.into(),
            format,
            language,
            task,
        }
    }
}
