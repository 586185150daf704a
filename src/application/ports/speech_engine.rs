use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AudioSegment, TaskMode};

#[derive(Debug, Error)]
pub enum SpeechEngineError {
    #[error("speech engine executable not found: {0}")]
    NotFound(String),
    #[error("speech engine execution failed: {0}")]
    ExecutionFailed(String),
    #[error("speech engine output could not be interpreted: {0}")]
    MalformedOutput(String),
    #[error("speech engine timed out after {seconds}s")]
    TimedOut { seconds: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a recognition run produced, before assembly.
///
/// Structured output carries timed segments and possibly the language
/// the engine detected; plain text carries only an unsegmented
/// transcript. Downstream code matches on the shape instead of probing
/// for fields.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    Structured {
        language: Option<String>,
        segments: Vec<AudioSegment>,
    },
    PlainText {
        text: String,
    },
}

impl EngineOutput {
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Structured { language, .. } => language.as_deref(),
            Self::PlainText { .. } => None,
        }
    }
}

/// Runs speech recognition on a canonical WAV file.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// `language` is a caller-supplied hint; `None` lets the engine
    /// detect the spoken language itself.
    async fn transcribe(
        &self,
        audio: &Path,
        language: Option<&str>,
        task: TaskMode,
    ) -> Result<EngineOutput, SpeechEngineError>;
}
