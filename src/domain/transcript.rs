use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::segment::AudioSegment;

/// The assembled output of one transcription invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub language: String,
    /// Audio duration in seconds, `0.0` when the probe could not tell.
    pub duration: f64,
    pub segments: Vec<AudioSegment>,
    /// Wall-clock pipeline time in seconds, rounded to two decimals.
    pub processing_time: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transcript {
    /// Assembles a transcript from engine output.
    ///
    /// When segments are present the full text is their texts joined in
    /// order by single spaces; otherwise it is the engine's raw text,
    /// trimmed.
    pub fn assemble(
        segments: Vec<AudioSegment>,
        fallback_text: &str,
        language: String,
        duration: f64,
        processing_time: f64,
    ) -> Self {
        let text = if segments.is_empty() {
            fallback_text.trim().to_string()
        } else {
            segments
                .iter()
                .map(|segment| segment.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };

        Self {
            text,
            language,
            duration,
            segments,
            processing_time: (processing_time * 100.0).round() / 100.0,
            timestamp: Utc::now(),
        }
    }
}
