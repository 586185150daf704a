use serde::{Deserialize, Serialize};

/// A timed slice of recognized speech.
///
/// Bounds are seconds from the start of the audio. `end` is never less
/// than `start`; constructors clamp rather than reject, since engines
/// occasionally emit reversed timestamps for very short utterances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl AudioSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end: end.max(start),
            text: text.into(),
            confidence: None,
        }
    }

    pub fn with_confidence(start: f64, end: f64, text: impl Into<String>, confidence: f64) -> Self {
        let mut segment = Self::new(start, end, text);
        segment.confidence = Some(confidence);
        segment
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
