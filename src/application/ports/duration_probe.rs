use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DurationProbeError {
    #[error("duration probe failed: {0}")]
    ProbeFailed(String),
    #[error("duration probe produced non-numeric output: {0}")]
    MalformedOutput(String),
}

/// Measures the length of an audio file in seconds.
///
/// Probe results only enrich the transcript; callers treat a failed
/// probe as "duration unknown", not as a pipeline failure.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    async fn duration_secs(&self, audio: &Path) -> Result<f64, DurationProbeError>;
}
