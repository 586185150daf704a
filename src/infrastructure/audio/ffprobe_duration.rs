use std::path::Path;

use tokio::process::Command;

use crate::application::ports::{DurationProbe, DurationProbeError};

/// Reads the container-level duration of an audio file via ffprobe.
pub struct FfprobeDurationProbe {
    binary: String,
}

impl FfprobeDurationProbe {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DurationProbe for FfprobeDurationProbe {
    async fn duration_secs(&self, audio: &Path) -> Result<f64, DurationProbeError> {
        let result = Command::new(&self.binary)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(audio)
            .output()
            .await
            .map_err(|e| DurationProbeError::ProbeFailed(format!("{}: {}", self.binary, e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(DurationProbeError::ProbeFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&result.stdout);
        let raw = stdout.trim();
        raw.parse::<f64>()
            .map_err(|_| DurationProbeError::MalformedOutput(raw.to_string()))
    }
}
