use std::io::ErrorKind;
use std::path::Path;

use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizerError};

/// Converts input audio to 16-bit PCM WAV at the configured sample
/// rate and channel count by shelling out to ffmpeg.
pub struct FfmpegNormalizer {
    binary: String,
    sample_rate: u32,
    channels: u8,
}

impl FfmpegNormalizer {
    pub fn new(binary: &str, sample_rate: u32, channels: u8) -> Self {
        Self {
            binary: binary.to_string(),
            sample_rate,
            channels,
        }
    }
}

#[async_trait::async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizerError> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            sample_rate = self.sample_rate,
            channels = self.channels,
            "Converting audio to canonical WAV"
        );

        let result = Command::new(&self.binary)
            .arg("-i")
            .arg(input)
            .args(["-ar", &self.sample_rate.to_string()])
            .args(["-ac", &self.channels.to_string()])
            .args(["-c:a", "pcm_s16le", "-y"])
            .arg(output)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    NormalizerError::ConverterNotFound(format!("{}: {}", self.binary, e))
                } else {
                    NormalizerError::ConversionFailed(format!("spawn: {}", e))
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(NormalizerError::ConversionFailed(
                stderr.trim().to_string(),
            ));
        }

        Ok(())
    }
}
