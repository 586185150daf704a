use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("audio conversion failed: {0}")]
    ConversionFailed(String),
    #[error("audio converter not found: {0}")]
    ConverterNotFound(String),
}

/// Converts arbitrary input audio into the canonical form the speech
/// engine expects (16 kHz mono 16-bit PCM WAV).
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizerError>;
}
