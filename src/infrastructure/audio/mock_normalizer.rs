use std::path::Path;

use crate::application::ports::{AudioNormalizer, NormalizerError};

/// Normalizer that copies the input bytes through unchanged.
pub struct MockNormalizer;

#[async_trait::async_trait]
impl AudioNormalizer for MockNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizerError> {
        tokio::fs::copy(input, output)
            .await
            .map_err(|e| NormalizerError::ConversionFailed(format!("copy: {}", e)))?;
        Ok(())
    }
}
