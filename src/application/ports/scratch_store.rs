use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{RequestId, ScratchFile};

#[derive(Debug, Error)]
pub enum ScratchStoreError {
    #[error("scratch file creation failed: {0}")]
    CreateFailed(String),
    #[error("scratch file release failed: {0}")]
    ReleaseFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands out uniquely named temporary files for one transcription
/// invocation and takes them back afterwards.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    /// Creates an empty scratch file whose name carries the request id
    /// and ends in `suffix` (e.g. `.wav`). Names never collide across
    /// concurrent invocations.
    async fn acquire(&self, request: RequestId, suffix: &str)
        -> Result<ScratchFile, ScratchStoreError>;

    /// Removes the file. Releasing a file that is already gone is not
    /// an error.
    async fn release(&self, file: &ScratchFile) -> Result<(), ScratchStoreError>;
}
