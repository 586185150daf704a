use std::io::ErrorKind;
use std::path::Path;

use tempfile::TempDir;
use uuid::Uuid;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::{RequestId, ScratchFile};

/// Scratch store backed by a private temporary directory.
///
/// The directory and anything left inside it are removed when the
/// store is dropped, so even files an invocation failed to release do
/// not outlive the process.
pub struct TempDirScratchStore {
    root: TempDir,
}

impl TempDirScratchStore {
    pub fn new() -> Result<Self, ScratchStoreError> {
        let root = tempfile::Builder::new()
            .prefix("kuching-scratch-")
            .tempdir()
            .map_err(ScratchStoreError::Io)?;
        tracing::debug!(root = %root.path().display(), "Scratch directory created");
        Ok(Self { root })
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

#[async_trait::async_trait]
impl ScratchStore for TempDirScratchStore {
    async fn acquire(
        &self,
        request: RequestId,
        suffix: &str,
    ) -> Result<ScratchFile, ScratchStoreError> {
        let name = format!("{}-{}{}", request, Uuid::new_v4(), suffix);
        let path = self.root.path().join(name);

        // create_new guards against name collisions as well.
        tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| ScratchStoreError::CreateFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Scratch file acquired");
        Ok(ScratchFile::new(path, suffix))
    }

    async fn release(&self, file: &ScratchFile) -> Result<(), ScratchStoreError> {
        match tokio::fs::remove_file(file.path()).await {
            Ok(()) => {
                tracing::debug!(path = %file, "Scratch file released");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScratchStoreError::ReleaseFailed(format!("{}: {}", file, e))),
        }
    }
}
