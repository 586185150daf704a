use std::path::PathBuf;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::{RequestId, ScratchFile};

/// Scratch store that records acquisitions and releases instead of
/// creating files. Paths point into the system temp directory so that
/// pipeline stages can still write to them.
#[derive(Default)]
pub struct MockScratchStore {
    acquired: Mutex<Vec<PathBuf>>,
    released: Mutex<Vec<PathBuf>>,
}

impl MockScratchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquired(&self) -> Vec<PathBuf> {
        self.acquired.lock().await.clone()
    }

    pub async fn released(&self) -> Vec<PathBuf> {
        self.released.lock().await.clone()
    }

    /// True when every acquired path has been released.
    pub async fn fully_released(&self) -> bool {
        let acquired = self.acquired.lock().await;
        let released = self.released.lock().await;
        acquired.iter().all(|path| released.contains(path))
    }
}

#[async_trait::async_trait]
impl ScratchStore for MockScratchStore {
    async fn acquire(
        &self,
        request: RequestId,
        suffix: &str,
    ) -> Result<ScratchFile, ScratchStoreError> {
        let name = format!("{}-{}{}", request, Uuid::new_v4(), suffix);
        let path = std::env::temp_dir().join(name);
        self.acquired.lock().await.push(path.clone());
        Ok(ScratchFile::new(path, suffix))
    }

    async fn release(&self, file: &ScratchFile) -> Result<(), ScratchStoreError> {
        if let Err(e) = tokio::fs::remove_file(file.path()).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(ScratchStoreError::ReleaseFailed(format!("{}: {}", file, e)));
            }
        }
        self.released.lock().await.push(file.path().to_path_buf());
        Ok(())
    }
}
